//! Example 3: Custom Error Types
//! Dispatching on message text vs. dispatching on error variants.
//!
//! Run with: cargo run --bin p3_custom_errors -- --name "#Golang@CWB"

use std::io;

use anyhow::Result;
use clap::Parser;

use greeting_errors::cli::{self, Args};
use greeting_errors::validator::validate_untyped;
use greeting_errors::{greet, greet_untyped, validate, NameError};

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Args::parse();
    let name = args.name.as_str();

    println!("=== Custom Error Types ===\n");
    println!("Name: {:?}\n", name);

    println!("Matching on message text:");
    match validate_untyped(name) {
        Ok(_) => println!("  accepted"),
        Err(msg) => println!("  error string: {:?}", msg),
    }
    greet_untyped(io::stdout(), name)?;

    println!("\nMatching on error variants:");
    match validate(name) {
        Ok(_) => println!("  accepted"),
        Err(NameError::Empty(_)) => println!("  variant: Empty"),
        Err(e @ NameError::NumericOnly(_)) => println!("  variant: NumericOnly ({})", e),
        Err(e @ NameError::SpecialCharacters(_)) => {
            println!("  variant: SpecialCharacters ({})", e)
        }
    }
    greet(io::stdout(), name)?;

    println!("\n=== Key Points ===");
    println!("1. String matching silently breaks when a message is reworded");
    println!("2. An enum makes the compiler check every case is handled");
    println!("3. Variants can carry the input, so messages can quote it");
    Ok(())
}
