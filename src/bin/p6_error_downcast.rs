//! Example 6: Extracting Typed Errors
//! Find an error of a given type anywhere in the chain and use its data.
//!
//! Run with: cargo run --bin p6_error_downcast -- --name "a,b"

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use greeting_errors::cli::{self, Args};
use greeting_errors::error::{find, report};
use greeting_errors::{rebuttal, try_greet, NameError};

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Args::parse();

    if let Err(err) = try_greet(io::stdout(), &args.name) {
        warn!(error = %report(&err), "greeting rejected");

        if let Some(name_err) = find::<NameError>(&err) {
            println!("{}", rebuttal(name_err.classification()));
            println!("  (rejected input: {:?})", name_err.name());
        } else if let Some(io_err) = find::<io::Error>(&err) {
            println!("  could not write greeting: {}", io_err);
        }
    }
    Ok(())
}
