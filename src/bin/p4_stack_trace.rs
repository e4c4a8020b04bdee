//! Example 4: Wrapping with a Stack Trace
//! Context is added on the way up; the cause is recovered at the top.
//!
//! Run with: RUST_BACKTRACE=1 cargo run --bin p4_stack_trace -- --name ""

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use greeting_errors::cli::{self, Args};
use greeting_errors::dispatcher::WELCOME_CONTEXT;
use greeting_errors::{rebuttal, try_greet, validate, NameError};

/// Context is attached with anyhow as the error bubbles up.
fn say_welcome<W: Write>(mut out: W, name: &str) -> Result<()> {
    let message = validate(name).context(WELCOME_CONTEXT)?;
    writeln!(out, "{}", message)?;
    Ok(())
}

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Args::parse();

    println!("=== Context with anyhow ===\n");
    if let Err(err) = say_welcome(io::stdout(), &args.name) {
        let chain = format!("{:#}", err);
        warn!(error = %chain, "greeting rejected");
        println!("  Error: {}", err);
        for cause in err.chain().skip(1) {
            println!("  Caused by: {}", cause);
        }
        match err.root_cause().downcast_ref::<NameError>() {
            Some(cause) => println!("  {}", rebuttal(cause.classification())),
            None => println!("  Root cause is not a name error"),
        }
    }

    println!("\n=== Backtrace Capture ===");
    match try_greet(io::sink(), &args.name) {
        Ok(()) => println!("  Name accepted, no error to trace"),
        Err(err) => {
            println!("  Context: {}", err.context());
            println!("  Root cause: {}", err.root_cause());
            println!("  Backtrace status: {:?}", err.backtrace().status());

            let bt = err.backtrace().to_string();
            if !bt.is_empty() && bt != "disabled backtrace" {
                println!("  Backtrace:");
                for line in bt.lines().take(20) {
                    println!("    {}", line);
                }
                if bt.lines().count() > 20 {
                    println!("    ... (truncated)");
                }
            }
        }
    }

    println!("\n=== Key Points ===");
    println!("1. Each layer adds context without losing the cause");
    println!("2. root_cause() walks back to the original error");
    println!("3. Backtrace captured when the error is wrapped");
    println!("4. Set RUST_BACKTRACE=1 to enable backtraces");
    Ok(())
}
