//! Greets one meetup participant.
//!
//! Prints a single line: the welcome message, or a rebuttal when the name
//! is rejected. Rejections are also logged to stderr.
//!
//! Run with: cargo run --bin greet -- --name folks

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use greeting_errors::cli::{self, Args};
use greeting_errors::error::report;
use greeting_errors::{respond, try_greet};

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Args::parse();
    let mut out = io::stdout().lock();

    if let Err(err) = try_greet(&mut out, &args.name) {
        warn!(error = %report(&err), "greeting rejected");
        if !respond(&mut out, &err)? {
            return Err(err.into());
        }
    }
    Ok(())
}
