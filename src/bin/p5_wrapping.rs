//! Example 5: Wrapping Sentinel Errors
//! Sentinels stay recognisable after being wrapped with context.
//!
//! Run with: cargo run --bin p5_wrapping -- --name 42

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use thiserror::Error;
use tracing::warn;

use greeting_errors::cli::{self, Args};
use greeting_errors::dispatcher::WELCOME_CONTEXT;
use greeting_errors::error::{is, report};
use greeting_errors::{rebuttal, validate, Classification, WelcomeError};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
enum NameRejected {
    #[error("the given name is empty")]
    Empty,
    #[error("the given name is a number")]
    Numeric,
    #[error("the given name contains special characters")]
    SpecialCharacters,
}

const ERR_EMPTY_NAME: NameRejected = NameRejected::Empty;
const ERR_NUMERIC_NAME: NameRejected = NameRejected::Numeric;
const ERR_SPECIAL_NAME: NameRejected = NameRejected::SpecialCharacters;

fn welcome(name: &str) -> Result<String, NameRejected> {
    validate(name).map_err(|e| match e.classification() {
        Classification::Empty => ERR_EMPTY_NAME,
        Classification::NumericOnly => ERR_NUMERIC_NAME,
        Classification::SpecialCharactersOnly => ERR_SPECIAL_NAME,
    })
}

fn say_welcome<W: Write>(mut out: W, name: &str) -> Result<(), WelcomeError> {
    let message = welcome(name).map_err(|e| WelcomeError::wrap(e, WELCOME_CONTEXT))?;
    writeln!(out, "{}", message).map_err(|e| WelcomeError::wrap(e, "failed to write"))
}

fn main() -> Result<()> {
    cli::init_tracing();
    let args = Args::parse();

    if let Err(err) = say_welcome(io::stdout(), &args.name) {
        warn!(error = %report(&err), "greeting rejected");
        if is(&err, &ERR_EMPTY_NAME) {
            println!("{}", rebuttal(Classification::Empty));
        }
        if is(&err, &ERR_NUMERIC_NAME) {
            println!("{}", rebuttal(Classification::NumericOnly));
        }
        if is(&err, &ERR_SPECIAL_NAME) {
            println!("{}", rebuttal(Classification::SpecialCharactersOnly));
        }
    }
    Ok(())
}
