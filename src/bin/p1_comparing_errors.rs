//! Example 1: Comparing Errors
//! Two errors built from the same message are only equal if their type says so.
//!
//! Run with: cargo run --bin p1_comparing_errors

use anyhow::bail;
use thiserror::Error;

/// Division that reports failure with an opaque, message-only error.
fn div(dividend: i32, divisor: i32) -> anyhow::Result<i32> {
    if divisor == 0 {
        bail!("division by zero");
    }
    Ok(dividend / divisor)
}

#[derive(Error, Debug, PartialEq)]
enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Same division, but the error is a value that can be compared.
fn checked_div(dividend: i32, divisor: i32) -> Result<i32, ArithmeticError> {
    if divisor == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(dividend / divisor)
}

fn main() {
    println!("=== Comparing Errors ===\n");

    match div(10, 2) {
        Ok(n) => println!("  10 / 2 = {}", n),
        Err(e) => println!("  Error: {}", e),
    }

    println!("\n=== Opaque Errors (anyhow) ===");
    if let (Err(err1), Err(err2)) = (div(10, 0), div(10, 0)) {
        println!("  err1: {}", err1);
        println!("  err2: {}", err2);
        println!("  anyhow::Error has no PartialEq; only the text can be compared");
        println!("  err1.to_string() == err2.to_string(): {}", err1.to_string() == err2.to_string());
    }

    println!("\n=== Typed Errors (thiserror) ===");
    let err1 = checked_div(10, 0);
    let err2 = checked_div(10, 0);
    println!("  err1: {:?}", err1);
    println!("  err2: {:?}", err2);
    println!("  err1 == err2: {}", err1 == err2);
    println!(
        "  matches DivisionByZero: {}",
        matches!(err1, Err(ArithmeticError::DivisionByZero))
    );

    println!("\n=== Key Points ===");
    println!("1. Opaque errors carry a message, not an identity you can test");
    println!("2. Comparing message text breaks as soon as the wording changes");
    println!("3. Deriving PartialEq on an error enum makes equality explicit");
}
