//! Example 2: Sentinel Errors
//! A fixed error value declared once and compared with `==`.
//!
//! Run with: cargo run --bin p2_sentinel

use greeting_errors::{validate, NameError};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the given name is empty")]
struct EmptyName;

/// The sentinel. Callers compare against it instead of reading the message.
const ERR_EMPTY_NAME: EmptyName = EmptyName;

fn say_hello(name: &str) -> Result<String, EmptyName> {
    if name.is_empty() {
        return Err(ERR_EMPTY_NAME);
    }
    Ok(format!("Hello {}", name))
}

fn main() {
    println!("=== Sentinel Errors ===\n");

    for name in ["", "Gopher"] {
        match say_hello(name) {
            Ok(greeting) => println!("  {:?} -> {}", name, greeting),
            Err(e) if e == ERR_EMPTY_NAME => {
                println!("  {:?} -> Failed to say hello: {}", name, e)
            }
            Err(e) => println!("  {:?} -> Unexpected error: {}", name, e),
        }
    }

    println!("\n=== Sentinels Carrying Data ===");
    // NameError variants keep the input, so equality also checks the name
    let empty = NameError::Empty(String::new());
    for name in ["", " "] {
        let result = validate(name);
        println!(
            "  validate({:?}) == Err(Empty(\"\")): {}",
            name,
            result == Err(empty.clone())
        );
    }

    println!("\n=== Key Points ===");
    println!("1. Sentinels are module-level constants, never mutable globals");
    println!("2. == on a PartialEq error type replaces identity comparison");
    println!("3. Sentinels carry no context; the caller adds it");
}
