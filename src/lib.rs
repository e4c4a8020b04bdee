//! # Greeting Errors
//!
//! A meetup greeting validator and a set of runnable programs showing
//! error handling idioms on top of it, from comparing plain errors up to
//! typed inspection through wrap layers.
//!
//! ## Modules
//!
//! 1. **`validator`** - Turns a name into a welcome message or a `NameError`
//! 2. **`dispatcher`** - Maps each error classification to a rebuttal line
//! 3. **`error`** - Error taxonomy, wrapping, and chain inspection
//! 4. **`cli`** - Flag parsing and logging setup shared by the binaries
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin greet -- --name folks
//! RUST_LOG=debug cargo run --bin greet -- --name 01.10
//!
//! # Progressive examples
//! cargo run --bin p1_comparing_errors
//! cargo run --bin p2_sentinel
//! cargo run --bin p3_custom_errors -- --name "#Golang@CWB"
//! RUST_BACKTRACE=1 cargo run --bin p4_stack_trace -- --name ""
//! cargo run --bin p5_wrapping -- --name 42
//! cargo run --bin p6_error_downcast -- --name "a,b"
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the library error types
//! - `anyhow` - Application-level errors and context in the binaries
//! - `clap` - The `--name` flag
//! - `tracing` - Diagnostics for rejected names

pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod validator;

pub use dispatcher::{greet, greet_untyped, rebuttal, respond, try_greet};
pub use error::{classify, Classification, NameError, WelcomeError};
pub use validator::{validate, validate_untyped, welcome_message};
