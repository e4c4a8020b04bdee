//! Writes the greeting, or a rebuttal picked by the error classification.

use std::error::Error as StdError;
use std::io::{self, Write};

use tracing::debug;

use crate::error::{classify, Classification, WelcomeError};
use crate::validator::{
    validate, validate_untyped, EMPTY_MESSAGE, NUMERIC_MESSAGE, SPECIAL_CHARACTERS_MESSAGE,
};

pub const WELCOME_CONTEXT: &str = "failed to build welcome message";

pub fn rebuttal(classification: Classification) -> &'static str {
    match classification {
        Classification::Empty => "We don't accept anonymous people!",
        Classification::NumericOnly => "I understand, we're all just numbers.",
        Classification::SpecialCharactersOnly => "Do you still use old email providers?",
    }
}

/// Writes exactly one line: the welcome message or the matching rebuttal.
pub fn greet<W: Write>(mut out: W, name: &str) -> io::Result<()> {
    match validate(name) {
        Ok(message) => writeln!(out, "{}", message),
        Err(err) => {
            let classification = err.classification();
            debug!(name, %classification, "name rejected");
            writeln!(out, "{}", rebuttal(classification))
        }
    }
}

/// Writes the welcome message, or returns the rejection wrapped with
/// context. Nothing is written on rejection.
pub fn try_greet<W: Write>(mut out: W, name: &str) -> Result<(), WelcomeError> {
    let message = validate(name).map_err(|e| WelcomeError::wrap(e, WELCOME_CONTEXT))?;
    writeln!(out, "{}", message)
        .map_err(|e| WelcomeError::wrap(e, "failed to write welcome message"))
}

/// Writes the rebuttal for any error whose chain holds a `NameError`.
/// Returns `false` when there is nothing to rebut.
pub fn respond<W: Write>(mut out: W, err: &(dyn StdError + 'static)) -> io::Result<bool> {
    match classify(err) {
        Some(classification) => {
            writeln!(out, "{}", rebuttal(classification))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Dispatch on the message text of [`validate_untyped`].
pub fn greet_untyped<W: Write>(out: W, name: &str) -> io::Result<()> {
    write_untyped(out, validate_untyped(name))
}

// A message that matches none of the known texts gets no rebuttal,
// so a reworded message silently drops the output line.
fn write_untyped<W: Write>(mut out: W, outcome: Result<String, String>) -> io::Result<()> {
    let message = match outcome {
        Ok(message) => message,
        Err(msg) => {
            let classification = match msg.as_str() {
                EMPTY_MESSAGE => Classification::Empty,
                NUMERIC_MESSAGE => Classification::NumericOnly,
                SPECIAL_CHARACTERS_MESSAGE => Classification::SpecialCharactersOnly,
                _ => {
                    debug!(%msg, "unrecognised error message");
                    return Ok(());
                }
            };
            rebuttal(classification).to_string()
        }
    };
    writeln!(out, "{}", message)
}
