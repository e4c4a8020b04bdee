//! Error taxonomy for rejected names, plus the wrapper and inspection
//! helpers used to recover a classification through any number of layers.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Stable tag identifying why a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Empty,
    NumericOnly,
    SpecialCharactersOnly,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Empty => "empty",
            Classification::NumericOnly => "numeric-only",
            Classification::SpecialCharactersOnly => "special-characters-only",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected name. Each variant keeps the original input so messages
/// can embed it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("the name is empty")]
    Empty(String),
    #[error("the name {0:?} contains only numbers")]
    NumericOnly(String),
    #[error("the name {0:?} contains special characters")]
    SpecialCharacters(String),
}

impl NameError {
    pub fn classification(&self) -> Classification {
        match self {
            NameError::Empty(_) => Classification::Empty,
            NameError::NumericOnly(_) => Classification::NumericOnly,
            NameError::SpecialCharacters(_) => Classification::SpecialCharactersOnly,
        }
    }

    /// The input that was rejected, untrimmed.
    pub fn name(&self) -> &str {
        match self {
            NameError::Empty(name)
            | NameError::NumericOnly(name)
            | NameError::SpecialCharacters(name) => name,
        }
    }
}

/// Adds a descriptive layer on top of another error.
/// The backtrace is captured when the wrap happens.
pub struct WelcomeError {
    context: String,
    source: Box<dyn StdError + Send + Sync + 'static>,
    backtrace: Backtrace,
}

impl WelcomeError {
    pub fn wrap<E>(source: E, context: impl Into<String>) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        WelcomeError {
            context: context.into(),
            source: source.into(),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Innermost error of the chain below this layer.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut cause: &(dyn StdError + 'static) = &*self.source;
        while let Some(next) = cause.source() {
            cause = next;
        }
        cause
    }

    pub fn classification(&self) -> Option<Classification> {
        classify(self)
    }
}

impl fmt::Display for WelcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.context)
    }
}

impl fmt::Debug for WelcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WelcomeError")
            .field("context", &self.context)
            .field("source", &self.source)
            .field("backtrace", &self.backtrace)
            .finish()
    }
}

impl StdError for WelcomeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = &*self.source;
        Some(source)
    }
}

/// Iterator over an error and its sources, outermost first.
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Walks the source chain until a `NameError` is found.
pub fn classify(err: &(dyn StdError + 'static)) -> Option<Classification> {
    match err.downcast_ref::<NameError>() {
        Some(name_err) => Some(name_err.classification()),
        None => err.source().and_then(classify),
    }
}

/// First error of type `E` in the chain.
pub fn find<'a, E>(err: &'a (dyn StdError + 'static)) -> Option<&'a E>
where
    E: StdError + 'static,
{
    chain(err).find_map(|e| e.downcast_ref::<E>())
}

/// True when some error in the chain equals `target`.
pub fn is<E>(err: &(dyn StdError + 'static), target: &E) -> bool
where
    E: StdError + PartialEq + 'static,
{
    chain(err).any(|e| e.downcast_ref::<E>() == Some(target))
}

/// Every message in the chain joined with ": ".
pub fn report(err: &(dyn StdError + 'static)) -> String {
    chain(err)
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
