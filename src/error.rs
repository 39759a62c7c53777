use std::{error::Error, fmt};

/// The failure payload of a parse attempt.
///
/// Failures are ordinary values carried inside a [`ParseResult`](crate::ParseResult),
/// never panics. Only the last failure of an alternation survives; there is no
/// aggregation of the branches that were tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// There was nothing left to match against
    EmptyInput,
    Mismatch {
        expected: char,
        found: char,
    },
    /// A free-form description, eg from a `map` transform rejecting a result
    Message(String),
}

impl ParseError {
    #[inline]
    pub fn mismatch(expected: char, found: char) -> Self {
        Self::Mismatch { expected, found }
    }

    pub fn msg(description: impl Into<String>) -> Self {
        Self::Message(description.into())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "No string found to parse")?,
            Self::Mismatch { expected, found } => {
                write!(f, "Expected \"{expected}\" but got \"{found}\"")?
            }
            Self::Message(description) => write!(f, "{description}")?,
        };
        Ok(())
    }
}

impl Error for ParseError {}

/// Raised while building a grammar, before any input is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarError {
    EmptyChoice,
    EmptySequence,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyChoice => write!(f, "choice needs at least one parser")?,
            Self::EmptySequence => write!(f, "sequence needs at least one parser")?,
        };
        Ok(())
    }
}

impl Error for GrammarError {}
