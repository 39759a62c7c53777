use crate::{error::ParseError, value::Value};

/// The outcome of one parse attempt.
///
/// On success it holds the matched [`Value`] and the unconsumed suffix of the input.
/// On failure it holds the [`ParseError`], and the remaining input is always `""`;
/// no partial position is reported for failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'a> {
    outcome: Result<Value, ParseError>,
    remaining: &'a str,
}

impl<'a> ParseResult<'a> {
    #[inline]
    pub fn success(value: impl Into<Value>, remaining: &'a str) -> Self {
        Self {
            outcome: Ok(value.into()),
            remaining,
        }
    }

    #[inline]
    pub fn failure(error: ParseError) -> Self {
        Self {
            outcome: Err(error),
            remaining: "",
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn value(&self) -> Option<&Value> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.outcome.as_ref().err()
    }

    /// the human readable error description, if this attempt failed
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Replaces the payload of a success, leaving failures untouched.
    pub fn map_value(self, f: impl FnOnce(Value) -> Value) -> Self {
        Self {
            outcome: self.outcome.map(f),
            remaining: self.remaining,
        }
    }

    /// `(remaining, value)` in the style of hand written `&str` parsers
    pub fn into_result(self) -> Result<(&'a str, Value), ParseError> {
        let remaining = self.remaining;
        self.outcome.map(|v| (remaining, v))
    }
}

impl<'a> From<ParseResult<'a>> for Result<(&'a str, Value), ParseError> {
    fn from(r: ParseResult<'a>) -> Self {
        r.into_result()
    }
}
