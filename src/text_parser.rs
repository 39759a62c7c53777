use crate::{
    error::ParseError, logging::Loggable, outcome::ParseResult, parser::Parse,
};

/// Matches exactly one literal character.
///
/// The only leaf parser. Comparison is plain `char` equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char {
    target: char,
}

impl Char {
    #[inline]
    pub fn new(target: char) -> Self {
        Self { target }
    }

    pub fn target(&self) -> char {
        self.target
    }
}

impl From<char> for Char {
    fn from(target: char) -> Self {
        Self::new(target)
    }
}

/// a parser matching the single character `c`
#[inline]
pub fn literal(c: char) -> Char {
    Char::new(c)
}

impl Parse for Char {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let action = "char";
        input.log_inputs(action, self.target);
        let Some(first) = input.chars().next() else {
            let e = ParseError::EmptyInput;
            input.log_failure(action, self.target, &e);
            return ParseResult::failure(e);
        };
        if first == self.target {
            let rest = &input[first.len_utf8()..];
            rest.log_success(action, self.target, first);
            ParseResult::success(first, rest)
        } else {
            let e = ParseError::mismatch(self.target, first);
            input.log_failure(action, self.target, &e);
            ParseResult::failure(e)
        }
    }

    fn name(&self, indent: &str) -> String {
        format!("{indent}Char({:?})", self.target)
    }
}
