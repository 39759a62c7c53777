pub use crate::{
    any_of, choice, flatten, literal, match_literal_sequence, sequence, Char, GrammarError,
    Parse, ParseError, ParseExt, ParseResult, Parser, Value,
};
