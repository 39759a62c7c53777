use once_cell::sync::Lazy;

use crate::prelude::*;

pub static DIGITS: Lazy<Vec<char>> = Lazy::new(|| ('0'..='9').collect());
pub static LOWERCASE: Lazy<Vec<char>> = Lazy::new(|| ('a'..='z').collect());
pub static UPPERCASE: Lazy<Vec<char>> = Lazy::new(|| ('A'..='Z').collect());
pub static HEX_DIGITS: Lazy<Vec<char>> =
    Lazy::new(|| ('0'..='9').chain('a'..='f').chain('A'..='F').collect());

// the tables are never empty, so the class is folded from a known first character
// and building it cannot fail
fn class(first: char, rest: impl Iterator<Item = char>) -> Parser {
    rest.fold(Char::new(first).boxed(), |acc, c| (acc | Char::new(c)).boxed())
}

// the grammars are built on first use and then shared by every caller, on any thread
static DIGIT: Lazy<Parser> = Lazy::new(|| class('0', '1'..='9'));
static LETTER: Lazy<Parser> = Lazy::new(|| class('a', ('b'..='z').chain('A'..='Z')));
static HEX_DIGIT: Lazy<Parser> =
    Lazy::new(|| class('0', ('1'..='9').chain('a'..='f').chain('A'..='F')));

/// `0` to `9`
pub fn digit() -> Parser {
    DIGIT.clone()
}

/// ASCII letters, lowercase tried first
pub fn letter() -> Parser {
    LETTER.clone()
}

pub fn hex_digit() -> Parser {
    HEX_DIGIT.clone()
}
