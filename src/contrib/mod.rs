//! Ready-made character classes, built once and shared.

mod charsets;

pub use charsets::{digit, hex_digit, letter, DIGITS, HEX_DIGITS, LOWERCASE, UPPERCASE};
