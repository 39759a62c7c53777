#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

//! A minimal parser combinator toolkit over character sequences.
//!
//! Grammars are built from a single leaf, [`Char`], combined with `+` (fail-fast
//! sequencing) and `|` (ordered choice), post-processed with [`ParseExt::map`], and
//! assembled from lists with [`choice`], [`sequence`], [`any_of`] and
//! [`match_literal_sequence`].
//!
//! ```
//! use charcomb::prelude::*;
//!
//! let greeting = match_literal_sequence("hi".chars()).unwrap() | Char::new('y');
//! let r = greeting.parse("hi there");
//! assert_eq!(r.value().map(Value::to_text).as_deref(), Some("hi"));
//! assert_eq!(r.remaining(), " there");
//! ```
//!
//! Parsing is traced at `trace` level under the log target `cc`, eg
//! `RUST_LOG=cc=trace cargo test -- --nocapture`.

use std::cell::Cell;

mod combo;
mod error;
mod logging;
mod outcome;
mod parser;
mod text_parser;
mod util;
mod value;

pub mod contrib;
pub mod prelude;

#[cfg(feature = "cookbook")]
pub mod cookbook;

pub(crate) const LOG_TARGET: &str = "cc";

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));

pub use crate::combo::{
    any_of, choice, flatten, match_literal_sequence, sequence, AndThen, Labelled, Map, OrElse,
};
pub use crate::error::{GrammarError, ParseError};
pub use crate::outcome::ParseResult;
pub use crate::parser::{Parse, ParseExt, Parser};
pub use crate::text_parser::{literal, Char};
pub use crate::value::Value;
