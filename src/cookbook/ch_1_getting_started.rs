//! single characters, `+` and `|`
//!
//! ```
//! use charcomb::prelude::*;
//!
//! let ab = Char::new('a') + Char::new('b');
//! let r = ab.parse("abc");
//! assert_eq!(r.value().map(Value::to_text).as_deref(), Some("ab"));
//! assert_eq!(r.remaining(), "c");
//! ```
use crate::prelude::*;

/// a sign, `+` or `-`, followed by a single `1`
pub fn signed_one() -> impl Parse {
    (Char::new('+') | Char::new('-')) + Char::new('1')
}
