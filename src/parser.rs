use std::{fmt, sync::Arc};

use crate::combo::{AndThen, Labelled, Map, OrElse};
use crate::outcome::ParseResult;

pub(crate) fn type_suffix(type_name: &str) -> &str {
    if let Some(i) = type_name.rfind("::") {
        &type_name[i + 2..]
    } else {
        type_name
    }
}

/// A parser: a pure function from input text to a [`ParseResult`].
///
/// Parsers hold no per-invocation state, so one grammar can be built once and
/// invoked any number of times, from any number of threads.
pub trait Parse {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a>;

    /// Renders the grammar rooted at this parser as an indented tree.
    fn name(&self, indent: &str) -> String {
        format!(
            "{indent}{parser}",
            parser = type_suffix(std::any::type_name::<Self>())
        )
    }
}

impl<F> Parse for F
where
    F: for<'a> Fn(&'a str) -> ParseResult<'a>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (self)(input)
    }

    fn name(&self, indent: &str) -> String {
        format!("{indent}fn(&str) -> ParseResult")
    }
}

/// Combinator methods available on every parser.
pub trait ParseExt: Parse + Sized {
    /// Fail-fast sequencing, the same as `self + next`.
    fn and_then<P: Parse>(self, next: P) -> AndThen<Self, P> {
        AndThen::new(self, next)
    }

    /// Ordered choice, the same as `self | other`.
    fn or_else<P: Parse>(self, other: P) -> OrElse<Self, P> {
        OrElse::new(self, other)
    }

    /// Post-processes every result, successful or not, with `f`.
    /// The receiver is consumed, not altered; clone a [`Parser`] to keep using it unmapped.
    fn map<F>(self, f: F) -> Map<Self, F>
    where
        F: for<'a> Fn(ParseResult<'a>) -> ParseResult<'a>,
    {
        Map::new(self, f)
    }

    /// Names this parser in trace logs while it runs.
    fn label(self, label: &'static str) -> Labelled<Self> {
        Labelled::new(self, label)
    }

    fn boxed(self) -> Parser
    where
        Self: Send + Sync + 'static,
    {
        Parser::new(self)
    }
}

impl<P: Parse> ParseExt for P {}

/// A type-erased parser handle.
///
/// Cloning is cheap and shares the underlying grammar. The handle is `Send + Sync`, and is
/// what the list folding helpers such as [`choice`](crate::choice) return, since the depth
/// of their folds is only known at runtime.
#[derive(Clone)]
pub struct Parser {
    inner: Arc<dyn Parse + Send + Sync>,
}

impl Parser {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parse + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(parser),
        }
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> ParseResult<'a> + Send + Sync + 'static,
    {
        Self::new(f)
    }
}

impl Parse for Parser {
    #[inline]
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        self.inner.parse(input)
    }

    fn name(&self, indent: &str) -> String {
        self.inner.name(indent)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parser(\n{}\n)", self.name("  "))
    }
}
