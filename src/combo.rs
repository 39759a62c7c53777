use std::ops::{Add, BitOr};

use crate::{
    error::GrammarError,
    logging::Loggable,
    outcome::ParseResult,
    parser::{Parse, ParseExt, Parser},
    text_parser::Char,
    value::Value,
    LABEL,
};

// the prefix for a child line of a grammar tree, given the parent's prefix
fn branch(indent: &str, last: bool) -> String {
    let stem = indent.replace("├──", "│  ").replace("└──", "   ");
    format!("{stem}{}", if last { "└──" } else { "├──" })
}

/// Fail-fast sequencing of two parsers.
///
/// Runs `first`, then `second` on what `first` left over. Either failure is returned
/// as is; `second` never runs if `first` fails. On success the payload is the pair
/// `[first, second]` and the remaining input is whatever `second` left.
#[derive(Debug, Clone)]
pub struct AndThen<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndThen<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Parse, B: Parse> Parse for AndThen<A, B> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let (rest, v1) = match self.first.parse(input).into_result() {
            Ok(ok) => ok,
            Err(e) => return ParseResult::failure(e),
        };
        match self.second.parse(rest).into_result() {
            Ok((rest, v2)) => ParseResult::success(Value::List(vec![v1, v2]), rest),
            Err(e) => ParseResult::failure(e),
        }
    }

    fn name(&self, indent: &str) -> String {
        format!(
            "{indent}and_then\n{a}\n{b}",
            a = self.first.name(&branch(indent, false)),
            b = self.second.name(&branch(indent, true)),
        )
    }
}

/// Ordered choice between two parsers.
///
/// The first success wins. Only when `first` fails is `second` tried, on the original
/// input, and its result (success or failure) is returned unchanged.
#[derive(Debug, Clone)]
pub struct OrElse<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrElse<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Parse, B: Parse> Parse for OrElse<A, B> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let res = self.first.parse(input);
        if let Some(e) = res.error() {
            input.log_failure("or_else", "first", e);
            return self.second.parse(input);
        }
        res
    }

    fn name(&self, indent: &str) -> String {
        format!(
            "{indent}or_else\n{a}\n{b}",
            a = self.first.name(&branch(indent, false)),
            b = self.second.name(&branch(indent, true)),
        )
    }
}

/// Applies a transform to every result of the inner parser, failures included.
///
/// Building a `Map` never changes the inner parser.
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<P, F> Parse for Map<P, F>
where
    P: Parse,
    F: for<'a> Fn(ParseResult<'a>) -> ParseResult<'a>,
{
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        (self.f)(self.parser.parse(input))
    }

    fn name(&self, indent: &str) -> String {
        format!(
            "{indent}map\n{p}",
            p = self.parser.name(&branch(indent, true))
        )
    }
}

/// Sets the label shown in trace logs for the duration of the inner parse.
#[derive(Debug, Clone)]
pub struct Labelled<P> {
    parser: P,
    label: &'static str,
}

impl<P> Labelled<P> {
    pub fn new(parser: P, label: &'static str) -> Self {
        Self { parser, label }
    }
}

impl<P: Parse> Parse for Labelled<P> {
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let outer = LABEL.with(|l| l.replace(self.label));
        input.log_inputs("label", self.label);
        let res = self.parser.parse(input);
        LABEL.with(|l| l.set(outer));
        res
    }

    fn name(&self, indent: &str) -> String {
        format!(
            "{indent}{label:?}\n{p}",
            label = self.label,
            p = self.parser.name(&branch(indent, true))
        )
    }
}

macro_rules! combinator_ops {
    ($($ty:ident $(<$($g:ident),+>)?),* $(,)?) => {$(
        impl<$($($g,)+)? Rhs: Parse> Add<Rhs> for $ty $(<$($g),+>)?
        where
            Self: Parse,
        {
            type Output = AndThen<Self, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                AndThen::new(self, rhs)
            }
        }

        impl<$($($g,)+)? Rhs: Parse> BitOr<Rhs> for $ty $(<$($g),+>)?
        where
            Self: Parse,
        {
            type Output = OrElse<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                OrElse::new(self, rhs)
            }
        }
    )*};
}

combinator_ops!(Char, Parser, AndThen<A, B>, OrElse<A, B>, Map<P, F>, Labelled<P>);

/// Alternation folded left over `parsers`: `p1 | p2 | p3 | ...`.
///
/// The first parser to succeed wins. If all fail, the failure returned is that of the
/// last parser in the list.
pub fn choice<I>(parsers: I) -> Result<Parser, GrammarError>
where
    I: IntoIterator,
    I::Item: Parse + Send + Sync + 'static,
{
    let mut parsers = parsers.into_iter();
    let first = parsers.next().ok_or(GrammarError::EmptyChoice)?.boxed();
    Ok(parsers.fold(first, |acc, p| (acc | p).boxed()))
}

/// Sequencing folded left over `parsers`: `((p1 + p2) + p3) + ...`.
///
/// Payloads nest to the left, eg `[['a', 'b'], 'c']` for three parsers; see [`flatten`].
pub fn sequence<I>(parsers: I) -> Result<Parser, GrammarError>
where
    I: IntoIterator,
    I::Item: Parse + Send + Sync + 'static,
{
    let mut parsers = parsers.into_iter();
    let first = parsers.next().ok_or(GrammarError::EmptySequence)?.boxed();
    Ok(parsers.fold(first, |acc, p| (acc + p).boxed()))
}

/// Matches any one of `chars`, tried in order.
pub fn any_of<I>(chars: I) -> Result<Parser, GrammarError>
where
    I: IntoIterator<Item = char>,
{
    choice(chars.into_iter().map(Char::new))
}

/// Collapses a nested payload into one flat list of characters.
/// Failures pass through unchanged.
pub fn flatten(result: ParseResult<'_>) -> ParseResult<'_> {
    result.map_value(Value::into_flat)
}

/// Matches the exact string formed by `chars`, yielding a flat list of the matched
/// characters.
///
/// A mismatch part way through reports the mismatching character, and nothing of the
/// partial match is kept.
pub fn match_literal_sequence<I>(chars: I) -> Result<Parser, GrammarError>
where
    I: IntoIterator<Item = char>,
{
    Ok(sequence(chars.into_iter().map(Char::new))?
        .map(flatten)
        .boxed())
}
