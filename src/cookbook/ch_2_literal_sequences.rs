use crate::prelude::*;

/// `true` or `false`, yielding the flat list of matched characters
///
/// where a word is matched, match_literal_sequence saves writing
/// `Char + Char + ...` and then flattening the nested pairs
pub fn boolean() -> Result<Parser, GrammarError> {
    choice([
        match_literal_sequence("true".chars())?,
        match_literal_sequence("false".chars())?,
    ])
}

/// the result of plain `sequence`, before and after flattening
pub fn nested_and_flat(s: &str) -> Result<(ParseResult<'_>, ParseResult<'_>), GrammarError> {
    let p = sequence("abc".chars().map(Char::new))?;
    let nested = p.parse(s);
    Ok((nested.clone(), flatten(nested)))
}
