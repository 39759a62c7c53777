use crate::prelude::*;

/// a sign is optional: a fallback that matches nothing reads a missing sign as '+'
///
/// map only ever sees the result, never the input, so it cannot give back
/// the unconsumed input; an alternation with a parser consuming nothing can
pub fn optional_sign() -> impl Parse {
    (Char::new('+') | Char::new('-')) | Parser::from_fn(|s| ParseResult::success('+', s))
}

/// map builds a new parser; the handle it was built from is left as it was
pub fn shouted(word: &str) -> Result<(Parser, Parser), GrammarError> {
    let plain = match_literal_sequence(word.chars())?;
    let upper = plain
        .clone()
        .map(|r| r.map_value(|v| Value::from(v.to_text().to_uppercase().as_str())));
    Ok((plain, upper.boxed()))
}
