use std::{error::Error, str::FromStr};

use crate::prelude::*;
use strum::VariantNames;
use strum_macros::{EnumString, EnumVariantNames};

// Example using strum crate.
//
// strum gives us
//   derive(EnumVariantNames) + trait strum::VariantNames => Direction::VARIANTS
//   derive(EnumString) + trait FromStr => Direction::from_str
// one literal sequence per variant name is tried in turn, and the matched
// text turned back into a variant with FromStr
//

#[derive(PartialEq, Debug, EnumVariantNames, EnumString)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

fn direction_grammar() -> Result<Parser, GrammarError> {
    let words = Direction::VARIANTS
        .iter()
        .map(|v| match_literal_sequence(v.chars()))
        .collect::<Result<Vec<_>, _>>()?;
    choice(words)
}

pub fn parse_direction(s: &str) -> Result<(&str, Direction), Box<dyn Error>> {
    let (rest, value) = direction_grammar()?.parse(s).into_result()?;
    Ok((rest, Direction::from_str(&value.to_text())?))
}
