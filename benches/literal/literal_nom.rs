use nom::{bytes::complete::tag, character::complete::one_of, IResult};

fn keyword(s: &str) -> IResult<&str, &str> {
    tag("function")(s)
}

fn vowel(s: &str) -> IResult<&str, char> {
    one_of("aeiou")(s)
}

pub fn nom_keyword(s: &str) -> &str {
    keyword(s).map(|(rest, _)| rest).unwrap_or_default()
}

pub fn nom_vowel(s: &str) -> &str {
    vowel(s).map(|(rest, _)| rest).unwrap_or_default()
}
