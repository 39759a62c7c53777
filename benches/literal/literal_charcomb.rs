use charcomb::prelude::*;

pub fn keyword() -> Parser {
    match_literal_sequence("function".chars()).unwrap()
}

pub fn vowel() -> Parser {
    any_of("aeiou".chars()).unwrap()
}

pub fn charcomb_keyword<'a>(p: &Parser, s: &'a str) -> &'a str {
    p.parse(s).remaining()
}

pub fn charcomb_vowel<'a>(p: &Parser, s: &'a str) -> &'a str {
    p.parse(s).remaining()
}
