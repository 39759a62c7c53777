mod literal_charcomb;
mod literal_nom;

use criterion::{black_box, criterion_group, Criterion};
use literal_charcomb::{charcomb_keyword, charcomb_vowel};
use literal_nom::{nom_keyword, nom_vowel};
use log::trace;

const KEYWORD_INPUT: &str = "function main() {}";
const VOWEL_INPUT: &str = "underline";

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("keyword_nom", |b| b.iter(|| nom_keyword(black_box(KEYWORD_INPUT))));
    c.bench_function("vowel_nom", |b| b.iter(|| nom_vowel(black_box(VOWEL_INPUT))));
}

pub fn bench_charcomb(c: &mut Criterion) {
    let keyword = literal_charcomb::keyword();
    let vowel = literal_charcomb::vowel();
    c.bench_function("keyword_charcomb", |b| {
        b.iter(|| charcomb_keyword(&keyword, black_box(KEYWORD_INPUT)))
    });
    c.bench_function("vowel_charcomb", |b| {
        b.iter(|| charcomb_vowel(&vowel, black_box(VOWEL_INPUT)))
    });
}

criterion_group!(benches, bench_nom, bench_charcomb);

fn main() {
    env_logger::init();
    trace!(target: "cc", "Logging enabled");
    benches();
    Criterion::default().configure_from_args().final_summary();
}
