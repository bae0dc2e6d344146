use criterion::{criterion_group, criterion_main, Criterion};
use langrank::language::{build_document_profile, LanguageProfile, Provenance};
use langrank::profile::{build_profile, CharNgrams};
use langrank::ranking::rank_languages;
use langrank::LanguageId;
use std::hint::black_box;

const SAMPLES: [(&str, &str); 4] = [
    ("English", "the quick brown fox jumps over the lazy dog while the cat sleeps "),
    ("German", "der schnelle braune fuchs springt über den faulen hund und die katze "),
    ("Spanish", "el rápido zorro marrón salta sobre el perro perezoso y el gato duerme "),
    ("Finnish", "nopea ruskea kettu hyppää laiskan koiran yli ja kissa nukkuu rauhassa "),
];

fn corpus_text(seed: &str) -> String {
    seed.repeat(200)
}

fn setup_languages(extractor: &CharNgrams) -> Vec<LanguageProfile> {
    SAMPLES
        .iter()
        .map(|(name, text)| LanguageProfile {
            language: LanguageId::new(*name).unwrap(),
            provenance: Provenance::BuiltThisRun,
            profile: build_profile(&corpus_text(text), extractor),
        })
        .collect()
}

fn bench_build_profile(c: &mut Criterion) {
    let text = corpus_text(SAMPLES[0].1);
    let unigrams = CharNgrams::unigrams();
    let trigrams = CharNgrams::new(3).unwrap();

    c.bench_function("build_profile_unigram", |b| {
        b.iter(|| build_profile(black_box(&text), &unigrams))
    });
    c.bench_function("build_profile_trigram", |b| {
        b.iter(|| build_profile(black_box(&text), &trigrams))
    });
}

fn bench_rank_languages(c: &mut Criterion) {
    let extractor = CharNgrams::new(2).unwrap();
    let languages = setup_languages(&extractor);
    let document = build_document_profile(SAMPLES[2].1, &extractor);

    c.bench_function("rank_languages_bigram", |b| {
        b.iter(|| rank_languages(black_box(&document), black_box(&languages)))
    });
}

criterion_group!(benches, bench_build_profile, bench_rank_languages);
criterion_main!(benches);
