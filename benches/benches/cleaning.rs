use cjk_ids_benches::{basic_universe, cjkvi_text};
use cjk_ids_source::{clean, AliasTable, Alphabet, ParseContext, SourceFormat, UNIVERSE_KEYS};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

mod group;

/// проверка кандидатов по алфавиту
fn clean_candidates(c: &mut Criterion)
{
    let mut group = c.benchmark_group("clean");
    group::configure(&mut group);

    let alphabet = Alphabet::from_keys(&UNIVERSE_KEYS).unwrap();
    let candidates = ["⿰木木", "⿱一𠂈", "⿰木①", "木木", "⿱丆卜", "⿰木木", "&CDP-8B45;"];

    group.bench_function("mixed", |b| {
        b.iter(|| clean(black_box(candidates), &alphabet))
    });

    group.finish();
}

/// разбор текста источника: замены, пометки, проверка
fn parse_source(c: &mut Criterion)
{
    let mut group = c.benchmark_group("parse");
    group::configure(&mut group);

    let alphabet = Alphabet::from_keys(&UNIVERSE_KEYS).unwrap();
    let aliases = AliasTable::from_pairs([("\u{E000}", "木")], &alphabet).unwrap();
    let context = ParseContext::new(&alphabet, &aliases);

    let universe = basic_universe();

    for per_line in [1, 3] {
        let text = cjkvi_text(&universe, per_line);

        group.bench_with_input(BenchmarkId::new("cjkvi", per_line), &text, |b, text| {
            b.iter(|| SourceFormat::Cjkvi.parse_str(black_box(text), &context))
        });
    }

    group.finish();
}

criterion_group!(benches, clean_candidates, parse_source);
criterion_main!(benches);
