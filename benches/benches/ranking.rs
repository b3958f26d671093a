use cjk_ids_benches::{basic_universe, candidate_lists, source_records};
use cjk_ids_prepare::ranking::select;
use cjk_ids_prepare::tables::{prepare, SourceTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

mod group;

/// выбор IDS одного символа при разном количестве кандидатов
fn select_candidates(c: &mut Criterion)
{
    let mut group = c.benchmark_group("select");
    group::configure(&mut group);

    for per_source in [1, 4, 16] {
        let lists = candidate_lists(0x6797, 4, per_source);
        let lists: Vec<&[String]> = lists.iter().map(Vec::as_slice).collect();

        group.bench_with_input(BenchmarkId::new("4 sources", per_source), &lists, |b, lists| {
            b.iter(|| select(black_box(lists)))
        });
    }

    group.finish();
}

/// вся таблица базового блока
fn prepare_table(c: &mut Criterion)
{
    let mut group = c.benchmark_group("prepare");
    group::configure(&mut group);

    let universe = basic_universe();
    let tables: Vec<SourceTable> = ["cjkvi", "babelstone", "chise", "yibai"]
        .iter()
        .enumerate()
        .map(|(i, name)| SourceTable::new(name, source_records(&universe, i, 3)))
        .collect();

    group.bench_function("cjk-basic", |b| {
        b.iter(|| prepare(black_box(&universe), black_box(&tables)))
    });

    group.finish();
}

criterion_group!(benches, select_candidates, prepare_table);
criterion_main!(benches);
