use cjk_ids_source::Character;

use crate::tables::{FinalRecord, SourceTable};

/// сводка по источнику
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStats
{
    pub name: String,
    /// символов в источнике
    pub characters: usize,
    /// из них - с хотя бы одним прошедшим проверку кандидатом
    pub with_candidates: usize,
}

/// сводка по результату
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats
{
    pub universe: usize,
    pub sources: Vec<SourceStats>,
    /// символов с канонической IDS
    pub with_ids: usize,
    /// символов без IDS
    pub empty: usize,
    /// символов, у которых есть альтернативы
    pub with_alternates: usize,
}

impl Stats
{
    pub fn collect(universe: &[Character], tables: &[SourceTable], records: &[FinalRecord]) -> Self
    {
        let sources = tables
            .iter()
            .map(|table| SourceStats {
                name: table.name.clone(),
                characters: table.len(),
                with_candidates: table.with_candidates(),
            })
            .collect();

        let with_ids = records.iter().filter(|r| !r.ids.is_empty()).count();

        Self {
            universe: universe.len(),
            sources,
            with_ids,
            empty: records.len() - with_ids,
            with_alternates: records.iter().filter(|r| !r.more.is_empty()).count(),
        }
    }
}

/// информация о собранной таблице
pub fn print(stats: &Stats)
{
    println!(
        "\nIDS:\n  \
        символов: {}\n  \
        с IDS: {}\n  \
        без IDS: {}\n  \
        с альтернативами: {}",
        stats.universe, stats.with_ids, stats.empty, stats.with_alternates,
    );

    println!();

    for source in stats.sources.iter() {
        println!(
            "  {}: символов {}, с кандидатами {}",
            source.name, source.characters, source.with_candidates
        );
    }

    println!();
}
