use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{ensure, Context};
use cjk_ids_source::{universe, AliasTable, Alphabet, ParseContext, UNIVERSE_KEYS};
use log::info;

use crate::config::Config;
use crate::output::stats::Stats;
use crate::tables::SourceTable;

pub mod config;
pub mod output;
pub mod ranking;
pub mod tables;

/// результат сборки
#[derive(Debug, Clone)]
pub struct Summary
{
    /// записанный файл
    pub path: PathBuf,
    pub stats: Stats,
}

/// собираем таблицу IDS: символы -> алфавит -> замены -> источники -> ранжирование -> файл.
/// при ошибке конфигурации файл не создаётся
pub fn run(config: &Config) -> anyhow::Result<Summary>
{
    info!("create chars");
    let universe = universe(&UNIVERSE_KEYS)?;

    let unique: HashSet<u32> = universe.iter().map(|c| c.code).collect();
    ensure!(
        unique.len() == universe.len(),
        "universe has {} rows for {} codepoints",
        universe.len(),
        unique.len()
    );
    info!("chars = {}", universe.len());

    let alphabet = Alphabet::from_keys(&UNIVERSE_KEYS)?;

    info!("read char map {:?}", config.aliases);
    let aliases = AliasTable::from_path(&config.aliases, &alphabet)
        .with_context(|| format!("invalid char map {:?}", config.aliases))?;
    info!("aliases = {}", aliases.len());

    let context = ParseContext::new(&alphabet, &aliases);
    let mut tables = Vec::with_capacity(config.sources.len());

    for source in config.sources.iter() {
        let name = source.format.name();

        info!("read {} from {:?}", name, source.path);
        let records = source
            .format
            .parse(&source.path, &context)
            .with_context(|| format!("cannot read source {}", name))?;
        info!("{} = {} records", name, records.len());

        tables.push(SourceTable::new(name, records));
    }

    info!("select candidates");
    let records = crate::tables::prepare(&universe, &tables);

    let path = output::write_file(&records, &config.output_dir)?;
    info!("saved IDS to {:?}", path);

    Ok(Summary {
        path,
        stats: Stats::collect(&universe, &tables, &records),
    })
}
