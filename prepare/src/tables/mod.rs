use std::collections::HashMap;

use cjk_ids_source::{Character, RawRecord};
use rayon::prelude::*;

use crate::ranking::select;

/// кандидаты одного источника по символам
#[derive(Debug, Clone, Default)]
pub struct SourceTable
{
    pub name: String,
    entries: HashMap<String, Vec<String>>,
}

impl SourceTable
{
    /// если у символа несколько записей, используется первая
    pub fn new(name: &str, records: Vec<RawRecord>) -> Self
    {
        let mut entries = HashMap::with_capacity(records.len());

        for record in records {
            entries.entry(record.glyph).or_insert(record.candidates);
        }

        Self {
            name: name.to_owned(),
            entries,
        }
    }

    /// кандидаты символа; отсутствующий символ - пустой список
    pub fn get(&self, glyph: &str) -> &[String]
    {
        self.entries.get(glyph).map(Vec::as_slice).unwrap_or(&[])
    }

    /// количество символов
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// количество символов, у которых остался хотя бы один кандидат
    pub fn with_candidates(&self) -> usize
    {
        self.entries.values().filter(|c| !c.is_empty()).count()
    }
}

/// строка итоговой таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRecord
{
    pub code: String,
    pub glyph: char,
    /// каноническая IDS, может быть пустой
    pub ids: String,
    /// альтернативы по убыванию предпочтения
    pub more: Vec<String>,
}

/// присоединяем кандидатов источников к списку символов и выбираем IDS.
/// символы независимы друг от друга, поэтому считаются параллельно; порядок символов сохраняется
pub fn prepare(universe: &[Character], tables: &[SourceTable]) -> Vec<FinalRecord>
{
    universe
        .par_iter()
        .map(|character| {
            let mut buffer = [0; 4];
            let glyph = character.glyph.encode_utf8(&mut buffer);

            let lists: Vec<&[String]> = tables.iter().map(|table| table.get(glyph)).collect();
            let selection = select(&lists);

            FinalRecord {
                code: character.id.clone(),
                glyph: character.glyph,
                ids: selection.ids,
                more: selection.more,
            }
        })
        .collect()
}
