use std::fs;
use std::path::Path;

use crate::aliases::AliasTable;
use crate::alphabet::Alphabet;
use crate::cleaner::clean;
use crate::SourceError;

pub mod babelstone;
pub mod chise;
pub mod cjkvi;
pub mod yibai;

/// запись источника после разбора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord
{
    /// код символа в виде U+XXXX
    pub code: String,
    /// символ
    pub glyph: String,
    /// прошедшие проверку кандидаты, в порядке предпочтения источника
    pub candidates: Vec<String>,
    /// исходный текст декомпозиций, без замен - для диагностики
    pub raw: String,
}

/// всё, что нужно парсерам помимо самого текста
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a>
{
    pub alphabet: &'a Alphabet,
    pub aliases: &'a AliasTable,
}

impl<'a> ParseContext<'a>
{
    pub fn new(alphabet: &'a Alphabet, aliases: &'a AliasTable) -> Self
    {
        Self { alphabet, aliases }
    }

    /// замена вариантов символов
    #[inline]
    pub fn normalize(&self, text: &str) -> String
    {
        self.aliases.normalize(text)
    }

    /// отбор кандидатов
    #[inline]
    pub fn clean<'s>(&self, candidates: impl Iterator<Item = &'s str>) -> Vec<String>
    {
        clean(candidates, self.alphabet)
    }
}

/// форматы источников IDS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat
{
    /// cjkvi-ids: код, символ, кандидаты через табуляцию, у каждого - метаданные в [...]
    Cjkvi,
    /// BabelStone IDS: код, символ, кандидаты вида ^IDS$(регионы)
    Babelstone,
    /// CHISE IDS: папка с файлами IDS-UCS-*.txt
    Chise,
    /// yibai-ids: символ, кандидаты через ";" или табуляцию, с пометками
    Yibai,
}

impl SourceFormat
{
    pub const ALL: [SourceFormat; 4] = [
        SourceFormat::Cjkvi,
        SourceFormat::Babelstone,
        SourceFormat::Chise,
        SourceFormat::Yibai,
    ];

    pub fn name(&self) -> &'static str
    {
        match self {
            SourceFormat::Cjkvi => "cjkvi",
            SourceFormat::Babelstone => "babelstone",
            SourceFormat::Chise => "chise",
            SourceFormat::Yibai => "yibai",
        }
    }

    /// начало строки-комментария
    fn comment(&self) -> &'static str
    {
        match self {
            SourceFormat::Chise => ";;",
            _ => "#",
        }
    }

    /// разбор источника: файла, или, для CHISE, папки с файлами
    pub fn parse(&self, path: &Path, context: &ParseContext) -> Result<Vec<RawRecord>, SourceError>
    {
        match self {
            SourceFormat::Chise => chise::parse_dir(path, context),
            _ => Ok(self.parse_str(&read(path)?, context)),
        }
    }

    /// разбор текста источника. некорректные строки пропускаются
    pub fn parse_str(&self, text: &str, context: &ParseContext) -> Vec<RawRecord>
    {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let mut records = vec![];

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with(self.comment()) {
                continue;
            }

            let record = match self {
                SourceFormat::Cjkvi => cjkvi::parse_line(line, context),
                SourceFormat::Babelstone => babelstone::parse_line(line, context),
                SourceFormat::Chise => chise::parse_line(line, context),
                SourceFormat::Yibai => yibai::parse_line(line, context),
            };

            match record {
                Some(record) => records.push(record),
                None => log::debug!("{}: line {}: malformed record skipped", self.name(), i + 1),
            }
        }

        records
    }
}

/// код, символ и остаток строки. полей меньше трёх - строка некорректна
pub(crate) fn split_fields(line: &str) -> Option<(&str, &str, &str)>
{
    let mut fields = line.splitn(3, '\t');

    Some((fields.next()?, fields.next()?, fields.next()?))
}

pub(crate) fn read(path: &Path) -> Result<String, SourceError>
{
    fs::read_to_string(path).map_err(|e| SourceError::io(path, e))
}
