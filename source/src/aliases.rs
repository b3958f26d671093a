use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::SourceError;

/// таблица замен: вариант написания символа -> канонический символ (или последовательность).
/// применяется к тексту декомпозиций до проверки, чтобы визуально одинаковые кодировки совпали
#[derive(Debug, Clone, Default)]
pub struct AliasTable
{
    map: HashMap<char, String>,
}

impl AliasTable
{
    /// таблица без замен
    pub fn empty() -> Self
    {
        Self::default()
    }

    /// разбор файла с заменами: разделитель - табуляция, первая строка - заголовок,
    /// первая колонка - заменяемый символ, вторая - замена
    pub fn from_path(path: &Path, alphabet: &Alphabet) -> Result<Self, SourceError>
    {
        let file = File::open(path).map_err(|e| SourceError::io(path, e))?;

        Self::from_reader(file, alphabet)
    }

    pub fn from_reader<R: Read>(reader: R, alphabet: &Alphabet) -> Result<Self, SourceError>
    {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut pairs = vec![];

        for record in reader.records() {
            let record = record?;

            let alias = record.get(0).unwrap_or_default();
            let canonical = record.get(1).unwrap_or_default();

            // строки без замены пропускаем
            if alias.is_empty() || canonical.is_empty() {
                continue;
            }

            pairs.push((alias.to_owned(), canonical.to_owned()));
        }

        Self::from_pairs(pairs, alphabet)
    }

    /// собрать таблицу, проверив её согласованность с алфавитом
    pub fn from_pairs<I, K, V>(pairs: I, alphabet: &Alphabet) -> Result<Self, SourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = HashMap::new();

        for (alias, canonical) in pairs {
            let (alias, canonical) = (alias.as_ref(), canonical.as_ref());

            let mut chars = alias.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(key), None) => key,
                _ => {
                    return Err(SourceError::AliasKeyNotGlyph {
                        alias: alias.to_owned(),
                    })
                }
            };

            // замена не должна прятать настоящий иероглиф
            if alphabet.contains_glyph(key) {
                return Err(SourceError::AliasMasksAlphabet {
                    alias: alias.to_owned(),
                });
            }

            if !alphabet.matches_allowed_alphabet(canonical) {
                return Err(SourceError::AliasTargetNotAllowed {
                    alias: alias.to_owned(),
                    canonical: canonical.to_owned(),
                });
            }

            map.insert(key, canonical.to_owned());
        }

        Ok(Self { map })
    }

    /// замена символов за один проход: результат замены повторно не просматривается
    pub fn normalize(&self, text: &str) -> String
    {
        if self.map.is_empty() {
            return text.to_owned();
        }

        let mut result = String::with_capacity(text.len());

        for c in text.chars() {
            match self.map.get(&c) {
                Some(canonical) => result.push_str(canonical),
                None => result.push(c),
            }
        }

        result
    }

    pub fn len(&self) -> usize
    {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.map.is_empty()
    }
}
