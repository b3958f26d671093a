use std::fs;
use std::path::{Path, PathBuf};

use super::{read, split_fields, ParseContext, RawRecord, SourceFormat};
use crate::universe::code_id;
use crate::SourceError;

const FILE_PREFIX: &str = "IDS-UCS-";
const FILE_SUFFIX: &str = ".txt";

/// U-0002A6D6	𪛖	⿱龜⿱龜龜
pub fn parse_line(line: &str, context: &ParseContext) -> Option<RawRecord>
{
    let (code, glyph, raw) = split_fields(line)?;
    let rest = context.normalize(raw);

    Some(RawRecord {
        code: normalize_code(code, glyph),
        glyph: glyph.to_owned(),
        candidates: context.clean(rest.split('\t')),
        raw: raw.to_owned(),
    })
}

/// файлы IDS-UCS-*.txt разбираются в лексикографическом порядке имён
pub fn parse_dir(dir: &Path, context: &ParseContext) -> Result<Vec<RawRecord>, SourceError>
{
    let mut records = vec![];

    for file in files(dir)? {
        let text = read(&file)?;
        let parsed = SourceFormat::Chise.parse_str(&text, context);

        log::debug!("chise: {:?}: {} records", file, parsed.len());

        records.extend(parsed);
    }

    Ok(records)
}

/// подходящие файлы папки, по порядку
pub fn files(dir: &Path) -> Result<Vec<PathBuf>, SourceError>
{
    let entries = fs::read_dir(dir).map_err(|e| SourceError::io(dir, e))?;
    let mut files = vec![];

    for entry in entries {
        let path = entry.map_err(|e| SourceError::io(dir, e))?.path();

        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| {
                name.len() > FILE_PREFIX.len() + FILE_SUFFIX.len()
                    && name.starts_with(FILE_PREFIX)
                    && name.ends_with(FILE_SUFFIX)
            });

        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

/// U+4E00 и U-00020000 приводятся к U+XXXX; если код не разобран - берем код самого символа
fn normalize_code(code: &str, glyph: &str) -> String
{
    let parsed = code
        .strip_prefix("U+")
        .or_else(|| code.strip_prefix("U-"))
        .and_then(|hex| u32::from_str_radix(hex, 16).ok());

    if let Some(code) = parsed {
        return code_id(code);
    }

    let mut chars = glyph.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => code_id(c as u32),
        _ => code.to_owned(),
    }
}
