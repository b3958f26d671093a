use super::{ParseContext, RawRecord};
use crate::universe::code_id;

/// 㐀	⿱一⿰丿㇏(.a);⿱一人
///
/// кода в строке нет: он вычисляется по самому символу
pub fn parse_line(line: &str, context: &ParseContext) -> Option<RawRecord>
{
    let (glyph, raw) = line.split_once('\t')?;

    let mut chars = glyph.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => code_id(c as u32),
        _ => return None,
    };

    let rest = context.normalize(raw);
    let candidates = rest
        .split(|c: char| c == ';' || c == '\t')
        .map(strip_annotation);

    Some(RawRecord {
        code,
        glyph: glyph.to_owned(),
        candidates: context.clean(candidates),
        raw: raw.to_owned(),
    })
}

/// убираем пометки: всё, начиная со скобки, и хвост из точек и строчных латинских букв
pub fn strip_annotation(ids: &str) -> &str
{
    let ids = ids.split_once('(').map_or(ids, |(ids, _)| ids);

    ids.trim_end_matches(|c: char| c == '.' || c.is_ascii_lowercase())
}
