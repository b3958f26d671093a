use super::{split_fields, ParseContext, RawRecord};

/// U+4E0D	不	⿱一②[GJKV]	⿱丆卜[T]
pub fn parse_line(line: &str, context: &ParseContext) -> Option<RawRecord>
{
    let (code, glyph, raw) = split_fields(line)?;
    let rest = context.normalize(raw);

    let candidates = rest
        .split('\t')
        .map(|ids| ids.split_once('[').map_or(ids, |(ids, _)| ids));

    Some(RawRecord {
        code: code.to_owned(),
        glyph: glyph.to_owned(),
        candidates: context.clean(candidates),
        raw: raw.to_owned(),
    })
}
