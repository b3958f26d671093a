use super::{split_fields, ParseContext, RawRecord};

/// U+4E0D	不	^⿱一𠂈$(GHJKTV)	^⿱丆卜$(X)
///
/// кандидат без завершающего $ не дописан и отбрасывается
pub fn parse_line(line: &str, context: &ParseContext) -> Option<RawRecord>
{
    let (code, glyph, raw) = split_fields(line)?;
    let rest = context.normalize(raw);

    let candidates = rest
        .split('^')
        .filter_map(|ids| ids.split_once('$').map(|(ids, _)| ids));

    Some(RawRecord {
        code: code.to_owned(),
        glyph: glyph.to_owned(),
        candidates: context.clean(candidates),
        raw: raw.to_owned(),
    })
}
