use crate::tables::FinalRecord;

/// заголовок итоговой таблицы
pub const HEADER: [&str; 4] = ["code", "character", "ids", "more"];

/// разделитель альтернатив в колонке more
pub const ALTERNATES_SEPARATOR: &str = "/";

/// строка таблицы: код, символ, IDS, альтернативы
pub fn format_row(record: &FinalRecord) -> [String; 4]
{
    [
        record.code.clone(),
        record.glyph.to_string(),
        record.ids.clone(),
        record.more.join(ALTERNATES_SEPARATOR),
    ]
}
