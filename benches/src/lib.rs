use cjk_ids_source::{universe, Character, RawRecord, IDS_OPERATORS};

/// компоненты синтетических декомпозиций - первые символы базового блока
const COMPONENTS: u32 = 512;
const FIRST_COMPONENT: u32 = 0x4E00;

/// символы базового блока
pub fn basic_universe() -> Vec<Character>
{
    universe(&["cjk-basic"]).unwrap()
}

/// детерминированная "декомпозиция": оператор и два компонента
fn synthetic_ids(seed: u32) -> String
{
    let operators: Vec<char> = IDS_OPERATORS.chars().collect();
    let operator = operators[seed as usize % operators.len()];

    let a = char::from_u32(FIRST_COMPONENT + seed % COMPONENTS).unwrap();
    let b = char::from_u32(FIRST_COMPONENT + (seed / 7) % COMPONENTS).unwrap();

    format!("{}{}{}", operator, a, b)
}

/// кандидаты символа в каждом из источников. соседние источники частично совпадают,
/// чтобы при ранжировании были и повторы, и расхождения
pub fn candidate_lists(code: u32, sources: usize, per_source: usize) -> Vec<Vec<String>>
{
    (0 .. sources)
        .map(|source| source_candidates(code, source, per_source))
        .collect()
}

/// кандидаты символа в одном источнике
fn source_candidates(code: u32, source: usize, per_source: usize) -> Vec<String>
{
    (0 .. per_source)
        .map(|i| synthetic_ids(code.wrapping_add((source + i) as u32 * 31)))
        .collect()
}

/// записи источника для всех символов универсума
pub fn source_records(universe: &[Character], source: usize, per_source: usize) -> Vec<RawRecord>
{
    universe
        .iter()
        .map(|character| RawRecord {
            code: character.id.clone(),
            glyph: character.glyph.to_string(),
            candidates: source_candidates(character.code, source, per_source),
            raw: String::new(),
        })
        .collect()
}

/// текст в формате cjkvi-ids: часть кандидатов корректна, часть - с пометками и заглушками
pub fn cjkvi_text(universe: &[Character], per_line: usize) -> String
{
    let mut text = String::from("# synthetic cjkvi-ids\n");

    for character in universe {
        text.push_str(&character.id);
        text.push('\t');
        text.push(character.glyph);

        for i in 0 .. per_line {
            text.push('\t');
            text.push_str(&synthetic_ids(character.code + i as u32));

            match i % 3 {
                0 => text.push_str("[GTJKV]"),
                1 => text.push('①'),
                _ => {}
            }
        }

        text.push('\n');
    }

    text
}
