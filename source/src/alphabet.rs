use regex::Regex;

use crate::blocks::{block, CodepointBlock};
use crate::SourceError;

/// 12 символов описания структуры (U+2FF0 ..= U+2FFB)
pub const IDS_OPERATORS: &str = "⿰⿱⿲⿳⿴⿵⿶⿷⿸⿹⿺⿻";

/// черты и варианты ключей, которые сами иероглифами не являются, но допустимы в IDS
const SUPPLEMENTAL: &str = "
㇀㇁㇂㇄㇅㇇㇈㇉㇊㇋㇌㇍㇎㇏㇐㇒㇓㇕㇘㇛㇝㇞㇢㇣
⺀⺁⺄⺆⺇⺈⺊⺌⺍⺕⺜⺝⺥⺧⺩⺪⺬⺮⺳⺴⺵⺶⺷⺸⺻⺼⺽⻊⻎⻕⻗
";

lazy_static! {
    /// дополнительные разрешенные символы
    pub static ref SUPPLEMENTAL_GLYPHS: Vec<char> =
        SUPPLEMENTAL.chars().filter(|c| !c.is_whitespace()).collect();
}

/// допустимый алфавит IDS: иероглифы выбранных блоков, операторы структуры и дополнительные символы
#[derive(Debug, Clone)]
pub struct Alphabet
{
    /// строка целиком состоит из символов алфавита
    allowed: Regex,
    /// в строке есть оператор структуры
    operator: Regex,
}

impl Alphabet
{
    /// алфавит для блоков с указанными ключами
    pub fn from_keys(keys: &[&str]) -> Result<Self, SourceError>
    {
        let mut blocks = Vec::with_capacity(keys.len());

        for key in keys {
            blocks.push(block(key).ok_or_else(|| SourceError::UnknownBlock(key.to_string()))?);
        }

        Self::new(&blocks)
    }

    pub fn new(blocks: &[&CodepointBlock]) -> Result<Self, SourceError>
    {
        let mut class = String::new();

        for block in blocks {
            for segment in block.segments() {
                match segment.start() == segment.end() {
                    true => class.push_str(&escape(*segment.start())),
                    false => {
                        class.push_str(&escape(*segment.start()));
                        class.push('-');
                        class.push_str(&escape(*segment.end()));
                    }
                }
            }
        }

        let operators = operator_class();
        class.push_str(&operators);

        for &c in SUPPLEMENTAL_GLYPHS.iter() {
            class.push_str(&escape(c as u32));
        }

        Ok(Self {
            allowed: Regex::new(&format!("^[{}]+$", class))?,
            operator: Regex::new(&format!("[{}]", operators))?,
        })
    }

    /// непустая строка, все символы которой входят в алфавит
    #[inline]
    pub fn matches_allowed_alphabet(&self, text: &str) -> bool
    {
        self.allowed.is_match(text)
    }

    /// строка содержит хотя бы один оператор структуры
    #[inline]
    pub fn contains_structural_operator(&self, text: &str) -> bool
    {
        self.operator.is_match(text)
    }

    /// входит ли символ в алфавит
    #[inline]
    pub fn contains_glyph(&self, glyph: char) -> bool
    {
        let mut buffer = [0; 4];

        self.allowed.is_match(glyph.encode_utf8(&mut buffer))
    }
}

/// операторы идут подряд, поэтому хватает одного отрезка
fn operator_class() -> String
{
    let first = IDS_OPERATORS.chars().next().map_or(0x2FF0, u32::from);
    let last = IDS_OPERATORS.chars().last().map_or(0x2FFB, u32::from);

    format!("{}-{}", escape(first), escape(last))
}

#[inline]
fn escape(code: u32) -> String
{
    format!("\\x{{{:X}}}", code)
}
