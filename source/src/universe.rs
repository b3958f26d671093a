use std::collections::HashSet;

use crate::blocks::{block, CodepointBlock};
use crate::SourceError;

/// символ, для которого подбирается IDS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character
{
    /// кодпоинт
    pub code: u32,
    /// текстовый код, например U+4E00
    pub id: String,
    /// сам символ
    pub glyph: char,
}

impl Character
{
    pub fn new(code: u32) -> Result<Self, SourceError>
    {
        let glyph = char::from_u32(code).ok_or(SourceError::InvalidCodepoint { code })?;

        Ok(Self {
            code,
            id: code_id(code),
            glyph,
        })
    }
}

/// текстовый код символа: U+ и шестнадцатеричный код в верхнем регистре
pub fn code_id(code: u32) -> String
{
    format!("U+{:04X}", code)
}

/// символы блоков с указанными ключами: порядок блоков сохраняется, внутри блока - по возрастанию кода
pub fn universe(keys: &[&str]) -> Result<Vec<Character>, SourceError>
{
    let mut blocks = Vec::with_capacity(keys.len());

    for key in keys {
        let found = block(key).ok_or_else(|| SourceError::UnknownBlock(key.to_string()))?;
        blocks.push(found);
    }

    universe_of(&blocks)
}

/// то же самое для произвольного набора блоков
pub fn universe_of(blocks: &[&CodepointBlock]) -> Result<Vec<Character>, SourceError>
{
    let mut seen = HashSet::new();
    let mut characters = vec![];

    for block in blocks {
        if let Some(&code) = block.excluded.iter().find(|c| !block.range.contains(*c)) {
            return Err(SourceError::ExclusionOutOfRange {
                block: block.key,
                code,
            });
        }

        for code in block.codes() {
            // пересекающиеся блоки - признак испорченной конфигурации
            if !seen.insert(code) {
                return Err(SourceError::DuplicateCodepoint { code });
            }

            characters.push(Character::new(code)?);
        }
    }

    Ok(characters)
}
