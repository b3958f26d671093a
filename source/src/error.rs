use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// ошибки сборки таблиц. все они фатальны: если конфигурация испорчена,
/// испорченными окажутся IDS всех символов
#[derive(Debug, Error)]
pub enum SourceError
{
    #[error("unknown codepoint block: {0}")]
    UnknownBlock(String),

    #[error("block {block} excludes U+{code:04X}, which lies outside of the block")]
    ExclusionOutOfRange
    {
        block: &'static str,
        code: u32,
    },

    #[error("U+{code:04X} is not a unicode scalar value")]
    InvalidCodepoint
    {
        code: u32,
    },

    #[error("U+{code:04X} is generated more than once")]
    DuplicateCodepoint
    {
        code: u32,
    },

    #[error("alias key {alias:?} must be a single glyph")]
    AliasKeyNotGlyph
    {
        alias: String,
    },

    #[error("alias {alias:?} maps to {canonical:?}, which is outside of the allowed alphabet")]
    AliasTargetNotAllowed
    {
        alias: String,
        canonical: String,
    },

    #[error("alias key {alias:?} is itself part of the allowed alphabet")]
    AliasMasksAlphabet
    {
        alias: String,
    },

    #[error("malformed alias table: {0}")]
    AliasTable(#[from] csv::Error),

    #[error("cannot compile alphabet pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("cannot read {path:?}: {source}")]
    Io
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError
{
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self
    {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
