#[macro_use]
extern crate lazy_static;

pub mod aliases;
pub mod alphabet;
pub mod blocks;
pub mod cleaner;
pub mod formats;
pub mod universe;

mod error;

pub use error::SourceError;

pub use aliases::AliasTable;
pub use alphabet::Alphabet;
pub use alphabet::IDS_OPERATORS;
pub use alphabet::SUPPLEMENTAL_GLYPHS;

pub use blocks::CodepointBlock;
pub use blocks::BLOCKS;
pub use blocks::UNIVERSE_KEYS;

pub use cleaner::clean;

pub use formats::ParseContext;
pub use formats::RawRecord;
pub use formats::SourceFormat;

pub use universe::code_id;
pub use universe::universe;
pub use universe::Character;
