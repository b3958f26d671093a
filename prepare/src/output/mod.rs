use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::tables::FinalRecord;

pub use self::format::{format_row, ALTERNATES_SEPARATOR, HEADER};

mod format;
pub mod stats;

/// имя файла с результатом
pub const OUTPUT_FILE: &str = "ids.tsv";

/// пишем таблицу IDS, разделитель - табуляция
pub fn write<W: Write>(records: &[FinalRecord], writer: W) -> Result<(), csv::Error>
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record(format_row(record))?;
    }

    writer.flush()?;

    Ok(())
}

/// пишем таблицу в папку. файл появляется только целиком: данные пишутся во временный файл,
/// который затем переименовывается
pub fn write_file(records: &[FinalRecord], dir: &Path) -> anyhow::Result<PathBuf>
{
    if !dir.exists() {
        log::info!("create dir {:?}", dir);
        fs::create_dir_all(dir).with_context(|| format!("cannot create {:?}", dir))?;
    }

    let path = dir.join(OUTPUT_FILE);
    let temp_file = NamedTempFile::new_in(dir).with_context(|| format!("cannot write to {:?}", dir))?;

    write(records, BufWriter::new(&temp_file)).with_context(|| format!("cannot write {:?}", path))?;

    temp_file
        .persist(&path)
        .with_context(|| format!("cannot write {:?}", path))?;

    Ok(path)
}
