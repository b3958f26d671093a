use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::bail;
use cjk_ids_source::SourceFormat;

/// таблица замен по умолчанию
pub const DEFAULT_ALIASES: &str = "char-map.tsv";
/// папка для результата по умолчанию
pub const DEFAULT_OUTPUT_DIR: &str = "temp";

/// источник IDS: формат и путь к файлу (или папке)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec
{
    pub format: SourceFormat,
    pub path: PathBuf,
}

/// параметры сборки таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config
{
    /// таблица замен вариантов символов
    pub aliases: PathBuf,
    /// источники; порядок определяет номер источника при ранжировании
    pub sources: Vec<SourceSpec>,
    /// папка, куда пишется ids.tsv
    pub output_dir: PathBuf,
    /// количество потоков ранжирования, по умолчанию - на усмотрение rayon
    pub threads: Option<usize>,
}

impl Default for Config
{
    fn default() -> Self
    {
        let sources = SourceFormat::ALL
            .iter()
            .map(|&format| SourceSpec {
                format,
                path: PathBuf::from(default_path(format)),
            })
            .collect();

        Self {
            aliases: PathBuf::from(DEFAULT_ALIASES),
            sources,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            threads: None,
        }
    }
}

impl Config
{
    /// параметры командной строки поверх значений по умолчанию
    pub fn from_args(mut args: pico_args::Arguments) -> anyhow::Result<Self>
    {
        let mut config = Self::default();

        if let Some(path) = args.opt_value_from_os_str("--aliases", parse_path)? {
            config.aliases = path;
        }

        for source in config.sources.iter_mut() {
            if let Some(path) = args.opt_value_from_os_str(flag(source.format), parse_path)? {
                source.path = path;
            }
        }

        if let Some(path) = args.opt_value_from_os_str("--output", parse_path)? {
            config.output_dir = path;
        }

        config.threads = args.opt_value_from_str("--threads")?;

        let rest = args.finish();

        if !rest.is_empty() {
            let rest: Vec<_> = rest.iter().map(|arg| arg.to_string_lossy()).collect();
            bail!("unknown arguments: {}", rest.join(" "));
        }

        Ok(config)
    }
}

/// пути к источникам по умолчанию
pub fn default_path(format: SourceFormat) -> &'static str
{
    match format {
        SourceFormat::Cjkvi => "./cjkvi-ids/ids.txt",
        SourceFormat::Babelstone => "./babelstone-ids/IDS.TXT",
        SourceFormat::Chise => "./chise-ids/",
        SourceFormat::Yibai => "./yibai-ids/ids_lv0.txt",
    }
}

/// ключ командной строки для пути к источнику
pub fn flag(format: SourceFormat) -> &'static str
{
    match format {
        SourceFormat::Cjkvi => "--cjkvi",
        SourceFormat::Babelstone => "--babelstone",
        SourceFormat::Chise => "--chise",
        SourceFormat::Yibai => "--yibai",
    }
}

fn parse_path(value: &OsStr) -> Result<PathBuf, &'static str>
{
    Ok(PathBuf::from(value))
}
