use std::process;

use cjk_ids_prepare::config::Config;
use cjk_ids_prepare::output::stats;

const EXIT_FAILURE: i32 = 1;

const USAGE: &str = "\
ids_prepare: build a canonical IDS table from cjkvi-ids, BabelStone, CHISE and yibai-ids

USAGE:
    ids_prepare [OPTION...]

OPTIONS:
    -h, --help           show this message
    --aliases FILE       glyph alias table (default: char-map.tsv)
    --cjkvi FILE         cjkvi-ids file (default: ./cjkvi-ids/ids.txt)
    --babelstone FILE    BabelStone IDS file (default: ./babelstone-ids/IDS.TXT)
    --chise DIR          directory with CHISE IDS-UCS-*.txt files (default: ./chise-ids/)
    --yibai FILE         yibai-ids file (default: ./yibai-ids/ids_lv0.txt)
    --output DIR         directory for ids.tsv (default: temp)
    --threads N          number of ranking threads
";

fn main()
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", USAGE);
        return;
    }

    if let Err(err) = run(args) {
        log::error!("{:#}", err);
        process::exit(EXIT_FAILURE);
    }
}

fn run(args: pico_args::Arguments) -> anyhow::Result<()>
{
    let config = Config::from_args(args)?;

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let summary = cjk_ids_prepare::run(&config)?;
    stats::print(&summary.stats);

    Ok(())
}
