use clap::Parser;
use racebook::cli;
use racebook::core::converter::DEFAULT_DATA_SOURCE;
use racebook::core::ConvertOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convert")]
#[command(about = "Convert a race-results workbook into JSON course files")]
#[command(long_about = "Convert a race-results workbook into JSON course files.

Each sheet is one race. Rank, runner, score, gender and nationality columns
are recognised by their headers; sheets without a score column are skipped.

OUTPUT:
  <OUTPUT>/data/courses_index.json     - one entry per race
  <OUTPUT>/data/courses/<sheet>.json   - top 300 results of one race

SHEET NAMES:
  WS2025        → series WS, year 2025
  LEADVILLE2025 → series LEADVILLE, year 2025
  SomeSheet     → series SOMESHEET, no year

EXAMPLES:
  convert results.xlsx site/
  convert results.xlsx site/ --dry-run --verbose")]
#[command(version)]
struct Cli {
    /// Path to the results workbook (.xlsx, .xlsm, .xls, .ods)
    input: PathBuf,

    /// Output root directory (files are written under <OUTPUT>/data/)
    output: PathBuf,

    /// Label written to the data_source field
    #[arg(long, default_value = DEFAULT_DATA_SOURCE)]
    data_source: String,

    /// Convert and report without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show per-sheet details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let options = ConvertOptions {
        data_source: args.data_source,
        dry_run: args.dry_run,
        verbose: args.verbose,
        ..ConvertOptions::default()
    };

    cli::convert(args.input, args.output, options)?;
    Ok(())
}
