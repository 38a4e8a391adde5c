use crate::core::{ConvertOptions, Converter, SheetOutcome, SkipReason};
use crate::error::ConvertResult;
use crate::excel::ExcelImporter;
use crate::types::IndexDocument;
use crate::writer::{self, OutputLayout};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A sheet that produced no race document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSheet {
    pub sheet: String,
    pub reason: SkipReason,
}

/// Outcome of a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    /// Index of every race written (or that would be written on a dry run)
    pub index: IndexDocument,
    pub skipped: Vec<SkippedSheet>,
    /// Race document paths on disk, in sheet order; empty on a dry run
    pub race_files: Vec<PathBuf>,
    pub index_file: Option<PathBuf>,
}

impl ConversionReport {
    pub fn races_written(&self) -> usize {
        self.index.len()
    }
}

/// Execute the convert command.
///
/// Every sheet is converted in workbook order. Sheets without a score column
/// (or that cannot be read) are skipped with a notice; the index is written
/// after the last sheet.
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    options: ConvertOptions,
) -> ConvertResult<ConversionReport> {
    let verbose = options.verbose;
    let dry_run = options.dry_run;

    if verbose {
        println!("{}", "🏁 Racebook - Workbook Conversion".bold().green());
        println!("   Input:  {}", input.display());
        println!("   Output: {}\n", output.display());
    }

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    let mut importer = ExcelImporter::open(&input)?;
    let layout = OutputLayout::new(&output);
    if !dry_run {
        layout.prepare()?;
    }

    let converter = Converter::new(options);
    let mut report = ConversionReport::default();

    for sheet in importer.sheet_names() {
        let outcome = match importer.read_sheet(&sheet) {
            Ok(table) => converter.convert_sheet(&table)?,
            Err(e) => {
                warn!(sheet = %sheet, error = %e, "worksheet could not be read");
                SheetOutcome::Skipped(SkipReason::Unreadable(e.to_string()))
            }
        };

        let race = match outcome {
            SheetOutcome::Race(race) => race,
            SheetOutcome::Skipped(reason) => {
                println!("{}", format!("Skip sheet {}: {}", sheet, reason).yellow());
                report.skipped.push(SkippedSheet { sheet, reason });
                continue;
            }
        };

        if verbose {
            println!(
                "   📊 {} → {} results (series {}, year {})",
                sheet.bright_blue().bold(),
                race.results.len(),
                race.meta.series,
                race.meta.year.map_or("-".to_string(), |y| y.to_string())
            );
        }

        if !dry_run {
            let path = writer::write_race(&layout, &race)?;
            debug!(sheet = %sheet, path = %path.display(), "race written");
            report.race_files.push(path);
        }

        let relative = OutputLayout::race_relative_path(&race.meta.race_id);
        report.index.push(race.index_entry(relative));
    }

    if dry_run {
        println!(
            "{}",
            format!(
                "📋 Dry run complete - {} courses would be written",
                report.races_written()
            )
            .yellow()
        );
        return Ok(report);
    }

    let index_path = writer::write_index(&layout, &report.index)?;
    debug!(path = %index_path.display(), "index written");
    report.index_file = Some(index_path);

    println!("Wrote {} courses.", report.races_written());

    Ok(report)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
