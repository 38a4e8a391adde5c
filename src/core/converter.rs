//! Sheet → race document conversion

use super::coerce::{numeric, to_index, to_rank, to_text};
use super::columns::{detect_rank_column, ColumnMap};
use super::sheet_name::SheetName;
use crate::error::ConvertResult;
use crate::excel::SheetTable;
use crate::types::{RaceDocument, RaceMeta, ResultRow};
use calamine::Data;
use std::fmt;
use tracing::debug;

/// Maximum number of results kept per race
pub const RESULT_CAP: usize = 300;

/// Label written to `data_source` unless overridden
pub const DEFAULT_DATA_SOURCE: &str = "ITRA";

/// Conversion run configuration
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub data_source: String,
    pub result_cap: usize,
    /// Parse and report without writing any file
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            result_cap: RESULT_CAP,
            dry_run: false,
            verbose: false,
        }
    }
}

/// Why a sheet produced no race document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The sheet has no columns at all
    Empty,
    /// No column could serve as the performance index
    NoScoreColumn,
    /// The worksheet could not be read
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty sheet"),
            SkipReason::NoScoreColumn => write!(f, "no score column"),
            SkipReason::Unreadable(e) => write!(f, "unreadable ({})", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SheetOutcome {
    Race(RaceDocument),
    Skipped(SkipReason),
}

/// Converts worksheet tables into race documents
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert one sheet.
    ///
    /// Rows whose rank or index cannot be coerced are dropped silently. The
    /// sheet is skipped when no performance-index column exists.
    pub fn convert_sheet(&self, table: &SheetTable) -> ConvertResult<SheetOutcome> {
        let Some(rank_col) = detect_rank_column(&table.headers) else {
            return Ok(SheetOutcome::Skipped(SkipReason::Empty));
        };

        // Header, footer and note rows have no numeric rank
        let ranked: Vec<&Vec<Data>> = table
            .rows
            .iter()
            .filter(|row| numeric(&row[rank_col]).is_some())
            .collect();

        let columns = ColumnMap::infer(&table.headers);
        debug!(
            sheet = %table.name,
            rank = %table.headers[rank_col],
            ?columns,
            rows = ranked.len(),
            "inferred columns"
        );

        let Some(index_col) = columns.index else {
            return Ok(SheetOutcome::Skipped(SkipReason::NoScoreColumn));
        };

        let optional = |row: &[Data], col: Option<usize>| col.and_then(|c| to_text(&row[c]));

        let mut results: Vec<ResultRow> = ranked
            .into_iter()
            .filter_map(|row| {
                let rank = to_rank(&row[rank_col])?;
                let index = to_index(&row[index_col])?;
                Some(ResultRow {
                    rank,
                    runner: optional(row.as_slice(), columns.runner),
                    index,
                    gender: optional(row.as_slice(), columns.gender),
                    nationality: optional(row.as_slice(), columns.nationality),
                })
            })
            .filter(|r| r.rank >= 1)
            .collect();

        results.sort_by_key(|r| r.rank);
        results.truncate(self.options.result_cap);

        let name = SheetName::parse(&table.name)?;
        let meta = RaceMeta::new(
            table.name.clone(),
            name.series,
            name.year,
            self.options.data_source.clone(),
        );

        Ok(SheetOutcome::Race(RaceDocument { meta, results }))
    }
}
