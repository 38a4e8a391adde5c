//! Excel importer implementation - workbook sheets → header-labelled tables

use crate::core::coerce::is_missing_marker;
use crate::error::{ConvertError, ConvertResult};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One worksheet as a table: labelled columns over rows of cells.
///
/// Every row has exactly `headers.len()` cells. Missing-value markers and
/// error cells have already been replaced by `Data::Empty`.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

impl SheetTable {
    /// Build a table from a worksheet range.
    ///
    /// The first non-blank row is the header row. Columns are positioned from
    /// column A, so blank leading columns keep their `Unnamed: <i>` label.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let left_pad = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let width = left_pad + range.width();

        let mut rows = range
            .rows()
            .map(|row| {
                let mut cells = vec![Data::Empty; left_pad];
                cells.extend(row.iter().map(normalize_cell));
                cells
            })
            .filter(|cells| cells.iter().any(|c| !matches!(c, Data::Empty)));

        let header_cells = rows.next().unwrap_or_default();
        let headers = label_headers(&header_cells, width);
        let rows = rows.collect();

        Self {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Data> + '_ {
        self.rows.iter().map(move |row| &row[col])
    }
}

/// Replace missing-value markers and error cells with `Data::Empty`
fn normalize_cell(cell: &Data) -> Data {
    match cell {
        Data::String(s) if is_missing_marker(s) => Data::Empty,
        Data::Error(_) => Data::Empty,
        other => other.clone(),
    }
}

/// Turn header cells into unique column labels.
///
/// Blank cells become `Unnamed: <position>`; a repeated label gets `.1`,
/// `.2`, ... on its later occurrences.
fn label_headers(cells: &[Data], width: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut labels = Vec::with_capacity(width);

    for col in 0..width {
        let base = match cells.get(col) {
            None | Some(Data::Empty) => format!("Unnamed: {}", col),
            Some(Data::String(s)) if s.is_empty() => format!("Unnamed: {}", col),
            Some(cell) => cell.to_string(),
        };

        let mut label = base.clone();
        let mut suffix = 1;
        while seen.contains(&label) {
            label = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(label.clone());
        labels.push(label);
    }

    labels
}

/// Read-only workbook handle yielding one `SheetTable` per worksheet
pub struct ExcelImporter {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl ExcelImporter {
    /// Open a workbook (.xlsx, .xlsm, .xls, .ods)
    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook = open_workbook_auto(&path)?;
        Ok(Self { path, workbook })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Read one worksheet into a table
    pub fn read_sheet(&mut self, sheet_name: &str) -> ConvertResult<SheetTable> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| ConvertError::sheet(sheet_name, e.to_string()))?;
        Ok(SheetTable::from_range(sheet_name, &range))
    }
}
