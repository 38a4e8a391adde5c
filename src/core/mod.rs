//! Conversion core: cell coercion, column inference and sheet conversion

pub mod coerce;
pub mod columns;
pub mod converter;
pub mod sheet_name;

pub use columns::{ColumnMap, ColumnRole};
pub use converter::{ConvertOptions, Converter, SheetOutcome, SkipReason};
pub use sheet_name::SheetName;
