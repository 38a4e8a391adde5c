//! Racebook - race-result workbook to JSON converter
//!
//! Converts a multi-sheet workbook of race results (one sheet per race) into
//! a normalized set of JSON documents: an index of all races and one detail
//! file per race with its ranked results.
//!
//! # Features
//!
//! - Column roles inferred from loosely named headers (`Pos`, `ITRA Score`, ...)
//! - Best-effort numeric coercion (`"1 234,5"` → `1234.5`)
//! - Series and year derived from sheet names (`WS2025` → `WS`, 2025)
//! - Results sorted by rank and capped at 300 per race
//!
//! # Example
//!
//! ```no_run
//! use racebook::cli::convert;
//! use racebook::core::ConvertOptions;
//! use std::path::PathBuf;
//!
//! let report = convert(
//!     PathBuf::from("results.xlsx"),
//!     PathBuf::from("site"),
//!     ConvertOptions::default(),
//! )?;
//!
//! println!("Races: {}", report.races_written());
//! # Ok::<(), racebook::error::ConvertError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{IndexDocument, IndexEntry, RaceDocument, RaceMeta, ResultRow};
