//! Best-effort cell coercion
//!
//! Coercion never fails loudly: anything that cannot be read as the requested
//! type comes back as `None` and the caller decides whether the row survives.

use calamine::Data;

/// Cell strings read as missing values
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing_marker(s: &str) -> bool {
    MISSING_MARKERS.contains(&s)
}

/// Numeric value of a cell, if it has one.
///
/// Numbers and booleans are numeric; strings are numeric when they parse
/// as a finite float after trimming.
pub fn numeric(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Int(i) => *i as f64,
        Data::Float(f) => *f,
        Data::Bool(b) => f64::from(u8::from(*b)),
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Rank of a result row: the numeric value truncated toward zero
pub fn to_rank(cell: &Data) -> Option<i64> {
    numeric(cell).map(|v| v.trunc() as i64)
}

/// Performance index of a result row.
///
/// Whitespace is stripped and `,` is read as the decimal separator, so
/// `"1 234,5"` becomes `1234.5`.
pub fn to_index(cell: &Data) -> Option<f64> {
    let raw = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::Int(i) => return Some(*i as f64),
        Data::Float(f) => return f.is_finite().then_some(*f),
        other => other.to_string(),
    };
    parse_decimal(&raw)
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Optional text field: display text trimmed, `None` for empty cells
pub fn to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if is_missing_marker(s) => None,
        other => Some(other.to_string().trim().to_string()),
    }
}
