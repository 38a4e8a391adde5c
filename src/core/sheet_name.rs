use crate::error::{ConvertError, ConvertResult};
use regex::Regex;

/// Series code and year read from a sheet name such as `WS2025`.
///
/// The pattern is anchored at the start only: letters followed by four
/// digits, anything after is ignored (`UTMB2024_women` is `UTMB`, 2024).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetName {
    pub series: String,
    pub year: Option<i32>,
}

impl SheetName {
    pub fn parse(sheet: &str) -> ConvertResult<Self> {
        let pattern = Regex::new(r"^([A-Za-z]+)([0-9]{4})")
            .map_err(|e| ConvertError::sheet(sheet, format!("Regex error: {}", e)))?;

        let parsed = pattern.captures(sheet).and_then(|caps| {
            let year = caps[2].parse::<i32>().ok()?;
            Some(SheetName {
                series: caps[1].to_uppercase(),
                year: Some(year),
            })
        });

        Ok(parsed.unwrap_or_else(|| SheetName {
            series: sheet.to_uppercase(),
            year: None,
        }))
    }
}
