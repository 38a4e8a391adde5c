use serde::{Deserialize, Serialize};

//==============================================================================
// Race Document
//==============================================================================

/// Race metadata written under `meta` in every race document.
///
/// Only `race_id`, `name`, `series`, `year` and `data_source` can be derived
/// from a sheet; the remaining fields are placeholders kept for consumers
/// that expect the full schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceMeta {
    pub race_id: String,
    pub name: String,
    pub series: String,
    pub country: Option<String>,
    pub data_source: String,
    pub year: Option<i32>,
    pub distance_km: Option<f64>,
    pub elevation_m: Option<f64>,
    pub prize_money: Option<f64>,
    pub notes: Option<String>,
    pub source_url: Option<String>,
}

impl RaceMeta {
    /// Create metadata for a sheet with every placeholder left empty
    pub fn new(
        race_id: impl Into<String>,
        series: impl Into<String>,
        year: Option<i32>,
        data_source: impl Into<String>,
    ) -> Self {
        let race_id = race_id.into();
        Self {
            name: race_id.clone(),
            race_id,
            series: series.into(),
            country: None,
            data_source: data_source.into(),
            year,
            distance_km: None,
            elevation_m: None,
            prize_money: None,
            notes: None,
            source_url: None,
        }
    }
}

/// One ranked result line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub rank: i64,
    pub runner: Option<String>,
    pub index: f64,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

/// Per-race output file: `data/courses/<sheet>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDocument {
    pub meta: RaceMeta,
    pub results: Vec<ResultRow>,
}

impl RaceDocument {
    /// Project the metadata into an index entry pointing at `path`
    pub fn index_entry(&self, path: impl Into<String>) -> IndexEntry {
        IndexEntry {
            race_id: self.meta.race_id.clone(),
            name: self.meta.name.clone(),
            year: self.meta.year,
            series: self.meta.series.clone(),
            country: self.meta.country.clone(),
            data_source: self.meta.data_source.clone(),
            path: path.into(),
        }
    }
}

//==============================================================================
// Index Document
//==============================================================================

/// Summary of one race inside `courses_index.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub race_id: String,
    pub name: String,
    pub year: Option<i32>,
    pub series: String,
    pub country: Option<String>,
    pub data_source: String,
    pub path: String,
}

/// Aggregate output file: `data/courses_index.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexDocument {
    pub courses: Vec<IndexEntry>,
}

impl IndexDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: IndexEntry) {
        self.courses.push(entry);
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_name_defaults_to_race_id() {
        let meta = RaceMeta::new("UTMB2024", "UTMB", Some(2024), "ITRA");
        assert_eq!(meta.name, "UTMB2024");
        assert_eq!(meta.race_id, "UTMB2024");
        assert!(meta.country.is_none());
        assert!(meta.source_url.is_none());
    }

    #[test]
    fn test_meta_serializes_placeholders_as_null() {
        let meta = RaceMeta::new("SomeSheet", "SOMESHEET", None, "ITRA");
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json["year"].is_null());
        assert!(json["distance_km"].is_null());
        assert!(json["prize_money"].is_null());
        assert_eq!(json["data_source"], "ITRA");
    }

    #[test]
    fn test_meta_field_order() {
        let meta = RaceMeta::new("WS2025", "WS", Some(2025), "ITRA");
        let json = serde_json::to_string(&meta).unwrap();
        let keys = [
            "race_id",
            "name",
            "series",
            "country",
            "data_source",
            "year",
            "distance_km",
            "elevation_m",
            "prize_money",
            "notes",
            "source_url",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_index_entry_projection() {
        let doc = RaceDocument {
            meta: RaceMeta::new("WS2025", "WS", Some(2025), "ITRA"),
            results: Vec::new(),
        };
        let entry = doc.index_entry("data/courses/WS2025.json");
        assert_eq!(entry.race_id, "WS2025");
        assert_eq!(entry.series, "WS");
        assert_eq!(entry.year, Some(2025));
        assert_eq!(entry.path, "data/courses/WS2025.json");
    }

    #[test]
    fn test_result_row_optional_fields_serialize_null() {
        let row = ResultRow {
            rank: 1,
            runner: None,
            index: 812.0,
            gender: Some("M".to_string()),
            nationality: None,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"rank":1,"runner":null,"index":812.0,"gender":"M","nationality":null}"#
        );
    }
}
