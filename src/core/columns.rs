//! Column-role inference
//!
//! Roles are assigned by an ordered rule table. Rules are evaluated top to
//! bottom; a role keeps the first column any of its rules matches, and later
//! rules for an already assigned role are not consulted.

use std::fmt;

/// Header labels (normalized) that mark the rank column
pub const RANK_HEADERS: &[&str] = &["rank", "#", "pos", "place"];

/// Label given to a first column without a header cell
pub const UNNAMED_FIRST_COLUMN: &str = "Unnamed: 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Runner,
    Index,
    Gender,
    Nationality,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnRole::Runner => "runner",
            ColumnRole::Index => "index",
            ColumnRole::Gender => "gender",
            ColumnRole::Nationality => "nationality",
        };
        f.write_str(name)
    }
}

/// How a rule compares a normalized header against its keywords
#[derive(Debug, Clone, Copy)]
pub enum HeaderMatch {
    Equals(&'static [&'static str]),
    Contains(&'static [&'static str]),
}

impl HeaderMatch {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            HeaderMatch::Equals(words) => words.contains(&normalized),
            HeaderMatch::Contains(words) => words.iter().any(|w| normalized.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub role: ColumnRole,
    pub matcher: HeaderMatch,
}

/// Role rules in priority order: every exact rule before any substring rule.
pub const COLUMN_RULES: &[ColumnRule] = &[
    ColumnRule {
        role: ColumnRole::Runner,
        matcher: HeaderMatch::Equals(&["runner", "athlete", "name"]),
    },
    ColumnRule {
        role: ColumnRole::Index,
        matcher: HeaderMatch::Equals(&["race score", "score", "index", "utmb index", "itra score"]),
    },
    ColumnRule {
        role: ColumnRole::Gender,
        matcher: HeaderMatch::Equals(&["gender", "sex"]),
    },
    ColumnRule {
        role: ColumnRole::Nationality,
        matcher: HeaderMatch::Equals(&["nationality", "nation", "country"]),
    },
    ColumnRule {
        role: ColumnRole::Index,
        matcher: HeaderMatch::Contains(&["race score", "utmb", "itra"]),
    },
    ColumnRule {
        role: ColumnRole::Runner,
        matcher: HeaderMatch::Contains(&["runner", "athlete", "name"]),
    },
];

/// Trimmed, lowercased header
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Position of the rank column.
///
/// Prefers a header named like a rank, then an unlabeled first column, then
/// simply the first column. `None` only for a sheet without columns.
pub fn detect_rank_column(headers: &[String]) -> Option<usize> {
    headers
        .iter()
        .position(|h| RANK_HEADERS.contains(&normalize_header(h).as_str()))
        .or_else(|| headers.iter().position(|h| h == UNNAMED_FIRST_COLUMN))
        .or_else(|| (!headers.is_empty()).then_some(0))
}

/// Column positions assigned to each role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub runner: Option<usize>,
    pub index: Option<usize>,
    pub gender: Option<usize>,
    pub nationality: Option<usize>,
}

impl ColumnMap {
    /// Apply `COLUMN_RULES` to a header row
    pub fn infer(headers: &[String]) -> Self {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let mut map = ColumnMap::default();

        for rule in COLUMN_RULES {
            if map.get(rule.role).is_some() {
                continue;
            }
            if let Some(col) = normalized.iter().position(|h| rule.matcher.matches(h)) {
                map.set(rule.role, col);
            }
        }

        map
    }

    pub fn get(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::Runner => self.runner,
            ColumnRole::Index => self.index,
            ColumnRole::Gender => self.gender,
            ColumnRole::Nationality => self.nationality,
        }
    }

    fn set(&mut self, role: ColumnRole, col: usize) {
        let slot = match role {
            ColumnRole::Runner => &mut self.runner,
            ColumnRole::Index => &mut self.index,
            ColumnRole::Gender => &mut self.gender,
            ColumnRole::Nationality => &mut self.nationality,
        };
        *slot = Some(col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_by_name() {
        assert_eq!(detect_rank_column(&headers(&["Runner", "Pos", "Score"])), Some(1));
        assert_eq!(detect_rank_column(&headers(&["Name", " RANK "])), Some(1));
        assert_eq!(detect_rank_column(&headers(&["#", "Runner"])), Some(0));
        assert_eq!(detect_rank_column(&headers(&["Runner", "Place"])), Some(1));
    }

    #[test]
    fn test_rank_first_match_wins() {
        assert_eq!(detect_rank_column(&headers(&["Runner", "Place", "Rank"])), Some(1));
    }

    #[test]
    fn test_rank_unnamed_fallback() {
        let h = headers(&["Runner", "Unnamed: 0", "Score"]);
        assert_eq!(detect_rank_column(&h), Some(1));
    }

    #[test]
    fn test_rank_positional_fallback() {
        assert_eq!(detect_rank_column(&headers(&["Bib", "Runner"])), Some(0));
        assert_eq!(detect_rank_column(&[]), None);
    }

    #[test]
    fn test_exact_roles() {
        let map = ColumnMap::infer(&headers(&["Rank", "Runner", "Race Score", "Gender", "Nationality"]));
        assert_eq!(
            map,
            ColumnMap {
                runner: Some(1),
                index: Some(2),
                gender: Some(3),
                nationality: Some(4),
            }
        );
    }

    #[test]
    fn test_index_aliases() {
        for name in ["ITRA Score", "UTMB Index", "score", "INDEX"] {
            let map = ColumnMap::infer(&headers(&["Pos", name]));
            assert_eq!(map.index, Some(1), "header {:?}", name);
        }
    }

    #[test]
    fn test_index_substring_fallback() {
        let map = ColumnMap::infer(&headers(&["Pos", "Athlete", "UTMB Index 2024"]));
        assert_eq!(map.index, Some(2));

        let map = ColumnMap::infer(&headers(&["Pos", "Best ITRA perf"]));
        assert_eq!(map.index, Some(1));
    }

    #[test]
    fn test_exact_beats_substring() {
        let map = ColumnMap::infer(&headers(&["UTMB Index 2023", "Score"]));
        assert_eq!(map.index, Some(1));

        let map = ColumnMap::infer(&headers(&["Team name", "Athlete"]));
        assert_eq!(map.runner, Some(1));
    }

    #[test]
    fn test_runner_substring_fallback() {
        let map = ColumnMap::infer(&headers(&["Rank", "Runner name", "Score"]));
        assert_eq!(map.runner, Some(1));
    }

    #[test]
    fn test_unnamed_column_matches_name_substring() {
        let map = ColumnMap::infer(&headers(&["Unnamed: 0", "Score"]));
        assert_eq!(map.runner, Some(0));
    }

    #[test]
    fn test_gender_and_nationality_are_exact_only() {
        let map = ColumnMap::infer(&headers(&["Sex", "Country"]));
        assert_eq!(map.gender, Some(0));
        assert_eq!(map.nationality, Some(1));

        let map = ColumnMap::infer(&headers(&["Gender category", "Country code"]));
        assert_eq!(map.gender, None);
        assert_eq!(map.nationality, None);
    }

    #[test]
    fn test_no_score_column() {
        let map = ColumnMap::infer(&headers(&["Rank", "Runner", "Time"]));
        assert_eq!(map.index, None);
        assert_eq!(map.get(ColumnRole::Runner), Some(1));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(ColumnRole::Index.to_string(), "index");
        assert_eq!(ColumnRole::Nationality.to_string(), "nationality");
    }
}
