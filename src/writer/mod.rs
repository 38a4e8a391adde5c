use crate::error::ConvertResult;
use crate::types::{IndexDocument, RaceDocument};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory layout:
///
/// ```text
/// <root>/data/courses_index.json
/// <root>/data/courses/<sheet>.json
/// ```
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn courses_dir(&self) -> PathBuf {
        self.root.join("data").join("courses")
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join("data").join("courses_index.json")
    }

    pub fn race_path(&self, race_id: &str) -> PathBuf {
        self.courses_dir().join(format!("{}.json", race_id))
    }

    /// Path of a race document relative to the root, as written in the index
    pub fn race_relative_path(race_id: &str) -> String {
        format!("data/courses/{}.json", race_id)
    }

    /// Create `data/courses/` (and parents)
    pub fn prepare(&self) -> ConvertResult<()> {
        fs::create_dir_all(self.courses_dir())?;
        Ok(())
    }
}

/// Serialize as two-space indented JSON; non-ASCII text is kept as-is
pub fn to_pretty_json<T: Serialize>(value: &T) -> ConvertResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ConvertResult<()> {
    let content = to_pretty_json(value)?;
    fs::write(path, content)?;
    Ok(())
}

/// Write one race document, returning its path on disk
pub fn write_race(layout: &OutputLayout, doc: &RaceDocument) -> ConvertResult<PathBuf> {
    let path = layout.race_path(&doc.meta.race_id);
    write_json(&path, doc)?;
    Ok(path)
}

/// Write the index document, returning its path on disk
pub fn write_index(layout: &OutputLayout, index: &IndexDocument) -> ConvertResult<PathBuf> {
    let path = layout.index_path();
    write_json(&path, index)?;
    Ok(path)
}
