//! Portfolio content records.
//!
//! A widget instance shows either a list of projects or a list of work
//! experience entries, never both. Each record contributes a fixed number
//! of virtual lines to the cursor's line list; those counts live on
//! [`ContentKind`] so new content shapes register a kind and a count
//! instead of scattering literals.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Virtual lines contributed by one project record.
pub const PROJECT_LINES_PER_ITEM: usize = 3;

/// Virtual lines contributed by one work experience record.
pub const WORK_LINES_PER_ITEM: usize = 4;

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub repo_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub link: String,
}

/// Which record shape a content set holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Project,
    Work,
}

impl ContentKind {
    /// Virtual lines contributed by a single item of this kind.
    #[must_use]
    pub fn lines_per_item(self) -> usize {
        match self {
            Self::Project => PROJECT_LINES_PER_ITEM,
            Self::Work => WORK_LINES_PER_ITEM,
        }
    }
}

/// The content supplied to one widget instance.
///
/// The two kinds are mutually exclusive per invocation; the enum makes the
/// exclusivity structural rather than a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ContentSet {
    Projects(Vec<Project>),
    Work(Vec<WorkExperience>),
}

impl ContentSet {
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Projects(_) => ContentKind::Project,
            Self::Work(_) => ContentKind::Work,
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Projects(items) => items.len(),
            Self::Work(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Parse a content set from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|err| ContentError::Parse(err.to_string()))
    }

    /// Load a content set from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ContentError::Io(format!("{}: {err}", path.display())))?;
        Self::from_json(&raw)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("read content file: {0}")]
    Io(String),
    #[error("parse content: {0}")]
    Parse(String),
}
