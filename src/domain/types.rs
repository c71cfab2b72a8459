//! Shared domain types.
//!
//! These types are intentionally kept lightweight; the export types are
//! serializable so a run's index can be written to JSON and rendered again
//! later (or consumed by downstream scripts).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the raw line-delimited text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A file on disk.
    Path(PathBuf),
    /// The process's standard input, read to EOF.
    Stdin,
    /// The embedded sample list (no input file needed).
    Sample,
}

impl TextSource {
    /// Human-readable label for terminal output.
    pub fn display_name(&self) -> String {
        match self {
            TextSource::Path(path) => path.display().to_string(),
            TextSource::Stdin => "stdin".to_string(),
            TextSource::Sample => "sample".to_string(),
        }
    }
}

/// The ordered key -> line mapping built from non-empty lines.
///
/// Keys are implicit and contiguous: entry `i` has key `i`, so ascending key
/// order is original line order. Values are constructed only from post-split
/// non-empty lines, so they carry no embedded line terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    entries: Vec<String>,
}

impl LineIndex {
    pub(crate) fn from_lines(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Line content for `key`, if present.
    pub fn get(&self, key: usize) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate `(key, line)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().enumerate().map(|(key, line)| (key, line.as_str()))
    }
}

/// Options recognized by the select-box renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Used verbatim for both the `id` and `name` attributes.
    pub element_id: String,
    /// Prepend the no-value "Unknown" placeholder option.
    pub include_unknown: bool,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: TextSource,
    pub element_id: String,
    pub include_unknown: bool,

    /// Also write the rendered markup to this file.
    pub out: Option<PathBuf>,
    /// Export the line index to this JSON file.
    pub export_index: Option<PathBuf>,
}

impl RunConfig {
    /// Renderer options for this run.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            element_id: self.element_id.clone(),
            include_unknown: self.include_unknown,
        }
    }
}

/// A saved index file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexFile {
    pub tool: String,
    pub element_id: String,
    pub entries: Vec<IndexEntry>,
}

/// One option's worth of data: the decimal key and the verbatim line content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    pub value: usize,
    pub text: String,
}

impl IndexFile {
    /// Rebuild the in-memory mapping from the saved entries.
    pub fn to_index(&self) -> LineIndex {
        LineIndex::from_lines(self.entries.iter().map(|e| e.text.clone()).collect())
    }
}
