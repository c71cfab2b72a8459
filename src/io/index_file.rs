//! Index JSON read/write.
//!
//! A saved index can be re-rendered later with `lsel from-index`, so the
//! reader validates the one structural property rendering relies on:
//! contiguous keys starting at 0.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::domain::{IndexEntry, IndexFile, LineIndex};
use crate::error::AppError;

/// Write the index (plus the element id it renders with) to a JSON file.
pub fn write_index_json(path: &Path, index: &LineIndex, element_id: &str) -> Result<(), AppError> {
    let file = IndexFile {
        tool: "lsel".to_string(),
        element_id: element_id.to_string(),
        entries: index
            .iter()
            .map(|(value, text)| IndexEntry {
                value,
                text: text.to_string(),
            })
            .collect(),
    };

    let out = File::create(path).map_err(|e| {
        AppError::export(format!(
            "Failed to create index JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(BufWriter::new(out), &file).map_err(|e| {
        AppError::export(format!(
            "Failed to write index JSON '{}': {e}",
            path.display()
        ))
    })
}

/// Read a previously exported index JSON file.
pub fn read_index_json(path: &Path) -> Result<IndexFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::resource_unavailable(format!(
            "Failed to open index JSON '{}': {e}",
            path.display()
        ))
    })?;

    let parsed: IndexFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::decode(format!(
            "Failed to parse index JSON '{}': {e}",
            path.display()
        ))
    })?;

    for (position, entry) in parsed.entries.iter().enumerate() {
        if entry.value != position {
            return Err(AppError::decode(format!(
                "Index JSON '{}' has non-contiguous keys: entry {position} carries value {}.",
                path.display(),
                entry.value
            )));
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::index_lines;

    fn temp_json(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("lsel_{name}_{}.json", std::process::id()))
    }

    #[test]
    fn index_json_round_trips() {
        let path = temp_json("roundtrip");
        let indexed = index_lines("one\ntwo\nthree");

        write_index_json(&path, &indexed.index, "picks").unwrap();
        let read = read_index_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(read.tool, "lsel");
        assert_eq!(read.element_id, "picks");
        assert_eq!(read.to_index(), indexed.index);
    }

    #[test]
    fn non_contiguous_keys_are_rejected() {
        let path = temp_json("gappy");
        std::fs::write(
            &path,
            r#"{"tool":"lsel","element_id":"x","entries":[{"value":1,"text":"a"}]}"#,
        )
        .unwrap();

        let err = read_index_json(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert_eq!(err.kind(), crate::error::ErrorKind::Decode);
    }
}
