//! Write rendered markup to a file.
//!
//! The export is the exact stdout markup, so a shell redirect and `--out`
//! produce identical bytes.

use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Write the rendered markup to `path`.
pub fn write_markup(path: &Path, markup: &str) -> Result<(), AppError> {
    fs::write(path, markup).map_err(|e| {
        AppError::export(format!("Failed to write markup '{}': {e}", path.display()))
    })
}
