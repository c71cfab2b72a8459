//! Text-source loading.
//!
//! One scoped read per call: acquire the handle, read it to exhaustion, decode,
//! release. The handle never escapes this module, so release happens on every
//! exit path, including decode failure. No retries: a failure surfaces
//! immediately to the caller.

use std::fs::File;
use std::io::Read;

use crate::data::sample::SAMPLE_TEXT;
use crate::domain::TextSource;
use crate::error::AppError;

/// Load and decode the full contents of `source`.
///
/// Open/read failures surface as `ErrorKind::ResourceUnavailable`, invalid
/// UTF-8 as `ErrorKind::Decode`.
pub fn load_text(source: &TextSource) -> Result<String, AppError> {
    match source {
        TextSource::Path(path) => {
            let mut file = File::open(path).map_err(|e| {
                AppError::resource_unavailable(format!(
                    "Failed to open '{}': {e}",
                    path.display()
                ))
            })?;

            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).map_err(|e| {
                AppError::resource_unavailable(format!(
                    "Failed to read '{}': {e}",
                    path.display()
                ))
            })?;

            decode_utf8(bytes)
        }
        TextSource::Stdin => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|e| AppError::resource_unavailable(format!("Failed to read stdin: {e}")))?;

            decode_utf8(bytes)
        }
        TextSource::Sample => Ok(SAMPLE_TEXT.to_string()),
    }
}

/// Decode raw bytes as UTF-8 text.
pub fn decode_utf8(bytes: Vec<u8>) -> Result<String, AppError> {
    String::from_utf8(bytes).map_err(|e| AppError::decode(format!("Input is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn decodes_valid_utf8() {
        let text = decode_utf8(b"one\ntwo".to_vec()).unwrap();
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = decode_utf8(vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn missing_file_is_resource_unavailable() {
        let source = TextSource::Path("definitely/not/a/real/file.txt".into());
        let err = load_text(&source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceUnavailable);
    }

    #[test]
    fn sample_source_always_loads() {
        let text = load_text(&TextSource::Sample).unwrap();
        assert!(!text.is_empty());
    }
}
