//! CLI subcommand implementations.

pub mod count;
pub mod csv;
pub mod delta;
pub mod json;
pub mod normalize;

use std::path::Path;

use anyhow::{Context, Result};
use wh_core::Document;

/// Read and parse a log file.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(bytes = content.len(), path = %path.display(), "read log file");

    let document =
        wh_core::parse(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::info!(periods = document.len(), "parsed log");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_document_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let err = load_document(&temp.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read "));
    }

    #[test]
    fn test_load_document_keeps_parse_error_as_source() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("hours.txt");
        std::fs::write(&path, "2024-01-01 8h\n2024-01-32 8h\n").unwrap();

        let err = load_document(&path).unwrap_err();
        let parse_error = err.downcast_ref::<wh_core::ParseError>().unwrap();
        assert_eq!((parse_error.line(), parse_error.column()), (2, 1));
    }
}
