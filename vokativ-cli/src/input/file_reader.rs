//! Name list reading

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads newline-separated name lists
pub struct FileReader;

impl FileReader {
    /// Read names from a UTF-8 file, one per line
    pub fn read_names(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(parse_names(&content))
    }

    /// Read names from any reader, one per line
    pub fn read_names_from<R: Read>(mut reader: R) -> Result<Vec<String>> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read names from input")?;

        Ok(parse_names(&content))
    }
}

/// Split text into trimmed, non-blank lines
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
