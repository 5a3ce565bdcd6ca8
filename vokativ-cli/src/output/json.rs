//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs names as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    names: Vec<NameData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameData {
    /// The name as given
    pub nominative: String,
    /// The name in the vocative case
    pub vocative: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            names: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_name(&mut self, nominative: &str, vocative: &str) -> Result<()> {
        self.names.push(NameData {
            nominative: nominative.to_string(),
            vocative: vocative.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.names)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
