//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single inflected name
    fn format_name(&mut self, nominative: &str, vocative: &str) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
