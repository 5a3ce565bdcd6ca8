//! Inflect command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use super::RuleArgs;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the inflect command
#[derive(Debug, Args)]
pub struct InflectArgs {
    /// Names to inflect (reads one name per line from --input or stdin when omitted)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Input file with one name per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "names")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one vocative per line
    Text,
    /// JSON array of nominative/vocative pairs
    Json,
}

impl InflectArgs {
    /// Execute the inflect command
    pub fn execute(&self) -> Result<()> {
        let inflector = self.rules.load_inflector()?;
        let names = self.collect_names()?;
        log::info!("Inflecting {} name(s)", names.len());

        // Every name must inflect before the output is touched
        let results = names
            .iter()
            .map(|name| {
                inflector
                    .to_vocative(name)
                    .map(|vocative| (name.as_str(), vocative))
                    .with_context(|| format!("Cannot inflect {name:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for (name, vocative) in &results {
            formatter.format_name(name, vocative)?;
        }

        formatter.finish()
    }

    /// Names from arguments, the input file, or stdin
    fn collect_names(&self) -> Result<Vec<String>> {
        if !self.names.is_empty() {
            return Ok(self.names.clone());
        }

        match &self.input {
            Some(path) => FileReader::read_names(path),
            None => {
                log::debug!("Reading names from stdin");
                FileReader::read_names_from(io::stdin().lock())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(names: &[&str]) -> InflectArgs {
        InflectArgs {
            names: names.iter().map(|n| n.to_string()).collect(),
            input: None,
            output: None,
            format: OutputFormat::Text,
            rules: RuleArgs::default(),
        }
    }

    #[test]
    fn test_names_from_arguments() {
        let args = args(&["Tereza", "Jan Novák"]);
        assert_eq!(args.collect_names().unwrap(), vec!["Tereza", "Jan Novák"]);
    }

    #[test]
    fn test_names_from_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("names.txt");
        fs::write(&input, "Karel\n\nMarek\n").unwrap();

        let mut args = args(&[]);
        args.input = Some(input);
        assert_eq!(args.collect_names().unwrap(), vec!["Karel", "Marek"]);
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let mut args = args(&["Karel", "Tereza"]);
        args.output = Some(output.clone());
        args.format = OutputFormat::Json;
        args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"vocative\": \"Karle\""));
        assert!(content.contains("\"vocative\": \"Terezo\""));
    }

    #[test]
    fn test_execute_rejects_blank_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args(&["   "]);
        args.output = Some(temp_dir.path().join("out.txt"));

        let err = args.execute().unwrap_err();
        assert!(format!("{err:#}").contains("name must not be blank"));
    }

    #[test]
    fn test_failed_execute_leaves_output_file_untouched() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let temp_dir = TempDir::new().unwrap();
            let output = temp_dir.path().join("out");
            fs::write(&output, "previous content").unwrap();

            let mut args = args(&["Karel", "   ", "Tereza"]);
            args.output = Some(output.clone());
            args.format = format;

            assert!(args.execute().is_err());
            assert_eq!(
                fs::read_to_string(&output).unwrap(),
                "previous content",
                "{format:?} output must not be written"
            );
        }
    }

    #[test]
    fn test_failed_execute_creates_no_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let mut args = args(&["Karel", ""]);
        args.output = Some(output.clone());

        assert!(args.execute().is_err());
        assert!(!output.exists());
    }
}
