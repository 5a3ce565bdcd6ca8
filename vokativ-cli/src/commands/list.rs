//! List command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use vokativ_core::RuleTable;

use super::RuleArgs;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub rules: RuleArgs,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let inflector = self.rules.load_inflector()?;
        let mut stdout = io::stdout().lock();
        write_rules(&mut stdout, inflector.rules())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Print both tables sorted by suffix
fn write_rules<W: Write>(writer: &mut W, rules: &RuleTable) -> Result<()> {
    let mut gender: Vec<(&str, &bool)> = rules.gender_suffixes().iter().collect();
    gender.sort();
    writeln!(writer, "Gender suffixes ({}):", gender.len())?;
    for (suffix, female) in gender {
        let label = if *female { "female" } else { "male" };
        writeln!(writer, "  {:<12} {label}", display_suffix(suffix))?;
    }

    let mut male: Vec<(&str, &String)> = rules.male_vocative_suffixes().iter().collect();
    male.sort();
    writeln!(writer)?;
    writeln!(writer, "Male vocative suffixes ({}):", male.len())?;
    for (suffix, replacement) in male {
        writeln!(writer, "  {:<12} {replacement}", display_suffix(suffix))?;
    }

    Ok(())
}

fn display_suffix(suffix: &str) -> &str {
    if suffix.is_empty() {
        "(default)"
    } else {
        suffix
    }
}
