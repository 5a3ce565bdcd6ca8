//! CLI command implementations

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use vokativ_core::{EmbeddedRules, FileRules, RuleSource, VocativeInflector};

pub mod inflect;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert names to the vocative case
    Inflect(inflect::InflectArgs),

    /// Check a pair of rule table files
    Validate(validate::ValidateArgs),

    /// Print the active rule tables
    List(list::ListArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Inflect(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List(args) => args.execute(),
        }
    }
}

/// Where rule tables come from (embedded unless both files are given)
#[derive(Debug, Clone, Default, Args)]
pub struct RuleArgs {
    /// Gender suffix table (TOML)
    #[arg(long, value_name = "FILE", env = "VOKATIV_GENDER_SUFFIXES")]
    pub gender_suffixes: Option<PathBuf>,

    /// Male vocative suffix table (TOML)
    #[arg(long, value_name = "FILE", env = "VOKATIV_MALE_SUFFIXES")]
    pub male_suffixes: Option<PathBuf>,
}

impl RuleArgs {
    /// Resolve the rule source
    pub fn source(&self) -> Result<Box<dyn RuleSource>> {
        match (&self.gender_suffixes, &self.male_suffixes) {
            (Some(gender), Some(male)) => Ok(Box::new(FileRules::new(gender, male))),
            (None, None) => Ok(Box::new(EmbeddedRules)),
            _ => bail!("--gender-suffixes and --male-suffixes must be given together"),
        }
    }

    /// Load the rule tables and build an inflector
    pub fn load_inflector(&self) -> Result<VocativeInflector> {
        let source = self.source()?;
        log::info!("Loading rule tables from {}", source.name());
        Ok(VocativeInflector::from_source(&*source)?)
    }
}
