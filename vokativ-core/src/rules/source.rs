//! Rule sources
//!
//! A [`RuleSource`] hands the two parsed mappings to [`RuleTable::load`].
//! Where the data lives and how it is encoded is up to the source.
//!
//! [`RuleTable::load`]: crate::rules::RuleTable::load

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::rules::config::{GenderSuffixFile, MaleSuffixFile};

const EMBEDDED_GENDER: &str = include_str!("../../configs/czech/gender_suffixes.toml");
const EMBEDDED_MALE: &str = include_str!("../../configs/czech/male_vocative_suffixes.toml");

/// Provider of the gender and male vocative mappings
pub trait RuleSource {
    /// Human-readable name used in logs
    fn name(&self) -> String;

    /// Mapping of lowercase name endings to "is female"
    fn load_gender_suffixes(&self) -> Result<HashMap<String, bool>, ConfigError>;

    /// Mapping of lowercase male name endings to their vocative replacement.
    /// Must contain the empty-string default entry.
    fn load_male_vocative_suffixes(&self) -> Result<HashMap<String, String>, ConfigError>;
}

/// Czech tables compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedRules;

impl RuleSource for EmbeddedRules {
    fn name(&self) -> String {
        "embedded Czech rules".to_string()
    }

    fn load_gender_suffixes(&self) -> Result<HashMap<String, bool>, ConfigError> {
        parse_gender(EMBEDDED_GENDER, "czech/gender_suffixes.toml")
    }

    fn load_male_vocative_suffixes(&self) -> Result<HashMap<String, String>, ConfigError> {
        parse_male(EMBEDDED_MALE, "czech/male_vocative_suffixes.toml")
    }
}

/// Tables read from two TOML files on disk
#[derive(Debug, Clone)]
pub struct FileRules {
    gender_path: PathBuf,
    male_path: PathBuf,
}

impl FileRules {
    pub fn new(gender_path: impl Into<PathBuf>, male_path: impl Into<PathBuf>) -> Self {
        Self {
            gender_path: gender_path.into(),
            male_path: male_path.into(),
        }
    }
}

impl RuleSource for FileRules {
    fn name(&self) -> String {
        format!(
            "{} and {}",
            self.gender_path.display(),
            self.male_path.display()
        )
    }

    fn load_gender_suffixes(&self) -> Result<HashMap<String, bool>, ConfigError> {
        let content = read_file(&self.gender_path)?;
        parse_gender(&content, &self.gender_path.display().to_string())
    }

    fn load_male_vocative_suffixes(&self) -> Result<HashMap<String, String>, ConfigError> {
        let content = read_file(&self.male_path)?;
        parse_male(&content, &self.male_path.display().to_string())
    }
}

/// Tables supplied directly as maps
#[derive(Debug, Clone, Default)]
pub struct InMemoryRules {
    pub gender: HashMap<String, bool>,
    pub male: HashMap<String, String>,
}

impl InMemoryRules {
    pub fn new(gender: HashMap<String, bool>, male: HashMap<String, String>) -> Self {
        Self { gender, male }
    }
}

impl RuleSource for InMemoryRules {
    fn name(&self) -> String {
        "in-memory rules".to_string()
    }

    fn load_gender_suffixes(&self) -> Result<HashMap<String, bool>, ConfigError> {
        Ok(self.gender.clone())
    }

    fn load_male_vocative_suffixes(&self) -> Result<HashMap<String, String>, ConfigError> {
        Ok(self.male.clone())
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn parse_gender(content: &str, source_name: &str) -> Result<HashMap<String, bool>, ConfigError> {
    let file: GenderSuffixFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;

    file.validate().map_err(|message| ConfigError::Invalid {
        source_name: source_name.to_string(),
        message,
    })?;

    log::debug!(
        "Parsed gender table '{}' ({}) from {source_name}",
        file.metadata.name,
        file.metadata.code
    );

    Ok(file.suffixes)
}

fn parse_male(content: &str, source_name: &str) -> Result<HashMap<String, String>, ConfigError> {
    let file: MaleSuffixFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;

    file.validate().map_err(|message| ConfigError::Invalid {
        source_name: source_name.to_string(),
        message,
    })?;

    log::debug!(
        "Parsed male vocative table '{}' ({}) from {source_name}",
        file.metadata.name,
        file.metadata.code
    );

    Ok(file.suffixes)
}
