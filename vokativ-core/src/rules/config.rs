//! Configuration structures and validation
//!
//! This module defines the TOML schema for the two rule tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Rule table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Gender classification table: suffix -> is female
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderSuffixFile {
    pub metadata: Metadata,
    pub suffixes: HashMap<String, bool>,
}

/// Male vocative table: suffix -> replacement suffix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaleSuffixFile {
    pub metadata: Metadata,
    pub suffixes: HashMap<String, String>,
}

impl GenderSuffixFile {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.suffixes.is_empty() {
            return Err("No gender suffixes defined".to_string());
        }

        check_lowercase_keys(self.suffixes.keys())
    }
}

impl MaleSuffixFile {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.suffixes.contains_key("") {
            return Err("Missing default entry for the empty suffix".to_string());
        }

        check_lowercase_keys(self.suffixes.keys())
    }
}

fn check_lowercase_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Result<(), String> {
    for key in keys {
        if key.to_lowercase() != *key {
            return Err(format!("Suffix '{key}' must be lowercase"));
        }
    }
    Ok(())
}
