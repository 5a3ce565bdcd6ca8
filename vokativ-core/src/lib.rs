//! Czech vocative case for personal names
//!
//! This crate converts a Czech name from the nominative (dictionary form) to
//! the vocative, the case used to address someone directly: `Tereza` becomes
//! `Terezo`, `Jan Novák` becomes `Jane Nováku`.
//!
//! Inflection is a best-effort heuristic driven by two suffix tables:
//! - **gender suffixes**: name ending -> whether the name is female
//! - **male vocative suffixes**: male name ending -> replacement ending,
//!   with the empty ending as the default for consonant-final names
//!
//! The tables ship embedded (see [`EmbeddedRules`]) and can be replaced with
//! any [`RuleSource`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vokativ_core::{EmbeddedRules, RuleTable, VocativeInflector};
//!
//! let rules = Arc::new(RuleTable::load(&EmbeddedRules).unwrap());
//! let inflector = VocativeInflector::new(rules);
//!
//! assert_eq!(inflector.to_vocative("Karel").unwrap(), "Karle");
//! assert_eq!(inflector.to_vocative("Petr Svoboda").unwrap(), "Petře Svobodo");
//! ```

pub mod error;
pub mod inflector;
pub mod rules;

pub use error::{ConfigError, Error, Result, VocativeError};
pub use inflector::{Gender, VocativeInflector};
pub use rules::{EmbeddedRules, FileRules, InMemoryRules, RuleSource, RuleTable, SuffixTable};

/// Convert `name` to the vocative with the embedded Czech rules
pub fn to_vocative(name: &str) -> Result<String> {
    let inflector = VocativeInflector::czech()?;
    Ok(inflector.to_vocative(name)?)
}
