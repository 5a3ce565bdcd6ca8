//! Vocative inflection of Czech personal names
//!
//! Each whitespace-separated token of a name is classified by gender from its
//! ending and rewritten independently:
//!
//! - female tokens ending in `a` swap it for `o` (`Tereza` -> `Terezo`);
//! - male tokens use the longest matching ending from the male table
//!   (`Marek` -> `Marku`), stay as they are when vowel-final (`Jiří`), and
//!   otherwise take the default ending (`Jan` -> `Jane`).

use std::sync::{Arc, OnceLock};

use crate::error::{ConfigError, VocativeError};
use crate::rules::{EmbeddedRules, RuleSource, RuleTable};

/// Trailing characters that leave a male name unchanged
const VOWELS: &[char] = &[
    'a', 'á', 'e', 'é', 'ě', 'i', 'í', 'o', 'ó', 'u', 'ú', 'y', 'ý',
];

static CZECH: OnceLock<Result<VocativeInflector, ConfigError>> = OnceLock::new();

/// Grammatical gender inferred from a name ending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// Stateless name inflector over a shared [`RuleTable`]
#[derive(Debug, Clone)]
pub struct VocativeInflector {
    rules: Arc<RuleTable>,
}

impl VocativeInflector {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    /// Load the rule tables from `source` and build an inflector over them
    pub fn from_source(source: &dyn RuleSource) -> Result<Self, ConfigError> {
        Ok(Self::new(Arc::new(RuleTable::load(source)?)))
    }

    /// Process-wide inflector over the embedded Czech rules
    ///
    /// Built on first use; later calls return the same instance, or the same
    /// error if the embedded tables failed to load.
    pub fn czech() -> Result<&'static VocativeInflector, ConfigError> {
        CZECH
            .get_or_init(|| Self::from_source(&EmbeddedRules))
            .as_ref()
            .map_err(|e| e.clone())
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Convert a nominative name, possibly of several words, to the vocative
    ///
    /// ```rust
    /// use vokativ_core::VocativeInflector;
    ///
    /// let inflector = VocativeInflector::czech().unwrap();
    /// assert_eq!(inflector.to_vocative("Tereza").unwrap(), "Terezo");
    /// assert_eq!(inflector.to_vocative("jiří  novák").unwrap(), "Jiří Nováku");
    /// ```
    pub fn to_vocative(&self, name: &str) -> Result<String, VocativeError> {
        if name.trim().is_empty() {
            return Err(VocativeError::BlankName);
        }

        let lower = name.to_lowercase();
        let tokens: Vec<String> = lower
            .split_whitespace()
            .map(|token| capitalize(&self.vocative_token(token)))
            .collect();

        Ok(tokens.join(" "))
    }

    /// Convert every name, keeping input order
    pub fn to_vocative_all<I, S>(&self, names: I) -> Vec<Result<String, VocativeError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.to_vocative(name.as_ref()))
            .collect()
    }

    /// Classify a single lowercase token
    ///
    /// Tokens with no matching ending in the gender table are male.
    pub fn gender(&self, token: &str) -> Gender {
        match self.rules.gender_suffixes().longest_suffix(token) {
            Some((_, true)) => Gender::Female,
            _ => Gender::Male,
        }
    }

    fn vocative_token(&self, token: &str) -> String {
        let gender = self.gender(token);
        let vocative = match gender {
            Gender::Female => vocative_female(token),
            Gender::Male => self.vocative_male(token),
        };
        log::trace!("{token} ({gender:?}) -> {vocative}");
        vocative
    }

    fn vocative_male(&self, token: &str) -> String {
        let male = self.rules.male_vocative_suffixes();

        if let Some((suffix, replacement)) = male.longest_suffix(token) {
            let stem = &token[..token.len() - suffix.len()];
            return format!("{stem}{replacement}");
        }

        if token.ends_with(VOWELS) {
            return token.to_string();
        }

        format!("{token}{}", self.rules.default_male_suffix())
    }
}

fn vocative_female(token: &str) -> String {
    match token.strip_suffix('a') {
        Some(stem) => format!("{stem}o"),
        None => token.to_string(),
    }
}

/// Uppercase the first character, leave the rest untouched
///
/// A first character whose uppercase form is more than one character
/// (`ß` -> `SS`) is kept as is, so the token length in chars never changes.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    std::iter::once(first).chain(chars).collect()
}
