//! Runtime rule tables
//!
//! Tables are immutable after construction and allocation-free during lookup.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::rules::source::RuleSource;

/// Immutable suffix -> value map with longest-suffix lookup
#[derive(Debug, Clone)]
pub struct SuffixTable<V> {
    entries: HashMap<String, V>,
}

impl<V> SuffixTable<V> {
    /// Build from a parsed mapping, lowercasing every key
    pub fn new(entries: HashMap<String, V>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(suffix, value)| (suffix.to_lowercase(), value))
                .collect(),
        }
    }

    /// Find the longest non-empty key that is a suffix of `token`
    ///
    /// Candidates are tried from the whole token down to its last character,
    /// so the first hit is the longest. The empty key is never a candidate;
    /// use [`SuffixTable::default_value`] for it.
    pub fn longest_suffix<'a>(&'a self, token: &str) -> Option<(&'a str, &'a V)> {
        token
            .char_indices()
            .find_map(|(start, _)| self.entries.get_key_value(&token[start..]))
            .map(|(suffix, value)| (suffix.as_str(), value))
    }

    /// Value stored under the empty suffix
    pub fn default_value(&self) -> Option<&V> {
        self.entries.get("")
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The complete, validated pair of rule tables
///
/// A `RuleTable` can only be built with both mappings present and a
/// default male ending, so holders never see a partial table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    gender_suffixes: SuffixTable<bool>,
    male_vocative_suffixes: SuffixTable<String>,
    default_male_suffix: String,
}

impl RuleTable {
    /// Load both tables from a rule source
    pub fn load(source: &dyn RuleSource) -> Result<Self, ConfigError> {
        let gender = source.load_gender_suffixes()?;
        let male = source.load_male_vocative_suffixes()?;
        let table = Self::from_maps(gender, male)?;

        log::debug!(
            "Loaded rule tables from {}: {} gender suffixes, {} male vocative suffixes",
            source.name(),
            table.gender_suffixes.len(),
            table.male_vocative_suffixes.len()
        );

        Ok(table)
    }

    /// Build from already-parsed mappings
    pub fn from_maps(
        gender: HashMap<String, bool>,
        male: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let male_vocative_suffixes = SuffixTable::new(male);
        let default_male_suffix = male_vocative_suffixes
            .default_value()
            .cloned()
            .ok_or(ConfigError::MissingDefault)?;

        Ok(Self {
            gender_suffixes: SuffixTable::new(gender),
            male_vocative_suffixes,
            default_male_suffix,
        })
    }

    pub fn gender_suffixes(&self) -> &SuffixTable<bool> {
        &self.gender_suffixes
    }

    pub fn male_vocative_suffixes(&self) -> &SuffixTable<String> {
        &self.male_vocative_suffixes
    }

    /// Ending appended to consonant-final male names with no specific rule
    pub fn default_male_suffix(&self) -> &str {
        &self.default_male_suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> SuffixTable<String> {
        SuffixTable::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_longest_suffix_prefers_longer_key() {
        let t = table(&[("k", "ku"), ("ek", "ku"), ("něk", "ňku")]);

        assert_eq!(t.longest_suffix("marek"), Some(("ek", &"ku".to_string())));
        assert_eq!(t.longest_suffix("novák"), Some(("k", &"ku".to_string())));
        assert_eq!(
            t.longest_suffix("zdeněk"),
            Some(("něk", &"ňku".to_string()))
        );
    }

    #[test]
    fn test_longest_suffix_matches_whole_token() {
        let t = table(&[("dagmar", "x"), ("r", "y")]);
        assert_eq!(t.longest_suffix("dagmar").map(|(s, _)| s), Some("dagmar"));
        assert_eq!(t.longest_suffix("petr").map(|(s, _)| s), Some("r"));
    }

    #[test]
    fn test_longest_suffix_never_returns_empty_key() {
        let t = table(&[("", "e"), ("ek", "ku")]);
        assert_eq!(t.longest_suffix("jan"), None);
        assert_eq!(t.default_value(), Some(&"e".to_string()));
    }

    #[test]
    fn test_longest_suffix_multibyte_boundaries() {
        let t = table(&[("ř", "ři"), ("š", "ši")]);
        assert_eq!(t.longest_suffix("lukáš").map(|(s, _)| s), Some("š"));
        assert_eq!(t.longest_suffix("jiří"), None);
        assert_eq!(t.longest_suffix(""), None);
    }

    #[test]
    fn test_keys_are_lowercased() {
        let t = table(&[("EK", "ku")]);
        assert_eq!(t.longest_suffix("marek"), Some(("ek", &"ku".to_string())));
        assert_eq!(t.longest_suffix("MAREK"), None);
    }

    #[test]
    fn test_rule_table_requires_default() {
        let mut male = HashMap::new();
        male.insert("ek".to_string(), "ku".to_string());

        let err = RuleTable::from_maps(HashMap::new(), male).unwrap_err();
        assert_eq!(err, ConfigError::MissingDefault);
    }

    #[test]
    fn test_rule_table_default_suffix() {
        let mut male = HashMap::new();
        male.insert(String::new(), "e".to_string());
        let mut gender = HashMap::new();
        gender.insert("a".to_string(), true);

        let rules = RuleTable::from_maps(gender, male).unwrap();
        assert_eq!(rules.default_male_suffix(), "e");
        assert_eq!(rules.gender_suffixes().len(), 1);
        assert_eq!(rules.male_vocative_suffixes().len(), 1);
    }
}
