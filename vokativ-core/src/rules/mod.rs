//! Rule tables for vocative inflection
//!
//! Two data-driven tables drive the inflector: name ending -> gender, and
//! male name ending -> vocative ending.

pub(crate) mod config;
pub mod source;
pub mod table;

pub use source::{EmbeddedRules, FileRules, InMemoryRules, RuleSource};
pub use table::{RuleTable, SuffixTable};
