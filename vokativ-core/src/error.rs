//! Layered error types
//!
//! Rule-table problems are fatal and surface once, at load time.
//! Per-call problems only concern the argument of a single inflection.

use thiserror::Error;

/// Errors raised while loading or validating rule tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The backing resource could not be read
    #[error("failed to read rule table '{path}': {message}")]
    Read {
        /// Location of the resource
        path: String,
        /// Underlying I/O failure
        message: String,
    },

    /// The resource is not a well-formed rule table
    #[error("failed to parse rule table '{source_name}': {message}")]
    Parse {
        /// Name of the resource (file path or embedded name)
        source_name: String,
        /// Parser diagnostics
        message: String,
    },

    /// The resource parsed but breaks a table invariant
    #[error("invalid rule table '{source_name}': {message}")]
    Invalid {
        /// Name of the resource (file path or embedded name)
        source_name: String,
        /// The invariant that was violated
        message: String,
    },

    /// The male vocative table has no entry for the empty suffix
    #[error("male vocative table has no default entry for the empty suffix")]
    MissingDefault,
}

/// Errors raised by a single inflection call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocativeError {
    /// The name is empty or whitespace only
    #[error("name must not be blank")]
    BlankName,
}

/// Crate-level error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rule table error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    Vocative(#[from] VocativeError),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_display() {
        assert_eq!(VocativeError::BlankName.to_string(), "name must not be blank");
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Read {
            path: "missing.toml".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to read rule table 'missing.toml': No such file or directory"
        );

        let error = ConfigError::Invalid {
            source_name: "gender".to_string(),
            message: "no suffixes defined".to_string(),
        };
        assert!(error.to_string().contains("no suffixes defined"));
    }

    #[test]
    fn test_error_conversion() {
        let error: Error = ConfigError::MissingDefault.into();
        assert!(matches!(error, Error::Config(ConfigError::MissingDefault)));
        assert!(error.to_string().starts_with("configuration error:"));

        let error: Error = VocativeError::BlankName.into();
        assert_eq!(error.to_string(), "invalid argument: name must not be blank");
    }
}
