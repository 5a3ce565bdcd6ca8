//! vokativ CLI library
//!
//! This library provides the command-line interface for the vokativ
//! Czech vocative inflector.

pub mod commands;
pub mod input;
pub mod output;

use anyhow::Result;

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the level derived from `verbose`.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(verbose)),
    )
    .try_init()?;

    Ok(())
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(3), "trace");
        assert_eq!(log_level(200), "trace");
    }

    #[test]
    fn test_quiet_skips_logger() {
        assert!(init_logging(3, true).is_ok());
    }
}
