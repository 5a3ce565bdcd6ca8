//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use vokativ_core::{FileRules, RuleTable};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Gender suffix table to validate
    #[arg(long, value_name = "FILE", required = true)]
    pub gender_suffixes: PathBuf,

    /// Male vocative suffix table to validate
    #[arg(long, value_name = "FILE", required = true)]
    pub male_suffixes: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating rule tables: {} and {}",
            self.gender_suffixes.display(),
            self.male_suffixes.display()
        );

        let source = FileRules::new(&self.gender_suffixes, &self.male_suffixes);
        match RuleTable::load(&source) {
            Ok(rules) => {
                println!("✓ Rule tables are valid!");
                println!("  Gender suffixes: {}", rules.gender_suffixes().len());
                println!(
                    "  Male vocative suffixes: {}",
                    rules.male_vocative_suffixes().len()
                );
                println!("  Default male ending: \"{}\"", rules.default_male_suffix());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule tables are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GENDER: &str = r#"
[metadata]
code = "test"
name = "Test"

[suffixes]
"a" = true
"#;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            gender_suffixes: PathBuf::from("gender.toml"),
            male_suffixes: PathBuf::from("male.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("gender.toml"));
    }

    #[test]
    fn test_validate_valid_tables() {
        let temp_dir = TempDir::new().unwrap();
        let gender = temp_dir.path().join("gender.toml");
        let male = temp_dir.path().join("male.toml");
        fs::write(&gender, GENDER).unwrap();
        fs::write(
            &male,
            "[metadata]\ncode = \"test\"\nname = \"Test\"\n\n[suffixes]\n\"\" = \"e\"\n",
        )
        .unwrap();

        let args = ValidateArgs {
            gender_suffixes: gender,
            male_suffixes: male,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_missing_default() {
        let temp_dir = TempDir::new().unwrap();
        let gender = temp_dir.path().join("gender.toml");
        let male = temp_dir.path().join("male.toml");
        fs::write(&gender, GENDER).unwrap();
        fs::write(
            &male,
            "[metadata]\ncode = \"test\"\nname = \"Test\"\n\n[suffixes]\n\"ek\" = \"ku\"\n",
        )
        .unwrap();

        let args = ValidateArgs {
            gender_suffixes: gender,
            male_suffixes: male,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }
}
