use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use memdump_lib::DumpFormat;
use regex::Regex;
use serde::Deserialize;

pub const CONFIG_ENV_VAR: &str = "MEMDUMP_CONFIG";

/// Output settings, every key is optional
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub uppercase: Option<bool>,
    pub show_address: Option<bool>,
    pub placeholder: Option<char>,
    pub trailing_blank_line: Option<bool>,
    pub compact: Option<bool>,
}

impl Config {
    /// Command line location first, then the environment.
    pub fn locate(path: Option<PathBuf>) -> Option<PathBuf> {
        path.or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let contents_with_env = replace_env_vars(&contents)?;

        serde_yaml::from_str(&contents_with_env)
            .with_context(|| format!("Failed to parse YAML from {}", path.display()))
    }

    /// Merge another config into this one (other config takes precedence)
    pub fn merge(self, other: Config) -> Config {
        Config {
            uppercase: other.uppercase.or(self.uppercase),
            show_address: other.show_address.or(self.show_address),
            placeholder: other.placeholder.or(self.placeholder),
            trailing_blank_line: other.trailing_blank_line.or(self.trailing_blank_line),
            compact: other.compact.or(self.compact),
        }
    }

    pub fn dump_format(&self) -> DumpFormat {
        let format = DumpFormat::default();
        let format = match self.uppercase {
            Some(uppercase) => format.with_uppercase(uppercase),
            None => format,
        };
        let format = match self.show_address {
            Some(show_address) => format.with_address(show_address),
            None => format,
        };
        let format = match self.placeholder {
            Some(placeholder) => format.with_placeholder(placeholder),
            None => format,
        };

        match self.trailing_blank_line {
            Some(blank) => format.with_trailing_blank_line(blank),
            None => format,
        }
    }

    pub fn compact(&self) -> bool {
        self.compact.unwrap_or(false)
    }
}

fn replace_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").context("Failed to compile regex pattern")?;
    let mut modified_content = content.to_string();

    for capture in re.captures_iter(content) {
        let (full_match, [var_name]) = capture.extract();
        let value = env::var(var_name)
            .with_context(|| format!("Environment variable '{}' not found", var_name))?;
        modified_content = modified_content.replace(full_match, &value);
    }

    Ok(modified_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("memdump.yaml");
        fs::write(
            &config_path,
            r#"
uppercase: true
show_address: false
placeholder: "_"
"#,
        )?;

        let config = Config::load(&config_path)?;
        assert_eq!(Some(true), config.uppercase);
        assert_eq!(Some(false), config.show_address);
        assert_eq!(Some('_'), config.placeholder);
        assert_eq!(None, config.trailing_blank_line);
        assert!(!config.compact());

        let format = config.dump_format();
        assert!(format.uppercase());
        assert!(!format.show_address());
        assert_eq!('_', format.placeholder());
        assert!(format.trailing_blank_line());

        Ok(())
    }

    #[test]
    fn test_env_vars() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("env.yaml");

        env::set_var("MEMDUMP_TEST_COMPACT", "true");
        fs::write(&config_path, "compact: ${MEMDUMP_TEST_COMPACT}\n")?;

        let config = Config::load(&config_path)?;
        assert!(config.compact());

        env::remove_var("MEMDUMP_TEST_COMPACT");

        Ok(())
    }

    #[test]
    fn test_missing_env_var() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("missing.yaml");
        fs::write(&config_path, "placeholder: ${MEMDUMP_TEST_SURELY_UNSET}\n")?;

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("MEMDUMP_TEST_SURELY_UNSET"));

        Ok(())
    }

    #[test]
    fn test_unknown_key() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("typo.yaml");
        fs::write(&config_path, "upercase: true\n")?;

        assert!(Config::load(&config_path).is_err());

        Ok(())
    }

    #[test]
    fn test_merge() {
        let file = Config {
            uppercase: Some(true),
            placeholder: Some('*'),
            compact: Some(true),
            ..Config::default()
        };
        let flags = Config {
            compact: Some(false),
            show_address: Some(false),
            ..Config::default()
        };
        let config = file.merge(flags);

        assert_eq!(Some(true), config.uppercase);
        assert_eq!(Some('*'), config.placeholder);
        assert_eq!(Some(false), config.show_address);
        assert!(!config.compact());
    }

    #[test]
    fn test_locate_prefers_command_line() {
        let path = PathBuf::from("given.yaml");

        assert_eq!(Some(path.clone()), Config::locate(Some(path)));
    }
}
