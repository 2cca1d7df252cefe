use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Content
    pub content_dir: PathBuf,

    // Dictionaries (built-in tables when unset)
    pub dictionary_dir: Option<PathBuf>,

    // Fail the run when any record is rejected
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            dictionary_dir: None,
            strict: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            content_dir: std::env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content")),

            dictionary_dir: std::env::var("DICTIONARY_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            strict: match std::env::var("STRICT") {
                Ok(value) => parse_flag("STRICT", &value)?,
                Err(_) => true,
            },
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{} must be a boolean, got '{}'", name, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("CONTENT_DIR");
        std::env::remove_var("DICTIONARY_DIR");
        std::env::remove_var("STRICT");
    }

    // ==================== Environment Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("CONTENT_DIR", "/srv/site/content");
        std::env::set_var("DICTIONARY_DIR", "/srv/site/i18n");
        std::env::set_var("STRICT", "false");

        let config = Config::from_env().unwrap();
        assert_eq!(config.content_dir, PathBuf::from("/srv/site/content"));
        assert_eq!(config.dictionary_dir, Some(PathBuf::from("/srv/site/i18n")));
        assert!(!config.strict);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_dictionary_dir_is_unset() {
        clear_env();
        std::env::set_var("DICTIONARY_DIR", "  ");
        assert_eq!(Config::from_env().unwrap().dictionary_dir, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_strict_flag_fails() {
        clear_env();
        std::env::set_var("STRICT", "maybe");
        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("STRICT"));
        clear_env();
    }

    // ==================== Flag Parsing Tests ====================

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(parse_flag("X", " 1 ").unwrap());
        assert!(!parse_flag("X", "off").unwrap());
        assert!(parse_flag("X", "").is_err());
    }
}
