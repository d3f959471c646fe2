//! Configuration file support for buddy
//!
//! Loads config from ~/.buddy/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for buddy
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Groq API key
    pub groq_api_key: Option<String>,

    /// Chat-completions endpoint override
    pub api_url: Option<String>,

    /// Model identifier
    pub model: Option<String>,
}

impl Config {
    /// Load config from ~/.buddy/config.toml
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".buddy")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.groq_api_key.is_none());
        assert!(config.model.is_none());
    }

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.to_string_lossy().contains(".buddy"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "groq_api_key = \"gsk-test\"").unwrap();
        writeln!(file, "model = \"llama-3.1-8b-instant\"").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk-test"));
        assert_eq!(config.model.as_deref(), Some("llama-3.1-8b-instant"));
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(config.groq_api_key.is_none());
    }
}
