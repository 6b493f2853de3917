//! Runtime configuration, read from the environment (and a `.env` file outside tests).

use std::path::PathBuf;

use tracing::Level;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    pub export_dir: PathBuf,
    /// Overrides the recipient-derived context in export filenames.
    pub file_context: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            export_dir: PathBuf::from("."),
            file_context: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let log_level = match var("LETTER_LOG") {
            Some(raw) => raw.trim().parse::<Level>().map_err(|_| {
                ConfigError::InvalidValue(
                    "LETTER_LOG".to_string(),
                    format!("'{}' is not a valid log level", raw),
                )
            })?,
            None => defaults.log_level,
        };

        let export_dir = var("LETTER_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        let file_context = var("LETTER_FILE_CONTEXT");

        Ok(Self {
            log_level,
            export_dir,
            file_context,
        })
    }
}
