use std::path::PathBuf;

use crate::storage::DEFAULT_STORE_FILE;

/// Environment variable overriding the store file location.
pub const DATA_FILE_ENV: &str = "BUDGET_TRACKER_FILE";

/// Runtime configuration for a tracker session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the ledger is persisted between runs.
    pub data_file: PathBuf,
}

impl Config {
    /// Resolves configuration from the environment, falling back to
    /// `budget_data.json` in the current working directory.
    pub fn from_env() -> Self {
        let data_file = std::env::var_os(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
        Self { data_file }
    }

    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}
