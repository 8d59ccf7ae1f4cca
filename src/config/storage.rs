//! Storage location configuration.
//!
//! The log and roster paths come from the environment (a `.env` file is loaded
//! by the binary first) and fall back to local defaults.

use std::path::PathBuf;

/// Default log file; the stem matches the slot name the log has always used.
pub const DEFAULT_DATA_PATH: &str = "data/stock_submissions_v1.json";

/// Default roster file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable naming the log file.
pub const DATA_PATH_ENV: &str = "STOCK_INTAKE_DATA";

/// Environment variable naming the roster file.
pub const CONFIG_PATH_ENV: &str = "STOCK_INTAKE_CONFIG";

/// Gets the submission log path from `STOCK_INTAKE_DATA`, or the default.
#[must_use]
pub fn get_data_path() -> PathBuf {
    std::env::var(DATA_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from)
}

/// Gets the roster config path from `STOCK_INTAKE_CONFIG`, or the default.
#[must_use]
pub fn get_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}
