//! Configuration management: the provider roster and where the log lives.

/// Provider/product roster loading from a TOML file
pub mod roster;

/// Submission log location from environment variables
pub mod storage;

use crate::{entities::Roster, errors::Result};
use std::path::{Path, PathBuf};

/// Everything the presentation layer needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Providers and their products, in tab order
    pub roster: Roster,
    /// JSON file holding the submission log
    pub data_path: PathBuf,
}

/// Resolves the roster and the log location.
///
/// Explicit paths win over environment variables, which win over defaults. A
/// missing roster file falls back to the built-in roster; an unreadable or
/// invalid one is an error.
pub fn load_app_config(config_path: Option<&Path>, data_path: Option<&Path>) -> Result<AppConfig> {
    let config_path = config_path.map_or_else(storage::get_config_path, Path::to_path_buf);
    let roster = roster::load_roster_or_default(&config_path)?;
    let data_path = data_path.map_or_else(storage::get_data_path, Path::to_path_buf);

    tracing::debug!(
        suppliers = roster.suppliers.len(),
        data_path = %data_path.display(),
        "Application configuration resolved"
    );

    Ok(AppConfig { roster, data_path })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_explicit_paths_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("log.json");
        let missing_config = dir.path().join("absent.toml");

        let config = load_app_config(Some(missing_config.as_path()), Some(data.as_path())).unwrap();

        assert_eq!(config.data_path, data);
        assert_eq!(config.roster, roster::default_roster());
    }
}
