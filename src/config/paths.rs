//! Path management for Pocket Budget
//!
//! Provides platform-aware path resolution for configuration, data and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `POCKET_BUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`, e.g.
//!    `~/.config/pocket-budget` on Linux or `%APPDATA%\pocket-budget` on Windows

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PocketError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "POCKET_BUDGET_DATA_DIR";

/// Manages all paths used by Pocket Budget
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Base directory for all Pocket Budget data
    base_dir: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, PocketError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DataPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to records.json (budgets, expenses and goals per user)
    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PocketError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PocketError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PocketError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Pocket Budget has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
fn resolve_default_path() -> Result<PathBuf, PocketError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PocketError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("pocket-budget"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.users_file(),
            temp_dir.path().join("data").join("users.json")
        );
        assert_eq!(
            paths.records_file(),
            temp_dir.path().join("data").join("records.json")
        );
    }
}
