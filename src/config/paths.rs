//! Path management for PennyWise
//!
//! Provides XDG-compliant path resolution for configuration and processed output.
//!
//! ## Path Resolution Order
//!
//! 1. `PENNYWISE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pennywise` or `~/.config/pennywise`
//! 3. Windows: `%APPDATA%\pennywise`

use std::path::PathBuf;

use crate::error::PennyError;

/// Manages all paths used by PennyWise
#[derive(Debug, Clone)]
pub struct PennyPaths {
    /// Base directory for all PennyWise files
    base_dir: PathBuf,
}

impl PennyPaths {
    /// Create a new PennyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PennyError> {
        let base_dir = if let Ok(custom) = std::env::var("PENNYWISE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PennyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/pennywise/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the user category mapping
    pub fn categories_file(&self) -> PathBuf {
        self.base_dir.join("categories.json")
    }

    /// Get the directory for exported, categorized statements
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join("processed")
    }

    /// Ensure the base and output directories exist
    pub fn ensure_directories(&self) -> Result<(), PennyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PennyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.output_dir())
            .map_err(|e| PennyError::Io(format!("Failed to create output directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PennyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| PennyError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pennywise"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PennyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PennyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pennywise"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.output_dir(), temp_dir.path().join("processed"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.output_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.categories_file(),
            temp_dir.path().join("categories.json")
        );
    }
}
