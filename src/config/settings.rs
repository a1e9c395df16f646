//! User settings for PennyWise
//!
//! Manages user preferences: currency symbol, settlement epsilon, default
//! export format and where the category mapping lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PennyPaths;
use crate::error::PennyError;
use crate::models::TEXT_FIELDS;

/// User settings for PennyWise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in settlement summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Balances smaller than this are reported as settled
    #[serde(default = "default_balance_epsilon")]
    pub balance_epsilon: f64,

    /// Export format used when none is given on the command line
    #[serde(default = "default_export_format")]
    pub default_export_format: String,

    /// Explicit category mapping file, overriding `categories.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_file: Option<PathBuf>,

    /// Statement column holding the text that gets classified
    #[serde(default = "default_description_field")]
    pub description_field: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_balance_epsilon() -> f64 {
    crate::reports::settlement::BALANCE_EPSILON
}

fn default_export_format() -> String {
    "csv".to_string()
}

fn default_description_field() -> String {
    "recipient_name".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            balance_epsilon: default_balance_epsilon(),
            default_export_format: default_export_format(),
            category_file: None,
            description_field: default_description_field(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PennyPaths) -> Result<Self, PennyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PennyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PennyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values serde cannot: the settle epsilon and the description column
    pub fn validate(&self) -> Result<(), PennyError> {
        if !self.balance_epsilon.is_finite() || self.balance_epsilon <= 0.0 {
            return Err(PennyError::Config(format!(
                "balance_epsilon must be a positive number, got {}",
                self.balance_epsilon
            )));
        }

        if !TEXT_FIELDS.contains(&self.description_field.as_str()) {
            return Err(PennyError::Config(format!(
                "Unknown description_field '{}' (expected one of: {})",
                self.description_field,
                TEXT_FIELDS.join(", ")
            )));
        }

        Ok(())
    }

    /// Update one setting from its name and a textual value
    ///
    /// The result is validated; on error the settings are unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PennyError> {
        let mut updated = self.clone();
        match key {
            "currency_symbol" => updated.currency_symbol = value.to_string(),
            "balance_epsilon" => {
                updated.balance_epsilon = value.trim().parse().map_err(|_| {
                    PennyError::Config(format!("balance_epsilon must be a number, got '{}'", value))
                })?
            }
            "default_export_format" => {
                let format: crate::export::ExportFormat = value.parse()?;
                updated.default_export_format = format.to_string();
            }
            "category_file" => {
                updated.category_file = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            "description_field" => updated.description_field = value.trim().to_string(),
            other => {
                return Err(PennyError::Config(format!("Unknown setting '{}'", other)));
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PennyPaths) -> Result<(), PennyError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PennyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PennyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Category mapping file to use, if any
    ///
    /// An explicit `category_file` wins; otherwise `categories.json` in the
    /// base directory is used when present.
    pub fn mapping_source(&self, paths: &PennyPaths) -> Option<PathBuf> {
        if let Some(explicit) = &self.category_file {
            return Some(explicit.clone());
        }
        let default = paths.categories_file();
        default.exists().then_some(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.balance_epsilon, 0.01);
        assert_eq!(settings.default_export_format, "csv");
        assert_eq!(settings.description_field, "recipient_name");
        assert!(settings.category_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.default_export_format = "json".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_export_format, "json");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "kr"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "kr");
        assert_eq!(loaded.balance_epsilon, 0.01);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PennyError::Config(_)));
    }

    #[test]
    fn test_invalid_epsilon_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());

        for bad in [r#"{"balance_epsilon": -1.0}"#, r#"{"balance_epsilon": 0}"#] {
            std::fs::write(paths.settings_file(), bad).unwrap();
            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(matches!(err, PennyError::Config(_)), "{}", bad);
        }

        let mut settings = Settings::default();
        settings.balance_epsilon = f64::NAN;
        assert!(matches!(settings.validate(), Err(PennyError::Config(_))));
        settings.balance_epsilon = 0.0;
        assert!(settings.validate().is_err());
        settings.balance_epsilon = 0.001;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unknown_description_field_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"description_field": "recipent_name"}"#)
            .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PennyError::Config(_)));
        assert!(err.to_string().contains("recipent_name"));
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.description_field = "nope".into();

        assert!(settings.save(&paths).is_err());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_set_values() {
        let mut settings = Settings::default();

        settings.set("currency_symbol", "$").unwrap();
        settings.set("balance_epsilon", "0.5").unwrap();
        settings.set("default_export_format", "JSON").unwrap();
        settings.set("description_field", "message").unwrap();
        settings.set("category_file", "/tmp/cats.yaml").unwrap();

        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.balance_epsilon, 0.5);
        assert_eq!(settings.default_export_format, "json");
        assert_eq!(settings.description_field, "message");
        assert_eq!(settings.category_file, Some(PathBuf::from("/tmp/cats.yaml")));

        settings.set("category_file", "").unwrap();
        assert!(settings.category_file.is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut settings = Settings::default();

        assert!(settings.set("balance_epsilon", "-1").is_err());
        assert!(settings.set("balance_epsilon", "NaN").is_err());
        assert!(settings.set("balance_epsilon", "abc").is_err());
        assert!(settings.set("default_export_format", "xml").is_err());
        assert!(settings.set("description_field", "nope").is_err());
        assert!(settings.set("colour", "blue").is_err());

        assert_eq!(settings.balance_epsilon, 0.01);
        assert_eq!(settings.default_export_format, "csv");
        assert_eq!(settings.description_field, "recipient_name");
    }

    #[test]
    fn test_mapping_source() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PennyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert!(settings.mapping_source(&paths).is_none());

        std::fs::write(paths.categories_file(), "{}").unwrap();
        assert_eq!(settings.mapping_source(&paths), Some(paths.categories_file()));

        settings.category_file = Some(PathBuf::from("/tmp/custom.yaml"));
        assert_eq!(
            settings.mapping_source(&paths),
            Some(PathBuf::from("/tmp/custom.yaml"))
        );
    }
}
