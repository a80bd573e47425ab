//! Configuration handling for the TUI

use crate::state::CountryCatalog;
use crate::submit::SimulatedSubmitter;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// JSON file replacing the built-in country catalog
    pub catalog_path: Option<PathBuf>,
    /// Show the password in clear text when the form opens
    pub show_password: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedSubmitter::DEFAULT_DELAY)
    }

    pub fn show_password(&self) -> bool {
        self.show_password.unwrap_or(false)
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<CountryCatalog> {
        match &self.catalog_path {
            Some(path) => CountryCatalog::from_path(path),
            None => Ok(CountryCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.catalog_path.is_none());
        assert!(config.show_password.is_none());
        assert_eq!(config.submit_delay(), Duration::from_millis(800));
        assert!(!config.show_password());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            submit_delay_ms: Some(250),
            catalog_path: Some(PathBuf::from("/etc/signup/countries.json")),
            show_password: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.submit_delay_ms, Some(250));
        assert_eq!(
            parsed.catalog_path,
            Some(PathBuf::from("/etc/signup/countries.json"))
        );
        assert_eq!(parsed.show_password, Some(true));
        assert_eq!(parsed.submit_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_delay_ms, Some(10));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("config.json", r#"{"show_password": true}"#);
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(config.show_password());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let path = temp_file("bad-config.json", "not json");
        let err = TuiConfig::load_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let catalog = TuiConfig::default().catalog().unwrap();
        assert_eq!(catalog, CountryCatalog::builtin());
    }

    #[test]
    fn test_catalog_from_configured_path() {
        let path = temp_file(
            "countries.json",
            r#"[{"name": "Japan", "code": "JP", "cities": ["Tokyo"]}]"#,
        );
        let config = TuiConfig {
            catalog_path: Some(path.clone()),
            ..Default::default()
        };
        let catalog = config.catalog().unwrap();
        fs::remove_file(&path).unwrap();
        assert!(catalog.contains_city("Japan", "Tokyo"));
    }

    #[test]
    fn test_catalog_missing_file_is_an_error() {
        let config = TuiConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/countries.json")),
            ..Default::default()
        };
        assert!(config.catalog().is_err());
    }
}
