//! Configuration management for ucplan.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::store::DEFAULT_STORAGE_KEY;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".ucplan.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Form state persistence
    pub storage: StorageConfig,

    /// Markdown export settings
    pub export: ExportConfig,

    /// Clipboard settings
    pub clipboard: ClipboardConfig,
}

/// Form state persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key the form state is stored under
    pub key: String,

    /// Directory holding stored documents (defaults to the platform data dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Markdown export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory downloads are written to
    pub output_dir: PathBuf,

    /// File name for the all-phases document
    pub all_filename: String,
}

/// Clipboard settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Program and arguments that read the text from stdin
    /// (e.g. `["xclip", "-selection", "clipboard"]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.ucplan.toml` in current directory
    /// 2. `~/.config/ucplan/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        match Self::find_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// The config file [`Config::load`] would read, if one exists.
    pub fn find_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        Self::global_file().filter(|path| path.exists())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::APP_NAME))
    }

    /// Path of the global config file.
    pub fn global_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { key: DEFAULT_STORAGE_KEY.to_string(), data_dir: None }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            all_filename: crate::export::ALL_PHASES_FILENAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.key, "marketingFlowData");
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.export.all_filename, "marketing-framework.md");
        assert!(config.clipboard.command.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[export]"));
        assert!(toml_str.contains("key = \"marketingFlowData\""));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [storage]
            key = "q3Plan"
            data_dir = "/tmp/ucplan"

            [clipboard]
            command = ["xclip", "-selection", "clipboard"]
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.key, "q3Plan");
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/ucplan")));
        assert_eq!(
            config.clipboard.command,
            Some(vec!["xclip".to_string(), "-selection".to_string(), "clipboard".to_string()])
        );
        // Unset sections keep their defaults
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[export]\noutput_dir = \"out\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("out"));
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\nkey = ").unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }
}
