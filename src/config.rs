//! Configuration management for the site.
//!
//! This module handles loading, validating, and saving the site configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV, DEFAULT_SCHEDULING_URL};
use crate::content::ContentLibrary;
use crate::render::RenderOptions;
use crate::theme::SchemeKey;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Content bundle source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// Directory of `<focus>.json` bundles replacing the embedded ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Theming preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// Scheme applied to every route, overriding route-derived schemes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_scheme: Option<SchemeKey>,
}

/// Scheduling widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Page opened by "book a call" links
    pub url: String,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SCHEDULING_URL.to_string(),
        }
    }
}

/// Local focus storage used by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Storage file; defaults to `storage.json` in the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Site configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LumenSite/config.toml`
/// - macOS: `~/Library/Application Support/LumenSite/config.toml`
/// - Windows: `%APPDATA%\LumenSite\config.toml`
///
/// Set `LUMEN_CONFIG_DIR` to use a different directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
    /// Content bundle source
    #[serde(default)]
    pub content: ContentConfig,
    /// Theming preferences
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Scheduling widget
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    /// CLI focus storage
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// `LUMEN_CONFIG_DIR` wins when set and non-empty; otherwise the
    /// platform config directory joined with `LumenSite`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `server.port` is not 0 and `server.host` is not empty
    /// - `scheduling.url` is an http(s) URL
    /// - `content.dir`, if set, is an existing directory
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("server.port must be between 1 and 65535");
        }

        let url = self.scheduling.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            anyhow::bail!(
                "scheduling.url must start with http:// or https:// (got '{}')",
                self.scheduling.url
            );
        }

        if let Some(dir) = &self.content.dir {
            if !dir.is_dir() {
                anyhow::bail!("content.dir does not exist: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Path of the CLI focus storage file.
    pub fn storage_file(&self) -> Result<PathBuf> {
        match &self.storage.file {
            Some(file) => Ok(file.clone()),
            None => Ok(Self::config_dir()?.join("storage.json")),
        }
    }

    /// Loads content bundles from `content.dir`, or the embedded set.
    pub fn content_library(&self) -> Result<ContentLibrary> {
        let library = match &self.content.dir {
            Some(dir) => ContentLibrary::from_dir(dir)
                .context(format!("Failed to load content from {}", dir.display()))?,
            None => ContentLibrary::embedded().context("Failed to load embedded content")?,
        };
        Ok(library)
    }

    /// Rendering settings derived from this configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            scheduling_url: self.scheduling.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.theme.forced_scheme.is_none());
        assert!(config.content.dir.is_none());
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());

        let mut config = Config::new();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.scheduling.url = "calendly.com/x".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.content.dir = Some(PathBuf::from("/nonexistent/content/dir"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.server.port = 8080;
        config.theme.forced_scheme = Some(SchemeKey::Brand);
        config.save_to(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[theme]\nforced_scheme = \"automation\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme.forced_scheme, Some(SchemeKey::Automation));
        assert_eq!(loaded.server, ServerConfig::default());
    }

    #[test]
    fn test_load_rejects_unknown_scheme() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[theme]\nforced_scheme = \"neon\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_storage_file_override() {
        let mut config = Config::new();
        config.storage.file = Some(PathBuf::from("/tmp/focus.json"));
        assert_eq!(config.storage_file().unwrap(), PathBuf::from("/tmp/focus.json"));
    }

    #[test]
    fn test_content_library_defaults_to_embedded() {
        let library = Config::new().content_library().unwrap();
        assert_eq!(library.len(), 3);
    }
}
