//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/page-template-filters/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("page-template-filters")
            .join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, creates default configuration file.
    /// Validates configuration after loading.
    /// Log path defaults to the same directory as config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);
        let config_dir = path.parent();

        if !path.exists() {
            // Create default config file
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // If log_path was not explicitly set in config, use config file directory
        // Check if log_path matches the general default (meaning it wasn't set in file)
        let general_default = default_log_path_for_config_dir(None);
        if config.log_path == general_default {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        // Validate configuration
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content();
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        r#"# page-template-filters configuration file

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# If --config is specified, logs go to that directory/logs
# log_path = "~/.config/page-template-filters/logs"

# Page type rules
# Each rule ties a page type to the templates named "{page_type}_{variant}".
# Rules run in the order they are declared.
#
# [[rules]]
# page_type = "Sandbox.HomePage"
# Hide the matched templates from every other page type (default: true)
# exclude_if_no_match = true

# Match template identifiers with a regex instead of the "{page_type}_" prefix
# [[rules]]
# page_type = "Sandbox.Article"
# pattern = "(?i)^(article|blog)_"
# exclude_if_no_match = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "page-template-filters-{}-{}",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_default_content_parses_and_validates() {
        let config: Config = toml::from_str(&ConfigService::default_config_content()).unwrap();
        assert!(config.rules.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = temp_dir("load-missing");
        let path = dir.join("config.toml");

        let config = ConfigService::load(Some(&path)).unwrap();

        assert!(path.exists());
        assert!(!config.debug);
        assert_eq!(config.log_path, dir.join("logs"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_rejects_invalid_rules() {
        let dir = temp_dir("load-invalid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[[rules]]\npage_type = \"\"\n").unwrap();

        let err = ConfigService::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("page_type cannot be empty"));

        fs::remove_dir_all(&dir).ok();
    }
}
