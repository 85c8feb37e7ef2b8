//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::{FilterError, FilterModule, PageTypeFilter};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Page type rules
    #[serde(default)]
    pub rules: Vec<PageTypeRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            rules: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Filter module exporting one [`PageTypeFilter`] per configured rule.
    pub fn filter_module(&self) -> FilterModule {
        self.rules
            .iter()
            .enumerate()
            .fold(FilterModule::new("config"), |module, (i, rule)| {
                let rule = rule.clone();
                module.export_with(format!("rules[{}] ({})", i, rule.page_type), move || {
                    rule.build()
                })
            })
    }
}

/// Page type rule configuration.
///
/// # Examples
///
/// Prefix mode (templates named `Sandbox.HomePage_*`):
/// ```toml
/// [[rules]]
/// page_type = "Sandbox.HomePage"
/// ```
///
/// Pattern mode, shared with other page types:
/// ```toml
/// [[rules]]
/// page_type = "Sandbox.Article"
/// pattern = "(?i)^(article|blog)_"
/// exclude_if_no_match = false
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PageTypeRule {
    /// Page type class name
    pub page_type: String,

    /// Hide the matched templates from every other page type
    #[serde(default = "default_exclude_if_no_match")]
    pub exclude_if_no_match: bool,

    /// Optional regex over template identifiers, replacing the prefix match
    #[serde(default)]
    pub pattern: Option<String>,
}

impl PageTypeRule {
    /// Build the filter described by this rule.
    pub fn build(&self) -> Result<PageTypeFilter, FilterError> {
        let filter = PageTypeFilter::new(&self.page_type, self.exclude_if_no_match)?;
        match &self.pattern {
            Some(pattern) => filter.with_pattern(pattern),
            None => Ok(filter),
        }
    }
}

fn default_exclude_if_no_match() -> bool {
    true
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("page-template-filters")
        })
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterRegistry, PageTemplateDefinition, PageTemplateFilterContext};

    #[test]
    fn test_parse_rules() {
        let config: Config = toml::from_str(
            r#"
            [[rules]]
            page_type = "Sandbox.HomePage"

            [[rules]]
            page_type = "Sandbox.Article"
            pattern = "^Article_"
            exclude_if_no_match = false
            "#,
        )
        .unwrap();

        assert!(!config.debug);
        assert_eq!(config.rules.len(), 2);
        assert!(config.rules[0].exclude_if_no_match);
        assert_eq!(config.rules[0].pattern, None);
        assert!(!config.rules[1].exclude_if_no_match);
        assert_eq!(config.rules[1].pattern.as_deref(), Some("^Article_"));
    }

    #[test]
    fn test_filter_module_registers_rules_in_order() {
        let config: Config = toml::from_str(
            r#"
            [[rules]]
            page_type = "Sandbox.HomePage"

            [[rules]]
            page_type = "Sandbox.LandingPage"
            "#,
        )
        .unwrap();

        let module = config.filter_module();
        let names: Vec<&str> = module.type_names().collect();
        assert_eq!(
            names,
            vec![
                "rules[0] (Sandbox.HomePage)",
                "rules[1] (Sandbox.LandingPage)"
            ]
        );

        let mut registry = FilterRegistry::new();
        registry.add_page_template_filters(&[module]).unwrap();

        let templates = vec![
            PageTemplateDefinition::new("Sandbox.HomePage_Default"),
            PageTemplateDefinition::new("Sandbox.LandingPage_Default"),
        ];
        let context = PageTemplateFilterContext::new("Sandbox.LandingPage");
        let result = registry.apply(templates, &context);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].identifier, "Sandbox.LandingPage_Default");
    }

    #[test]
    fn test_invalid_rule_fails_registration() {
        let config = Config {
            rules: vec![PageTypeRule {
                page_type: "Sandbox.HomePage".to_string(),
                exclude_if_no_match: true,
                pattern: Some("(".to_string()),
            }],
            ..Config::default()
        };

        let mut registry = FilterRegistry::new();
        let result = registry.add_page_template_filters(&[config.filter_module()]);

        assert!(matches!(result, Err(FilterError::Construction { .. })));
        assert!(registry.is_empty());
    }
}
