//! Configuration validation.

use anyhow::{bail, Result};
use regex::Regex;
use tracing::warn;

use super::Config;
use crate::domain::filters::eq_ignore_case;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Validate log path
    if !config.log_path.as_os_str().is_empty() {
        // Path will be created if it doesn't exist, so just check it's valid
        if config.log_path.to_string_lossy().contains('\0') {
            bail!("Invalid log_path: contains null character");
        }
    }

    for (i, rule) in config.rules.iter().enumerate() {
        if rule.page_type.trim().is_empty() {
            bail!("rules[{}]: page_type cannot be empty", i);
        }

        if rule.page_type.chars().any(char::is_whitespace) {
            bail!(
                "rules[{}]: page_type '{}' cannot contain whitespace",
                i,
                rule.page_type
            );
        }

        if let Some(pattern) = &rule.pattern {
            if pattern.is_empty() {
                bail!("rules[{}]: pattern cannot be empty", i);
            }

            if let Err(e) = Regex::new(pattern) {
                bail!(
                    "rules[{}]: invalid regex pattern '{}': {}",
                    i,
                    pattern,
                    e
                );
            }
        }
    }

    // Allowed, but the later rule only narrows what the earlier one left
    for i in duplicate_page_types(config) {
        warn!(
            "rules[{}]: page_type '{}' is declared more than once",
            i, config.rules[i].page_type
        );
    }

    Ok(())
}

/// Indices of rules whose page type was already declared by an earlier rule,
/// compared the same way filters compare page types.
fn duplicate_page_types(config: &Config) -> Vec<usize> {
    config
        .rules
        .iter()
        .enumerate()
        .filter(|(i, rule)| {
            config.rules[..*i]
                .iter()
                .any(|other| eq_ignore_case(&other.page_type, &rule.page_type))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageTypeRule;

    fn rule(page_type: &str, pattern: Option<&str>) -> PageTypeRule {
        PageTypeRule {
            page_type: page_type.to_string(),
            exclude_if_no_match: true,
            pattern: pattern.map(str::to_string),
        }
    }

    fn config_with(rules: Vec<PageTypeRule>) -> Config {
        Config {
            rules,
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_valid_rules() {
        let config = config_with(vec![
            rule("Sandbox.HomePage", None),
            rule("Sandbox.Article", Some("(?i)^article_")),
            rule("sandbox.homepage", None),
        ]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_page_type() {
        let err = validate(&config_with(vec![rule("", None)])).unwrap_err();
        assert!(err.to_string().contains("rules[0]: page_type cannot be empty"));
    }

    #[test]
    fn test_page_type_with_whitespace() {
        let err = validate(&config_with(vec![rule("Sandbox Home", None)])).unwrap_err();
        assert!(err.to_string().contains("cannot contain whitespace"));
    }

    #[test]
    fn test_empty_pattern() {
        let config = config_with(vec![rule("Sandbox.HomePage", None), rule("A.B", Some(""))]);
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("rules[1]: pattern cannot be empty"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = validate(&config_with(vec![rule("A.B", Some("[a-"))])).unwrap_err();
        assert!(err.to_string().contains("invalid regex pattern"));
    }

    #[test]
    fn test_duplicate_page_types_fold_unicode_case() {
        let config = config_with(vec![
            rule("Sandbox.Übersicht", None),
            rule("Sandbox.HomePage", None),
            rule("sandbox.übersicht", None),
            rule("SANDBOX.HOMEPAGE", None),
        ]);

        assert_eq!(duplicate_page_types(&config), vec![2, 3]);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_distinct_page_types_are_not_duplicates() {
        let config = config_with(vec![
            rule("Sandbox.HomePage", None),
            rule("Sandbox.HomePages", None),
        ]);

        assert!(duplicate_page_types(&config).is_empty());
    }
}
