//! Page type filter built from configuration.

use regex::Regex;

use super::page_type_filter::{matches_page_type_prefix, PageTypeTemplateFilter};
use crate::domain::{FilterError, PageTemplateDefinition, PageTemplateFilterContext};

/// How a configured filter decides that a template belongs to its page type.
#[derive(Debug, Clone)]
enum TemplateMatcher {
    /// `{page_type}_` prefix, ignoring case
    Prefix,
    /// Regex over the template identifier
    Pattern(Regex),
}

/// Page type filter declared in the config file rather than in code.
#[derive(Debug, Clone)]
pub struct PageTypeFilter {
    page_type: String,
    exclude_if_no_match: bool,
    matcher: TemplateMatcher,
}

impl PageTypeFilter {
    /// Create a filter using the default prefix predicate.
    ///
    /// # Errors
    ///
    /// Returns error if `page_type` is empty.
    pub fn new(
        page_type: impl Into<String>,
        exclude_if_no_match: bool,
    ) -> Result<Self, FilterError> {
        let page_type = page_type.into();
        if page_type.trim().is_empty() {
            return Err(FilterError::Config("page_type cannot be empty".to_string()));
        }

        Ok(Self {
            page_type,
            exclude_if_no_match,
            matcher: TemplateMatcher::Prefix,
        })
    }

    /// Match template identifiers against `pattern` instead of the prefix.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is not a valid regex.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, FilterError> {
        self.matcher = TemplateMatcher::Pattern(Regex::new(pattern)?);
        Ok(self)
    }

    /// The regex used instead of the prefix predicate, if any.
    pub fn pattern(&self) -> Option<&str> {
        match &self.matcher {
            TemplateMatcher::Prefix => None,
            TemplateMatcher::Pattern(regex) => Some(regex.as_str()),
        }
    }
}

impl PageTypeTemplateFilter for PageTypeFilter {
    fn page_type_class_name(&self) -> &str {
        &self.page_type
    }

    fn exclude_if_no_match(&self) -> bool {
        self.exclude_if_no_match
    }

    fn matches(
        &self,
        template: &PageTemplateDefinition,
        _context: &PageTemplateFilterContext,
        page_type_class_name: &str,
    ) -> bool {
        match &self.matcher {
            TemplateMatcher::Prefix => {
                matches_page_type_prefix(&template.identifier, page_type_class_name)
            }
            TemplateMatcher::Pattern(regex) => regex.is_match(&template.identifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::PageTemplateFilter;

    fn templates(ids: &[&str]) -> Vec<PageTemplateDefinition> {
        ids.iter().copied().map(PageTemplateDefinition::new).collect()
    }

    fn identifiers(templates: &[PageTemplateDefinition]) -> Vec<&str> {
        templates.iter().map(|t| t.identifier.as_str()).collect()
    }

    #[test]
    fn test_prefix_filter() {
        let filter = PageTypeFilter::new("Sandbox.HomePage", true).unwrap();
        let input = templates(&["Sandbox.HomePage_Default", "Sandbox.Article_Default"]);

        let home = PageTemplateFilterContext::new("Sandbox.HomePage");
        let on_home = filter.filter(input.clone(), &home);
        assert_eq!(identifiers(&on_home), vec!["Sandbox.HomePage_Default"]);

        let article = PageTemplateFilterContext::new("Sandbox.Article");
        let on_article = filter.filter(input, &article);
        assert_eq!(identifiers(&on_article), vec!["Sandbox.Article_Default"]);
    }

    #[test]
    fn test_pattern_filter() {
        let filter = PageTypeFilter::new("Sandbox.Article", false)
            .unwrap()
            .with_pattern("(?i)^(article|blog)_")
            .unwrap();
        assert_eq!(filter.pattern(), Some("(?i)^(article|blog)_"));

        let input = templates(&["Article_Wide", "BLOG_Narrow", "Sandbox.Article_Default"]);

        let article = PageTemplateFilterContext::new("sandbox.article");
        let on_article = filter.filter(input.clone(), &article);
        assert_eq!(identifiers(&on_article), vec!["Article_Wide", "BLOG_Narrow"]);

        // Not excluding: other page types see everything
        let home = PageTemplateFilterContext::new("Sandbox.HomePage");
        assert_eq!(filter.filter(input.clone(), &home), input);
    }

    #[test]
    fn test_empty_page_type_rejected() {
        assert!(matches!(
            PageTypeFilter::new("  ", true),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = PageTypeFilter::new("Sandbox.HomePage", true)
            .unwrap()
            .with_pattern("(unclosed");
        assert!(matches!(result, Err(FilterError::Regex(_))));
    }
}
