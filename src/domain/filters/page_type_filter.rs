//! Page type to page template association.
//!
//! A [`PageTypeTemplateFilter`] ties one page type to the templates that
//! follow the `{PageType}_{Variant}` naming convention. Implementors only
//! have to name the page type; the exclusion behavior and the matching
//! predicate can be overridden.
//!
//! ```
//! use page_template_filters::PageTypeTemplateFilter;
//!
//! #[derive(Default)]
//! struct HomePageTemplateFilter;
//!
//! impl PageTypeTemplateFilter for HomePageTemplateFilter {
//!     fn page_type_class_name(&self) -> &str {
//!         "Sandbox.HomePage"
//!     }
//! }
//! ```

use super::PageTemplateFilter;
use crate::domain::{PageTemplateDefinition, PageTemplateFilterContext};

/// Filter associating a single page type with its page templates.
///
/// Every implementor is a [`PageTemplateFilter`]:
///
/// - page type of the context equals [`page_type_class_name`] (case-insensitive):
///   only matching templates are kept
/// - otherwise, with [`exclude_if_no_match`]: matching templates are removed
/// - otherwise the templates pass through unchanged
///
/// Implementations must return the same values from every call.
///
/// [`page_type_class_name`]: PageTypeTemplateFilter::page_type_class_name
/// [`exclude_if_no_match`]: PageTypeTemplateFilter::exclude_if_no_match
pub trait PageTypeTemplateFilter: Send + Sync {
    /// Page type class name compared to [`PageTemplateFilterContext::page_type`].
    fn page_type_class_name(&self) -> &str;

    /// Remove matching templates when editing any other page type.
    ///
    /// Defaults to `true`, which reserves the matched templates for this page type.
    fn exclude_if_no_match(&self) -> bool {
        true
    }

    /// Whether `template` belongs to `page_type_class_name`.
    ///
    /// Defaults to [`matches_page_type_prefix`].
    fn matches(
        &self,
        template: &PageTemplateDefinition,
        _context: &PageTemplateFilterContext,
        page_type_class_name: &str,
    ) -> bool {
        matches_page_type_prefix(&template.identifier, page_type_class_name)
    }
}

impl<T: PageTypeTemplateFilter> PageTemplateFilter for T {
    fn filter(
        &self,
        templates: Vec<PageTemplateDefinition>,
        context: &PageTemplateFilterContext,
    ) -> Vec<PageTemplateDefinition> {
        let class_name = self.page_type_class_name();

        if eq_ignore_case(&context.page_type, class_name) {
            return templates
                .into_iter()
                .filter(|t| self.matches(t, context, class_name))
                .collect();
        }

        if self.exclude_if_no_match() {
            return templates
                .into_iter()
                .filter(|t| !self.matches(t, context, class_name))
                .collect();
        }

        templates
    }
}

/// Default predicate: `identifier` starts with `"{page_type_class_name}_"`,
/// ignoring case.
///
/// `Sandbox.HomePage_Default` matches `Sandbox.HomePage`,
/// `Sandbox.HomePageAlt` does not.
pub fn matches_page_type_prefix(identifier: &str, page_type_class_name: &str) -> bool {
    let mut haystack = identifier.chars().flat_map(char::to_lowercase);
    let prefix_matches = page_type_class_name
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| haystack.next() == Some(p));

    prefix_matches && haystack.next() == Some('_')
}

/// Case-insensitive equality of two identifiers.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
