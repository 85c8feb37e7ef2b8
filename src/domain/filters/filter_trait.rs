//! Filter trait definition.

use crate::domain::{PageTemplateDefinition, PageTemplateFilterContext};

/// Trait for page template filters.
///
/// Each registered filter receives the templates left over by the filters
/// registered before it and returns the ones that stay eligible.
pub trait PageTemplateFilter: Send + Sync {
    /// Narrow `templates` for the page described by `context`.
    fn filter(
        &self,
        templates: Vec<PageTemplateDefinition>,
        context: &PageTemplateFilterContext,
    ) -> Vec<PageTemplateDefinition>;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
