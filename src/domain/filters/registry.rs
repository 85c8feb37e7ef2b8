//! Filter registry implementation.

use std::sync::Arc;

use tracing::debug;

use super::PageTemplateFilter;
use crate::domain::{PageTemplateDefinition, PageTemplateFilterContext};

/// Ordered collection of page template filters.
///
/// Filled once at startup, then only read while serving template selection
/// requests. Filters run in registration order.
#[derive(Default, Clone)]
pub struct FilterRegistry {
    filters: Vec<Arc<dyn PageTemplateFilter>>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shared filter instance.
    pub fn register(&mut self, filter: Arc<dyn PageTemplateFilter>) -> &mut Self {
        debug!("Registered page template filter: {}", filter.name());
        self.filters.push(filter);
        self
    }

    /// Append an owned filter instance.
    pub fn register_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: PageTemplateFilter + 'static,
    {
        self.register(Arc::new(filter))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Registered filters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn PageTemplateFilter>> {
        self.filters.iter()
    }

    /// Run every filter in order, each narrowing the previous result.
    pub fn apply(
        &self,
        templates: Vec<PageTemplateDefinition>,
        context: &PageTemplateFilterContext,
    ) -> Vec<PageTemplateDefinition> {
        self.filters.iter().fold(templates, |remaining, filter| {
            let before = remaining.len();
            let remaining = filter.filter(remaining, context);
            debug!(
                "Filter {} on page type {}: {} -> {} templates",
                filter.name(),
                context.page_type,
                before,
                remaining.len()
            );
            remaining
        })
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.filters.iter().map(|filter| filter.name()))
            .finish()
    }
}
