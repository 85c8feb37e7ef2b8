//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Template and filter context types
//! - Filter traits, the configurable page type filter and the filter registry
//! - Startup registration of filter modules
//! - Logger with rotation

mod error;
pub mod filters;
pub mod logger;
pub mod registration;
mod types;

pub use error::FilterError;
pub use filters::{
    matches_page_type_prefix, FilterRegistry, PageTemplateFilter, PageTypeFilter,
    PageTypeTemplateFilter,
};
pub use registration::{register_filters, FilterModule};
pub use types::{PageTemplateDefinition, PageTemplateFilterContext};
