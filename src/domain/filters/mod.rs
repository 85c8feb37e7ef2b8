//! Page template filters and the registry that runs them.

mod configured_filter;
mod filter_trait;
mod page_type_filter;
mod registry;

pub use configured_filter::PageTypeFilter;
pub use filter_trait::PageTemplateFilter;
pub use page_type_filter::{matches_page_type_prefix, PageTypeTemplateFilter};
pub(crate) use page_type_filter::eq_ignore_case;
pub use registry::FilterRegistry;
