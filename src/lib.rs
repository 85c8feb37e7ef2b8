//! page-template-filters: page type based page template filtering
//!
//! Restricts which page templates a page builder offers for a given page type.
//! Filters implement [`PageTemplateFilter`]; the common case of tying a page
//! type to the templates named `{PageType}_{Variant}` is covered by
//! [`PageTypeTemplateFilter`]. Filters are collected in a [`FilterRegistry`],
//! either one by one or from [`FilterModule`]s via [`register_filters`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod service;

pub use domain::{
    matches_page_type_prefix, register_filters, FilterError, FilterModule, FilterRegistry,
    PageTemplateDefinition, PageTemplateFilter, PageTemplateFilterContext, PageTypeFilter,
    PageTypeTemplateFilter,
};
