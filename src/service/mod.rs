//! Service layer containing business logic orchestration.

mod preview_service;

pub use preview_service::{read_templates, PreviewService};
