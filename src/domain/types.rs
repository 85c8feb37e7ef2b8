//! Core domain types for page template filtering.

use serde::{Deserialize, Serialize};

/// A selectable page template, as supplied by the host page builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplateDefinition {
    /// Template identifier, e.g. `Sandbox.HomePage_Default`
    pub identifier: String,

    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional description shown in the template picker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageTemplateDefinition {
    /// Create a definition with only an identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: None,
            description: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Per-request context describing the page being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplateFilterContext {
    /// Page type class name, e.g. `Sandbox.HomePage`
    pub page_type: String,

    /// Culture code of the page, if known
    #[serde(default)]
    pub culture: Option<String>,

    /// Page type of the parent page, if any
    #[serde(default)]
    pub parent_page_type: Option<String>,
}

impl PageTemplateFilterContext {
    /// Create a context for the given page type.
    pub fn new(page_type: impl Into<String>) -> Self {
        Self {
            page_type: page_type.into(),
            culture: None,
            parent_page_type: None,
        }
    }

    /// Set the culture code, e.g. `en-US`.
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Set the page type of the parent page.
    pub fn with_parent_page_type(mut self, parent: impl Into<String>) -> Self {
        self.parent_page_type = Some(parent.into());
        self
    }
}
