//! Template preview service.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::domain::{
    FilterError, FilterRegistry, PageTemplateDefinition, PageTemplateFilterContext,
};

/// Service for previewing the templates offered for a page type.
pub struct PreviewService {
    registry: FilterRegistry,
    format: OutputFormat,
}

impl PreviewService {
    /// Create a PreviewService with every configured rule registered.
    ///
    /// # Errors
    ///
    /// Returns error if a configured rule cannot be built.
    pub fn new(config: &Config, format: OutputFormat) -> Result<Self, FilterError> {
        let mut registry = FilterRegistry::new();
        registry.add_page_template_filters(&[config.filter_module()])?;
        info!("Registered {} page template filters", registry.len());

        Ok(Self { registry, format })
    }

    /// Filter the candidate templates and write the survivors to stdout.
    ///
    /// Candidates come from `identifiers`, or from stdin when it is empty.
    pub fn run(
        &self,
        context: &PageTemplateFilterContext,
        identifiers: Vec<String>,
    ) -> Result<()> {
        let templates = if identifiers.is_empty() {
            read_templates(io::stdin().lock())?
        } else {
            identifiers
                .into_iter()
                .map(PageTemplateDefinition::new)
                .collect()
        };
        debug!("Received {} candidate templates", templates.len());

        let offered = self.preview(templates, context);
        let output = self.render(&offered)?;

        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        write!(stdout, "{}", output)?;

        Ok(())
    }

    /// Templates offered for the page described by `context`.
    pub fn preview(
        &self,
        templates: Vec<PageTemplateDefinition>,
        context: &PageTemplateFilterContext,
    ) -> Vec<PageTemplateDefinition> {
        debug!(
            "Previewing page type {} (culture={:?}, parent={:?})",
            context.page_type, context.culture, context.parent_page_type
        );
        self.registry.apply(templates, context)
    }

    /// Render templates in the configured output format.
    pub fn render(&self, templates: &[PageTemplateDefinition]) -> Result<String, FilterError> {
        match self.format {
            OutputFormat::Text => Ok(templates
                .iter()
                .map(|t| format!("{}\n", t.identifier))
                .collect()),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(templates)?)),
        }
    }
}

/// Read template identifiers, one per line. Blank lines are skipped.
pub fn read_templates(reader: impl BufRead) -> Result<Vec<PageTemplateDefinition>, FilterError> {
    let mut templates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let identifier = line.trim();
        if !identifier.is_empty() {
            templates.push(PageTemplateDefinition::new(identifier));
        }
    }
    Ok(templates)
}
