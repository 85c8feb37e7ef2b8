//! page-template-filters: page type based page template filtering
//!
//! A CLI front end that previews which page templates a page builder offers
//! for a page type under the configured page type rules.

use anyhow::Result;
use clap::Parser;

use page_template_filters::cli::{Cli, Commands};
use page_template_filters::config::{self, ConfigService};
use page_template_filters::domain::logger;
use page_template_filters::service::PreviewService;
use page_template_filters::PageTemplateFilterContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Commands that must work without a loadable configuration
    match &cli.command {
        Commands::Init { path } => {
            let config_path = path
                .clone()
                .or_else(|| cli.config.clone())
                .unwrap_or_else(ConfigService::default_path);
            ConfigService::generate_at(&config_path)?;
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
            return Ok(());
        }
        Commands::Version => {
            println!("page-template-filters {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Preview { .. } | Commands::Check => {}
    }

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        logger::init(&config)?;
    }

    // Execute command
    match cli.command {
        Commands::Preview {
            page_type,
            culture,
            parent_page_type,
            format,
            templates,
        } => {
            let service = PreviewService::new(&config, format)?;
            let mut context = PageTemplateFilterContext::new(page_type);
            if let Some(culture) = culture {
                context = context.with_culture(culture);
            }
            if let Some(parent) = parent_page_type {
                context = context.with_parent_page_type(parent);
            }
            service.run(&context, templates)?;
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!(
                    "Configuration is valid ({} page type rules).",
                    config.rules.len()
                );
            }
        }
        Commands::Init { .. } | Commands::Version => {}
    }

    Ok(())
}
