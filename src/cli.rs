//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Page type based page template filtering
#[derive(Parser)]
#[command(
    name = "page-template-filters",
    version,
    about = "Page type based page template filtering",
    long_about = "Previews which page templates a page builder offers for a page type \
                  under the page type rules declared in the configuration file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Output format for previewed templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One template identifier per line (default)
    #[default]
    Text,
    /// JSON array of template definitions
    Json,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the templates offered for a page type (alias: run)
    #[command(alias = "run")]
    Preview {
        /// Page type class name of the edited page
        #[arg(long, short = 't')]
        page_type: String,

        /// Culture code of the edited page
        #[arg(long)]
        culture: Option<String>,

        /// Page type of the parent page
        #[arg(long)]
        parent_page_type: Option<String>,

        /// Output format
        #[arg(long, short = 'f', default_value = "text")]
        format: OutputFormat,

        /// Candidate template identifiers (read from stdin, one per line, when omitted)
        templates: Vec<String>,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}
