//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - status / test-connection: gateway health
//! - tools / categories / show: the tool catalog
//! - exec: run one tool by hand
//! - docs: built-in documentation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ghl-console - browse and test a GoHighLevel MCP gateway
#[derive(Parser, Debug)]
#[command(name = "ghl-console")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Gateway base URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Private Integrations API key
    #[arg(long, global = true, env = "GHL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// GoHighLevel location id
    #[arg(long, global = true, env = "GHL_LOCATION_ID")]
    pub location_id: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show gateway health and tool count
    Status,

    /// List tools grouped by category
    Tools {
        /// Only show this category (label or slug, e.g. "invoices")
        #[arg(short = 'k', long)]
        category: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Show tool descriptions
        #[arg(short, long)]
        descriptions: bool,
    },

    /// Show category counts only
    Categories,

    /// Show one tool's description and input schema
    Show {
        /// Exact tool name
        name: String,
    },

    /// Check credentials against the gateway
    TestConnection,

    /// Execute a tool with JSON arguments
    Exec {
        /// Tool name
        tool: String,

        /// Arguments as a JSON string
        #[arg(short, long, conflicts_with = "args_file")]
        args: Option<String>,

        /// Read arguments from a JSON file
        #[arg(short = 'f', long)]
        args_file: Option<PathBuf>,
    },

    /// Read built-in documentation
    Docs {
        /// Section (overview, api-reference, authentication, examples, deployment, troubleshooting)
        section: Option<String>,

        /// List available sections
        #[arg(short, long)]
        list: bool,
    },
}
