//! Clap derive structures for the `atelier` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// atelier -- browse a photography portfolio from the command line
#[derive(Debug, Parser)]
#[command(
    name = "atelier",
    version,
    about = "Browse a WordPress.com photography portfolio from the command line",
    long_about = "Fetches a portfolio site's collections from the WordPress.com\n\
        public API and renders covers, galleries, and the contact form.\n\
        For the interactive browser, run `atelier-tui`.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Site domain (overrides config), e.g. example.wordpress.com
    #[arg(long, short = 's', env = "ATELIER_SITE__DOMAIN", global = true)]
    pub site: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the portfolio's collections with their cover images
    Collections(CollectionsArgs),

    /// Show the photos of one collection
    Gallery(GalleryArgs),

    /// Send a message through the contact form relay
    Contact(ContactArgs),

    /// Show the resolved configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct CollectionsArgs {
    /// Include collections whose cover could not be resolved
    #[arg(long)]
    pub include_coverless: bool,
}

#[derive(Debug, Args)]
pub struct GalleryArgs {
    /// Collection name (case-insensitive substring, first match wins)
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Reply-to email address
    #[arg(long)]
    pub email: String,

    /// Message body; reads stdin when omitted
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Print the config file path instead of the contents
    #[arg(long)]
    pub path: bool,
}
