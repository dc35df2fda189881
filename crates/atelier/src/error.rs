//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use atelier_config::ConfigError;
use atelier_core::CoreError;

/// Exit codes per the CLI conventions.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Content ──────────────────────────────────────────────────────
    #[error("Could not load the portfolio from {site}")]
    #[diagnostic(
        code(atelier::fetch_failed),
        help(
            "Check the site domain and your network connection.\n\
             Cause: {reason}\n\
             Try: atelier config"
        )
    )]
    FetchFailed { site: String, reason: String },

    #[error("No collection matches '{filter}'")]
    #[diagnostic(
        code(atelier::not_found),
        help("Run: atelier collections to see what's available")
    )]
    CollectionNotFound { filter: String },

    // ── Contact ──────────────────────────────────────────────────────
    #[error("Message could not be sent")]
    #[diagnostic(
        code(atelier::relay_failed),
        help("The relay rejected the submission: {message}\nYour message was not delivered; try again.")
    )]
    RelayFailed { message: String },

    #[error("The contact form is incomplete")]
    #[diagnostic(
        code(atelier::incomplete_form),
        help("--name, --email, and a message body are all required.")
    )]
    IncompleteForm,

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(atelier::config))]
    Config(Box<figment::Error>),

    #[error("Configuration error: {message}")]
    #[diagnostic(code(atelier::config))]
    ConfigInvalid { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(atelier::internal))]
    Internal { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(atelier::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::ConfigInvalid {
            message: err.to_string(),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FetchFailed { .. } => exit_code::CONNECTION,
            Self::CollectionNotFound { .. } => exit_code::NOT_FOUND,
            Self::IncompleteForm => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

/// Build the CLI mapping with the site domain for context; `CoreError`
/// deliberately doesn't carry it.
pub fn from_core(err: CoreError, site: &str) -> CliError {
    match err {
        CoreError::FetchFailed { reason } => CliError::FetchFailed {
            site: site.to_owned(),
            reason,
        },
        CoreError::CollectionNotFound { filter } => CliError::CollectionNotFound { filter },
        CoreError::RelayFailed { message } => CliError::RelayFailed { message },
        CoreError::IncompleteForm => CliError::IncompleteForm,
        CoreError::Config { message } => CliError::ConfigInvalid { message },
        // Lightbox states never surface from the one-shot CLI commands.
        CoreError::EmptyGallery | CoreError::IndexOutOfRange { .. } => CliError::Internal {
            message: err.to_string(),
        },
    }
}
