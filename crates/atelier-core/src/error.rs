// ── Core error types ──
//
// User-facing errors from atelier-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<atelier_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Content errors ───────────────────────────────────────────────
    #[error("Could not load the portfolio: {reason}")]
    FetchFailed { reason: String },

    #[error("No collection matches '{filter}'")]
    CollectionNotFound { filter: String },

    // ── Lightbox errors ──────────────────────────────────────────────
    #[error("Cannot open the lightbox: the gallery is empty")]
    EmptyGallery,

    #[error("Image index {index} is out of range (gallery has {total})")]
    IndexOutOfRange { index: usize, total: usize },

    // ── Contact errors ───────────────────────────────────────────────
    #[error("Message could not be sent: {message}")]
    RelayFailed { message: String },

    #[error("The contact form is incomplete")]
    IncompleteForm,

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<atelier_api::Error> for CoreError {
    fn from(err: atelier_api::Error) -> Self {
        match err {
            atelier_api::Error::Relay { message, .. } => CoreError::RelayFailed { message },
            other => CoreError::FetchFailed {
                reason: other.to_string(),
            },
        }
    }
}
