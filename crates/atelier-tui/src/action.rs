//! All possible UI actions. Actions are the sole mechanism for state mutation.

use atelier_api::ContactForm;
use atelier_api::wp::Post;
use atelier_core::{MenuEntry, ViewItem};

use crate::screen::ScreenId;

/// Notification severity level.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

#[allow(dead_code)]
impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// One render pass of the portfolio, pushed to the grid screen after every
/// navigation.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    pub items: Vec<ViewItem>,
    pub menu: Vec<MenuEntry>,
    pub label: String,
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    /// Re-render the portfolio with a filter ("all" or a collection name).
    ApplyFilter(String),
    /// Refetch the post list from the site.
    Reload,

    // ── Data events (from the fetch bridge) ───────────────────────
    PostsLoaded(Vec<Post>),
    FetchFailed(String),
    GridUpdated(GridSnapshot),

    // ── Lightbox ──────────────────────────────────────────────────
    OpenLightbox(usize),
    CloseLightbox,
    NextImage,
    PreviousImage,

    // ── Contact form ──────────────────────────────────────────────
    SubmitContact(ContactForm),
    ContactSent,
    ContactFailed(String),
    /// Fires 5s after a successful send to restore the submit control.
    RestoreSubmit,

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notification),
}
