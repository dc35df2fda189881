//! View-model layer between `atelier-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the business logic and domain model for the atelier
//! workspace:
//!
//! - **[`Portfolio`]** — Single owning controller for all navigation state:
//!   [`ingest()`](Portfolio::ingest) applies the curation filter to a fetched
//!   post list, [`render()`](Portfolio::render) derives the view items for
//!   the active filter and keeps the gallery in sync.
//!
//! - **[`Gallery`]** — The lightbox/carousel state machine: an ordered image
//!   list, the active collection label, and a `Closed`/`Open` state with
//!   wraparound index navigation.
//!
//! - **Content derivation** ([`extract`]) — smart cover resolution and
//!   embedded-image extraction over post markup.
//!
//! - **Menu state** ([`menu`]) — pure active-control derivation, recomputed
//!   from scratch on every navigation.
//!
//! All state is owned by one `Portfolio` per UI; nothing here is shared
//! across threads. Consumers fetch on their own tasks and hand the result
//! to the controller on their event loop.

pub mod convert;
pub mod error;
pub mod extract;
pub mod lightbox;
pub mod menu;
pub mod model;
pub mod portfolio;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use lightbox::{Gallery, LightboxState};
pub use menu::MenuEntry;
pub use model::{ALL_WORK_LABEL, Collection, FILTER_ALL, ViewItem, ViewKind};
pub use portfolio::Portfolio;
