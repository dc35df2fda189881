//! WordPress.com public content API surface.

mod client;
mod models;

pub use client::SiteClient;
pub use models::{Embedded, FeaturedMedia, Post, Rendered};
