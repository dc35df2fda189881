// WordPress.com public API response types
//
// Models for the `wp/v2` posts endpoint. Fields use `#[serde(default)]`
// liberally because the API omits fields depending on post type, embed
// expansion, and site plan.

use serde::Deserialize;

// ── Post ─────────────────────────────────────────────────────────────

/// A post object from `wp/v2/sites/<site>/posts`.
///
/// A post can carry 40+ fields. We model the ones the portfolio pipeline
/// needs explicitly; everything else lands in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    /// Canonical public URL of the post.
    #[serde(default)]
    pub link: Option<String>,
    /// Populated only when the request was made with `_embed`.
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Post {
    /// The featured-media URL, if the post has one attached and the
    /// response was embed-expanded.
    pub fn featured_media_url(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .featured_media
            .first()?
            .source_url
            .as_deref()
    }
}

/// The `{ "rendered": "..." }` wrapper used for title and content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

// ── Embeds ───────────────────────────────────────────────────────────

/// The `_embedded` expansion block.
#[derive(Debug, Clone, Deserialize)]
pub struct Embedded {
    #[serde(default, rename = "wp:featuredmedia")]
    pub featured_media: Vec<FeaturedMedia>,
}

/// One embedded media object. Only the source URL matters here; failed
/// embeds come back as `{ "code": ... }` stubs, so every field defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedMedia {
    #[serde(default)]
    pub source_url: Option<String>,
}
