// A photo collection, derived from one published post.

use serde::Serialize;

/// Title markers that identify non-portfolio posts (starter content and
/// detail sub-pages). Matched lower-cased, as substrings.
const EXCLUDED_TITLE_MARKERS: &[&str] = &["hola mundo", "detail"];

/// One photo collection.
///
/// Titles double as routing keys: navigation matches them by
/// case-insensitive substring, first match wins. They are unique enough in
/// practice but nothing enforces it.
#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    /// Display name and routing key.
    pub title: String,
    /// Canonical public URL of the source post.
    pub link: Option<String>,
    /// Raw post markup; the gallery photos are embedded in here.
    pub content_html: String,
    /// Explicitly attached cover image, when the source post has one.
    pub featured_media: Option<String>,
}

/// Whether a post title belongs in the portfolio.
///
/// Drops starter posts, detail sub-pages, and untitled posts. Everything
/// else passes through in source order.
pub fn is_curated(title: &str) -> bool {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_lowercase();
    !EXCLUDED_TITLE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curation_drops_starter_posts() {
        assert!(!is_curated("Hola Mundo"));
        assert!(!is_curated("hola mundo!"));
        assert!(!is_curated("Gastronomy Detail"));
        assert!(!is_curated("DETAIL shots"));
    }

    #[test]
    fn curation_drops_blank_titles() {
        assert!(!is_curated(""));
        assert!(!is_curated("   "));
    }

    #[test]
    fn curation_keeps_portfolio_titles() {
        assert!(is_curated("Gastronomy"));
        assert!(is_curated("Exterior"));
        assert!(is_curated("Editorial Portraits"));
    }
}
