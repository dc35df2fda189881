// View items — what a render pass hands to the UI.

use serde::Serialize;

/// The pseudo-filter that selects the cover grid instead of one collection.
pub const FILTER_ALL: &str = "all";

/// Collection label shown while the cover grid is active.
pub const ALL_WORK_LABEL: &str = "All Work";

/// What a card represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// A collection cover on the "all" grid; selecting it opens the collection.
    Cover,
    /// One photo inside an open collection; selecting it opens the lightbox.
    Photo,
}

/// One renderable card.
///
/// Recomputed fresh on every navigation and never mutated; the previous
/// batch is simply dropped. Covers that failed image resolution are
/// filtered out before the UI ever sees them, so `image` is present on
/// everything a consumer receives.
#[derive(Debug, Clone, Serialize)]
pub struct ViewItem {
    pub kind: ViewKind,
    /// Collection name, for covers and photos alike.
    pub title: String,
    /// Resolved image URL, if one was found.
    pub image: Option<String>,
}

impl ViewItem {
    pub fn cover(title: impl Into<String>, image: Option<String>) -> Self {
        Self {
            kind: ViewKind::Cover,
            title: title.into(),
            image,
        }
    }

    pub fn photo(title: impl Into<String>, image: String) -> Self {
        Self {
            kind: ViewKind::Photo,
            title: title.into(),
            image: Some(image),
        }
    }

    /// Whether an image URL was resolved for this card.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
