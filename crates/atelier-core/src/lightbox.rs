// Gallery and lightbox state machine.
//
// The gallery holds the image list for the currently open collection; the
// lightbox is a Closed/Open state over it with wraparound index stepping.
// Invariant: while Open, `0 <= index < images.len()` and images is
// non-empty. Opening over an empty gallery is rejected, not undefined.

use crate::error::CoreError;

/// Lightbox visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Image list and lightbox for the active collection.
///
/// Replaced wholesale on every collection navigation; empty while the
/// cover grid is showing.
#[derive(Debug, Default)]
pub struct Gallery {
    images: Vec<String>,
    collection_title: String,
    state: LightboxState,
}

impl Gallery {
    // ── Content ──────────────────────────────────────────────────────

    /// Swap in the image list for a newly opened collection.
    /// Any open lightbox is closed; the old list is discarded.
    pub fn replace(&mut self, collection_title: impl Into<String>, images: Vec<String>) {
        self.images = images;
        self.collection_title = collection_title.into();
        self.state = LightboxState::Closed;
    }

    /// Drop the image list (cover grid active).
    pub fn clear(&mut self) {
        self.images.clear();
        self.collection_title.clear();
        self.state = LightboxState::Closed;
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Display name of the collection the gallery belongs to.
    pub fn collection_title(&self) -> &str {
        &self.collection_title
    }

    // ── Lightbox transitions ─────────────────────────────────────────

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Open the lightbox at `index`. Already open: resets to `index`.
    pub fn open(&mut self, index: usize) -> Result<(), CoreError> {
        if self.images.is_empty() {
            return Err(CoreError::EmptyGallery);
        }
        if index >= self.images.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                total: self.images.len(),
            });
        }
        self.state = LightboxState::Open { index };
        Ok(())
    }

    /// Close the lightbox. No-op while closed.
    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Step to the next image, wrapping from the last back to the first.
    /// No-op while closed.
    pub fn next(&mut self) {
        if let LightboxState::Open { index } = self.state {
            let next = if index + 1 < self.images.len() {
                index + 1
            } else {
                0
            };
            self.state = LightboxState::Open { index: next };
        }
    }

    /// Step to the previous image, wrapping from the first to the last.
    /// No-op while closed.
    pub fn previous(&mut self) {
        if let LightboxState::Open { index } = self.state {
            let prev = if index > 0 {
                index - 1
            } else {
                self.images.len() - 1
            };
            self.state = LightboxState::Open { index: prev };
        }
    }

    // ── Display state ────────────────────────────────────────────────

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// URL of the image the open lightbox is showing.
    pub fn current_image(&self) -> Option<&str> {
        self.current_index()
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    /// Position counter, two-digit zero-padded: `"03 / 12"`.
    pub fn counter_text(&self) -> Option<String> {
        self.current_index()
            .map(|i| format!("{:02} / {:02}", i + 1, self.images.len()))
    }

    /// Lightbox caption: brand string plus the collection label.
    pub fn caption(&self, brand: &str) -> String {
        format!("{brand} — {} Collection", self.collection_title)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn gallery(n: usize) -> Gallery {
        let mut g = Gallery::default();
        g.replace("Exterior", (0..n).map(|i| format!("img{i}.jpg")).collect());
        g
    }

    #[test]
    fn open_rejected_on_empty_gallery() {
        let mut g = Gallery::default();
        assert!(matches!(g.open(0), Err(CoreError::EmptyGallery)));
        assert!(!g.is_open());
    }

    #[test]
    fn open_rejected_out_of_range() {
        let mut g = gallery(3);
        assert!(matches!(
            g.open(3),
            Err(CoreError::IndexOutOfRange { index: 3, total: 3 })
        ));
    }

    #[test]
    fn open_while_open_resets_the_index() {
        let mut g = gallery(5);
        g.open(1).expect("in range");
        g.open(4).expect("in range");
        assert_eq!(g.current_index(), Some(4));
    }

    #[test]
    fn next_wraps_back_to_start_after_full_cycle() {
        let n = 7;
        let mut g = gallery(n);
        g.open(0).expect("in range");
        for _ in 0..n {
            g.next();
        }
        assert_eq!(g.current_index(), Some(0));
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut g = gallery(4);
        g.open(0).expect("in range");
        g.previous();
        assert_eq!(g.current_index(), Some(3));
    }

    #[test]
    fn navigation_is_a_noop_while_closed() {
        let mut g = gallery(4);
        g.next();
        g.previous();
        assert_eq!(g.state(), LightboxState::Closed);
        assert_eq!(g.current_image(), None);
    }

    #[test]
    fn counter_is_zero_padded() {
        let mut g = gallery(12);
        g.open(2).expect("in range");
        assert_eq!(g.counter_text().as_deref(), Some("03 / 12"));
    }

    #[test]
    fn caption_combines_brand_and_collection() {
        let g = gallery(1);
        assert_eq!(
            g.caption("Miranda's Archive"),
            "Miranda's Archive — Exterior Collection"
        );
    }

    #[test]
    fn replace_closes_an_open_lightbox() {
        let mut g = gallery(3);
        g.open(2).expect("in range");
        g.replace("Gastronomy", vec!["a.jpg".into()]);
        assert!(!g.is_open());
        assert_eq!(g.collection_title(), "Gastronomy");
    }
}
