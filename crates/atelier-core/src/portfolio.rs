// ── Portfolio controller ──
//
// Single owner of all navigation state: the curated collection list, the
// active filter, and the gallery/lightbox. One instance per UI, driven
// entirely from that UI's event loop.

use atelier_api::wp::Post;
use tracing::{debug, warn};

use crate::convert::collection_from_post;
use crate::error::CoreError;
use crate::extract::{gallery_images, smart_cover};
use crate::lightbox::Gallery;
use crate::model::{ALL_WORK_LABEL, Collection, FILTER_ALL, ViewItem, is_curated};

/// The main entry point for consumers.
///
/// Owns the loaded collections and every piece of navigation state derived
/// from them. View items are recomputed fresh on each [`render()`](Self::render)
/// call; nothing is diffed or cached.
#[derive(Debug)]
pub struct Portfolio {
    collections: Vec<Collection>,
    active_filter: String,
    collection_label: String,
    gallery: Gallery,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            active_filter: FILTER_ALL.to_owned(),
            collection_label: ALL_WORK_LABEL.to_owned(),
            gallery: Gallery::default(),
        }
    }
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Fetch the post list and ingest it.
    ///
    /// On failure the collection list is left empty and the error is
    /// returned for logging; consumers render an empty grid, never crash.
    pub async fn load(
        &mut self,
        client: &atelier_api::SiteClient,
        per_page: u32,
    ) -> Result<usize, CoreError> {
        match client.list_posts(per_page).await {
            Ok(posts) => Ok(self.ingest(posts)),
            Err(e) => {
                warn!(error = %e, "portfolio fetch failed");
                self.collections.clear();
                Err(e.into())
            }
        }
    }

    /// Apply the curation filter to a fetched post list and store the
    /// survivors, preserving source order. Returns how many were kept.
    ///
    /// Split out from [`load()`](Self::load) so consumers that fetch on a
    /// background task can hand the result over on their event loop.
    pub fn ingest(&mut self, posts: Vec<Post>) -> usize {
        self.collections = posts
            .into_iter()
            .map(collection_from_post)
            .filter(|c| is_curated(&c.title))
            .collect();
        debug!(count = self.collections.len(), "collections ingested");
        self.collections.len()
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Derive the view items for a filter and update navigation state.
    ///
    /// `"all"` yields one cover card per collection with a resolvable cover
    /// image (the rest are dropped, they never occupy a slot) and empties
    /// the gallery. Any other filter routes to the **first** collection
    /// whose title contains it case-insensitively and yields one photo card
    /// per embedded image, loading the gallery with the same list.
    ///
    /// An empty return means the consumer should show its "no content"
    /// placeholder.
    ///
    /// Substring routing is order-dependent when collection names overlap
    /// (e.g. "Art" and "Artisan"): the first loaded match wins. This
    /// mirrors the site's historical behavior and is intentionally left
    /// as-is.
    pub fn render(&mut self, filter: &str) -> Vec<ViewItem> {
        self.active_filter = filter.to_owned();

        if filter == FILTER_ALL {
            self.collection_label = ALL_WORK_LABEL.to_owned();
            self.gallery.clear();

            return self
                .collections
                .iter()
                .map(|c| ViewItem::cover(c.title.clone(), smart_cover(c)))
                .filter(ViewItem::has_image)
                .collect();
        }

        // The collection label tracks the filter verbatim, found or not.
        self.collection_label = filter.to_owned();

        let needle = filter.to_lowercase();
        let Some(target) = self
            .collections
            .iter()
            .find(|c| c.title.to_lowercase().contains(&needle))
        else {
            debug!(filter, "no collection matched");
            self.gallery.replace(filter, Vec::new());
            return Vec::new();
        };

        let images = gallery_images(&target.content_html);
        let items: Vec<ViewItem> = images
            .iter()
            .map(|src| ViewItem::photo(filter, src.clone()))
            .collect();
        self.gallery.replace(filter, images);
        items
    }

    // ── Navigation state ─────────────────────────────────────────────

    /// The filter the last render ran with.
    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Label for the active collection: `"All Work"` on the cover grid,
    /// the filter string verbatim otherwise.
    pub fn collection_label(&self) -> &str {
        &self.collection_label
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ViewKind;

    fn collection(title: &str, featured: Option<&str>, html: &str) -> Collection {
        Collection {
            title: title.into(),
            link: None,
            content_html: html.into(),
            featured_media: featured.map(str::to_owned),
        }
    }

    /// The two-post fixture from the site: one cover via featured media,
    /// one via embedded content.
    fn portfolio() -> Portfolio {
        let mut p = Portfolio::new();
        p.collections = vec![
            collection("Gastronomy", Some("a.jpg"), ""),
            collection(
                "Exterior",
                None,
                r#"<img src="x1.jpg"><img src="x2.jpg">"#,
            ),
        ];
        p
    }

    #[test]
    fn ingest_applies_the_curation_filter() {
        let posts: Vec<atelier_api::wp::Post> = serde_json::from_value(serde_json::json!([
            { "title": { "rendered": "Hola Mundo" }, "content": { "rendered": "" } },
            { "title": { "rendered": "Gastronomy" }, "content": { "rendered": "" } },
            { "title": { "rendered": "Exterior Detail" }, "content": { "rendered": "" } },
            { "title": { "rendered": "   " }, "content": { "rendered": "" } },
            { "title": { "rendered": "Exterior" }, "content": { "rendered": "" } },
        ]))
        .expect("fixture should deserialize");

        let mut p = Portfolio::new();
        assert_eq!(p.ingest(posts), 2);

        let titles: Vec<&str> = p.collections().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Gastronomy", "Exterior"]);
    }

    #[test]
    fn render_all_emits_one_cover_per_collection() {
        let mut p = portfolio();
        let items = p.render("all");

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.kind == ViewKind::Cover));
        assert_eq!(items[0].title, "Gastronomy");
        assert_eq!(items[0].image.as_deref(), Some("a.jpg"));
        assert_eq!(items[1].title, "Exterior");
        assert_eq!(items[1].image.as_deref(), Some("x1.jpg"));
        assert_eq!(p.collection_label(), "All Work");
        assert!(p.gallery().is_empty());
    }

    #[test]
    fn render_all_drops_covers_without_an_image() {
        let mut p = portfolio();
        p.collections
            .push(collection("Texts", None, "<p>no images</p>"));

        let items = p.render("all");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(ViewItem::has_image));
        assert!(items.iter().all(|i| i.title != "Texts"));
    }

    #[test]
    fn render_collection_emits_photos_in_document_order() {
        let mut p = portfolio();
        let items = p.render("exterior");

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.kind == ViewKind::Photo));
        assert!(items.iter().all(|i| i.title == "exterior"));
        let images: Vec<&str> = items.iter().filter_map(|i| i.image.as_deref()).collect();
        assert_eq!(images, vec!["x1.jpg", "x2.jpg"]);

        // Gallery is seeded with the same list, label is the filter verbatim.
        assert_eq!(p.gallery().images(), ["x1.jpg", "x2.jpg"]);
        assert_eq!(p.gallery().collection_title(), "exterior");
        assert_eq!(p.collection_label(), "exterior");
    }

    #[test]
    fn render_unmatched_filter_is_empty() {
        let mut p = portfolio();
        let items = p.render("portrait");

        assert!(items.is_empty());
        assert!(p.gallery().is_empty());
        assert_eq!(p.collection_label(), "portrait");
    }

    #[test]
    fn routing_is_first_match_by_substring() {
        let mut p = Portfolio::new();
        p.collections = vec![
            collection("Art", None, r#"<img src="art.jpg">"#),
            collection("Artisan", None, r#"<img src="artisan.jpg">"#),
        ];

        // "art" matches both; list order decides.
        let items = p.render("art");
        assert_eq!(items[0].image.as_deref(), Some("art.jpg"));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn render_then_lightbox_end_to_end() {
        let mut p = portfolio();
        p.render("exterior");

        p.gallery_mut().open(0).expect("gallery is non-empty");
        p.gallery_mut().next();
        assert_eq!(p.gallery().current_image(), Some("x2.jpg"));
        assert_eq!(p.gallery().counter_text().as_deref(), Some("02 / 02"));

        // Navigating back to the grid empties the gallery and closes it.
        p.render("all");
        assert!(!p.gallery().is_open());
        assert!(p.gallery().is_empty());
    }
}
