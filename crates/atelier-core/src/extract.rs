// Image extraction over embedded post markup.
//
// Posts carry their photos as `<img>` elements inside `content.rendered`.
// Parsing is lenient: anything that fails to parse as markup simply yields
// zero images, never an error.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::model::Collection;

/// Asset-host marker for first-party decoration (emoji, badges) that the
/// platform injects into post markup. Anything from there is not a photo.
const ASSET_HOST_MARKER: &str = "s.w.org";

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("static selector should parse"));

/// URL of the first embedded image, in document order.
pub fn first_image(html: &str) -> Option<String> {
    let doc = Html::parse_fragment(html);
    doc.select(&IMG_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .find(|src| !src.is_empty())
        .map(str::to_owned)
}

/// Every embedded photo URL, in document order.
///
/// Skips empty `src` attributes and anything served from the platform's
/// asset host.
pub fn gallery_images(html: &str) -> Vec<String> {
    let doc = Html::parse_fragment(html);
    doc.select(&IMG_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| !src.is_empty() && !src.contains(ASSET_HOST_MARKER))
        .map(str::to_owned)
        .collect()
}

/// Resolve a collection's cover image.
///
/// Prefers the explicitly attached featured media; falls back to the first
/// embedded image in the content. `None` means the collection has no usable
/// cover and is dropped from the grid.
pub fn smart_cover(collection: &Collection) -> Option<String> {
    if let Some(url) = &collection.featured_media {
        return Some(url.clone());
    }
    first_image(&collection.content_html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn collection(featured: Option<&str>, html: &str) -> Collection {
        Collection {
            title: "Test".into(),
            link: None,
            content_html: html.into(),
            featured_media: featured.map(str::to_owned),
        }
    }

    #[test]
    fn first_image_in_document_order() {
        let html = r#"<p>intro</p><img src="a.jpg"><figure><img src="b.jpg"></figure>"#;
        assert_eq!(first_image(html), Some("a.jpg".to_owned()));
    }

    #[test]
    fn first_image_skips_srcless_elements() {
        let html = r#"<img data-lazy="x.jpg"><img src=""><img src="real.jpg">"#;
        assert_eq!(first_image(html), Some("real.jpg".to_owned()));
    }

    #[test]
    fn gallery_preserves_document_order() {
        let html = r#"
            <figure><img src="https://files.example/x1.jpg"></figure>
            <p>caption</p>
            <figure><img src="https://files.example/x2.jpg"></figure>
            <img src="https://files.example/x3.jpg">
        "#;
        assert_eq!(
            gallery_images(html),
            vec![
                "https://files.example/x1.jpg",
                "https://files.example/x2.jpg",
                "https://files.example/x3.jpg",
            ]
        );
    }

    #[test]
    fn gallery_excludes_platform_assets() {
        let html = r#"
            <img src="https://files.example/photo.jpg">
            <img src="https://s.w.org/images/core/emoji/wink.svg">
        "#;
        assert_eq!(gallery_images(html), vec!["https://files.example/photo.jpg"]);
    }

    #[test]
    fn malformed_markup_yields_nothing() {
        assert!(gallery_images("<<<<>>>> <img not really").is_empty());
        assert_eq!(first_image("<div><p>no images here"), None);
        assert!(gallery_images("").is_empty());
    }

    #[test]
    fn cover_prefers_featured_media() {
        let c = collection(Some("cover.jpg"), r#"<img src="inline.jpg">"#);
        assert_eq!(smart_cover(&c), Some("cover.jpg".to_owned()));
    }

    #[test]
    fn cover_falls_back_to_first_embedded_image() {
        let c = collection(None, r#"<p></p><img src="inline.jpg">"#);
        assert_eq!(smart_cover(&c), Some("inline.jpg".to_owned()));
    }

    #[test]
    fn cover_resolves_to_none_without_any_image() {
        let c = collection(None, "<p>text only</p>");
        assert_eq!(smart_cover(&c), None);
    }
}
