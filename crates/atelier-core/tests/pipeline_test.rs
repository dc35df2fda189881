#![allow(clippy::unwrap_used)]
// End-to-end view pipeline tests over the public API: wire posts in,
// rendered cards and gallery state out.

use pretty_assertions::assert_eq;
use serde_json::json;

use atelier_core::{Portfolio, ViewKind};

fn posts(value: serde_json::Value) -> Vec<atelier_api::wp::Post> {
    serde_json::from_value(value).unwrap()
}

fn loaded_portfolio() -> Portfolio {
    let mut portfolio = Portfolio::new();
    portfolio.ingest(posts(json!([
        {
            "title": { "rendered": "Hola mundo!" },
            "content": { "rendered": "<img src=\"starter.jpg\">" }
        },
        {
            "title": { "rendered": "Gastronomy" },
            "content": { "rendered": "<p>menu shoot</p>" },
            "link": "https://example.wordpress.com/gastronomy",
            "_embedded": {
                "wp:featuredmedia": [ { "source_url": "https://files.example/g-cover.jpg" } ]
            }
        },
        {
            "title": { "rendered": "Exterior" },
            "content": { "rendered": "\
                <figure><img src=\"https://files.example/x1.jpg\"></figure>\
                <img src=\"https://s.w.org/images/core/emoji/sun.svg\">\
                <figure><img src=\"https://files.example/x2.jpg\"></figure>" }
        }
    ])));
    portfolio
}

#[test]
fn curated_posts_never_surface_anywhere() {
    let mut portfolio = loaded_portfolio();

    let covers = portfolio.render("all");
    assert!(covers.iter().all(|i| i.title != "Hola mundo!"));

    // Even filtering for the starter post directly finds nothing.
    let items = portfolio.render("hola mundo");
    assert!(items.is_empty());
}

#[test]
fn cover_grid_then_collection_then_lightbox() {
    let mut portfolio = loaded_portfolio();

    let covers = portfolio.render("all");
    let titles: Vec<&str> = covers.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Gastronomy", "Exterior"]);
    assert!(covers.iter().all(|i| i.kind == ViewKind::Cover));
    assert_eq!(portfolio.collection_label(), "All Work");

    // Into a collection: platform assets are filtered, order preserved.
    let photos = portfolio.render("exterior");
    let images: Vec<&str> = photos.iter().filter_map(|i| i.image.as_deref()).collect();
    assert_eq!(
        images,
        vec![
            "https://files.example/x1.jpg",
            "https://files.example/x2.jpg"
        ]
    );
    assert_eq!(portfolio.gallery().collection_title(), "exterior");

    // Lightbox: open at the second photo, wrap forward to the first.
    portfolio.gallery_mut().open(1).unwrap();
    assert_eq!(
        portfolio.gallery().counter_text().as_deref(),
        Some("02 / 02")
    );
    portfolio.gallery_mut().next();
    assert_eq!(
        portfolio.gallery().current_image(),
        Some("https://files.example/x1.jpg")
    );
}

#[test]
fn unknown_collection_renders_the_placeholder_path() {
    let mut portfolio = loaded_portfolio();
    let items = portfolio.render("Portrait");
    assert!(items.is_empty());
    // An empty gallery refuses to open the lightbox.
    assert!(portfolio.gallery_mut().open(0).is_err());
}
