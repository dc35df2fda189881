#![allow(clippy::unwrap_used)]
// Integration tests for `SiteClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atelier_api::{Error, SiteClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SiteClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/", server.uri())).unwrap();
    let client = SiteClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Posts tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_posts() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "id": 101,
            "title": { "rendered": "Gastronomy" },
            "content": { "rendered": "<p><img src=\"https://files.example/a.jpg\"></p>" },
            "link": "https://example.wordpress.com/gastronomy",
            "_embedded": {
                "wp:featuredmedia": [
                    { "source_url": "https://files.example/cover.jpg" }
                ]
            }
        },
        {
            "id": 102,
            "title": { "rendered": "Exterior" },
            "content": { "rendered": "" },
            "link": "https://example.wordpress.com/exterior"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let posts = client.list_posts(100).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title.rendered, "Gastronomy");
    assert_eq!(
        posts[0].featured_media_url(),
        Some("https://files.example/cover.jpg")
    );
    assert_eq!(posts[1].title.rendered, "Exterior");
    assert_eq!(posts[1].featured_media_url(), None);
    assert_eq!(
        posts[1].link.as_deref(),
        Some("https://example.wordpress.com/exterior")
    );
}

#[tokio::test]
async fn test_per_page_is_capped_at_api_maximum() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let posts = client.list_posts(500).await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_list_posts_api_error() {
    let (server, client) = setup().await;

    let body = json!({
        "code": "rest_invalid_param",
        "message": "Invalid parameter(s): per_page",
        "data": { "status": 400 }
    });

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&body))
        .mount(&server)
        .await;

    let result = client.list_posts(100).await;

    match result {
        Err(Error::Api {
            status,
            message,
            code,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid parameter(s): per_page");
            assert_eq!(code.as_deref(), Some("rest_invalid_param"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_posts_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown site"))
        .mount(&server)
        .await;

    let err = client.list_posts(100).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_posts_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.list_posts(100).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unknown_post_fields_are_tolerated() {
    let (server, client) = setup().await;

    // Real responses carry dozens of fields the pipeline never reads.
    let body = json!([{
        "id": 7,
        "date": "2024-06-15T10:30:00",
        "slug": "gastronomy",
        "status": "publish",
        "sticky": false,
        "format": "standard",
        "title": { "rendered": "Gastronomy" },
        "content": { "rendered": "", "protected": false },
        "link": "https://example.wordpress.com/gastronomy"
    }]);

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let posts = client.list_posts(100).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert!(posts[0].extra.contains_key("slug"));
}
