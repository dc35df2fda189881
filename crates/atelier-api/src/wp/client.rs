// Hand-crafted async HTTP client for the WordPress.com public REST API (wp/v2).
//
// Base path: /wp/v2/sites/<site-domain>/
// Auth: none — public read-only endpoints.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::models::Post;
use crate::Error;

/// Public API host for WordPress.com-hosted sites.
const PUBLIC_API_BASE: &str = "https://public-api.wordpress.com/wp/v2/sites/";

// ── Error response shape from the wp/v2 API ──────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for one WordPress.com site's public content.
///
/// Read-only JSON REST under `wp/v2/sites/<site-domain>/`.
pub struct SiteClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SiteClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for the given site domain (e.g. `"example.wordpress.com"`).
    pub fn new(site_domain: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Url::parse(PUBLIC_API_BASE)?.join(&format!("{site_domain}/"))?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` with an explicit base URL.
    ///
    /// The base must end with a trailing slash so relative joins work.
    /// Used by tests to point at a mock server.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"posts"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining `posts` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
                code: err.code,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                code: None,
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Fetch the site's posts, embed-expanded, newest first (source order).
    ///
    /// One request, no pagination: `per_page` is capped at 100 by the API,
    /// which is the whole portfolio for the sites this serves.
    pub async fn list_posts(&self, per_page: u32) -> Result<Vec<Post>, Error> {
        self.get_with_params(
            "posts",
            &[
                ("_embed", String::new()),
                ("per_page", per_page.min(100).to_string()),
            ],
        )
        .await
    }
}
