// Async client for the form-relay service behind the contact page.
//
// One endpoint, fire-and-forget: the relay accepts a service id, a template
// id, and the form fields, and delivers the message by email. No auth beyond
// the ids themselves; the response body is plain text.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::Error;

/// A filled-in contact form, ready for submission.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// A form is submittable once every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

// ── Request body shape expected by the relay ─────────────────────────

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the email form-relay service.
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RelayClient {
    /// Build a client posting to the given relay endpoint.
    pub fn new(endpoint: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let endpoint = Url::parse(endpoint)?;
        Ok(Self { http, endpoint })
    }

    /// Wrap an existing `reqwest::Client` (used by tests).
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Submit a contact form through the relay.
    ///
    /// Succeeds or fails once; the caller decides whether to surface an
    /// inline error and keep the form populated. Never retried here.
    pub async fn send_form(
        &self,
        service_id: &str,
        template_id: &str,
        form: &ContactForm,
    ) -> Result<(), Error> {
        debug!("POST {} service={service_id}", self.endpoint);

        let body = SendRequest {
            service_id,
            template_id,
            template_params: TemplateParams {
                from_name: &form.name,
                reply_to: &form.email,
                message: &form.message,
            },
        };

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let raw = resp.text().await.unwrap_or_default();
            Err(Error::Relay {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            })
        }
    }
}
