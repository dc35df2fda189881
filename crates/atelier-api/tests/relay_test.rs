#![allow(clippy::unwrap_used)]
// Integration tests for `RelayClient` using wiremock.

use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atelier_api::{ContactForm, Error, RelayClient};

fn sample_form() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Booking inquiry".into(),
    }
}

async fn setup() -> (MockServer, RelayClient) {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&format!("{}/api/v1.0/email/send", server.uri())).unwrap();
    let client = RelayClient::with_client(reqwest::Client::new(), endpoint);
    (server, client)
}

#[tokio::test]
async fn test_send_form_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(serde_json::json!({
            "service_id": "service_abc",
            "template_id": "template_xyz",
            "template_params": {
                "from_name": "Ada",
                "reply_to": "ada@example.com",
                "message": "Booking inquiry"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    client
        .send_form("service_abc", "template_xyz", &sample_form())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_form_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The service ID is invalid"))
        .mount(&server)
        .await;

    let result = client
        .send_form("service_bad", "template_xyz", &sample_form())
        .await;

    match result {
        Err(Error::Relay { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "The service ID is invalid");
        }
        other => panic!("expected Relay error, got: {other:?}"),
    }
}

#[test]
fn test_form_completeness() {
    assert!(sample_form().is_complete());

    let mut form = sample_form();
    form.email = "   ".into();
    assert!(!form.is_complete());

    assert!(!ContactForm::default().is_complete());
}
