//! HTTP transport adapter

use crate::{EcocashError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Header carrying the configured API key secret
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Thin adapter over [`reqwest::Client`] that performs exactly one POST
/// per call and translates the outcome into the error taxonomy.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// POST a JSON body and classify the result.
    ///
    /// A transport-level failure (DNS, connect, TLS, timeout) yields
    /// [`EcocashError::Network`] so callers can tell it apart from an
    /// HTTP-level failure. A decoded JSON body with status < 400 is
    /// returned verbatim; everything else yields
    /// [`EcocashError::Protocol`] carrying the status code. Redirects are
    /// followed by reqwest's default policy.
    pub async fn post(
        &self,
        url: &str,
        api_key: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<Value> {
        debug!(%url, "dispatching request");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| EcocashError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| EcocashError::network(e.to_string()))?;

        debug!(status, "received response");

        match serde_json::from_str::<Value>(&text) {
            Ok(decoded) if status < 400 => Ok(decoded),
            Ok(decoded) => Err(EcocashError::protocol(status, error_message(&decoded))),
            // Error status with a non-JSON body: pass the raw body through
            Err(_) if status >= 400 => Err(EcocashError::protocol(status, text)),
            Err(_) => Err(EcocashError::protocol(
                status,
                format!("unexpected non-JSON response: {}", text),
            )),
        }
    }
}

/// Extract a human-readable message from a decoded error body.
///
/// Checks `message`, then `responseMessage`, then `error`, falling back
/// to a generic string when none is present.
fn error_message(body: &Value) -> String {
    ["message", "responseMessage", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_error_message_priority() {
        let body = json!({"message": "a", "responseMessage": "b", "error": "c"});
        assert_eq!(error_message(&body), "a");

        let body = json!({"responseMessage": "b", "error": "c"});
        assert_eq!(error_message(&body), "b");

        let body = json!({"error": "c"});
        assert_eq!(error_message(&body), "c");

        let body = json!({"detail": "ignored"});
        assert_eq!(error_message(&body), "request failed");

        let body = json!(["not", "an", "object"]);
        assert_eq!(error_message(&body), "request failed");
    }

    #[tokio::test]
    async fn test_success_body_returned_verbatim() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/endpoint")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "ok"}).to_string())
            .create_async()
            .await;

        let transport = HttpTransport::new();
        let url = format!("{}/endpoint", server.url());
        let response = transport
            .post(&url, "key", &json!({}), TIMEOUT)
            .await
            .unwrap();
        assert_eq!(response, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_api_key_header_attached() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/endpoint")
            .match_header(API_KEY_HEADER, "super-secret")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let transport = HttpTransport::new();
        let url = format!("{}/endpoint", server.url());
        let response = transport
            .post(&url, "super-secret", &json!({}), TIMEOUT)
            .await
            .unwrap();
        assert_eq!(response, json!({}));
    }

    #[tokio::test]
    async fn test_error_status_with_json_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/endpoint")
            .with_status(404)
            .with_body(json!({"message": "not found"}).to_string())
            .create_async()
            .await;

        let transport = HttpTransport::new();
        let url = format!("{}/endpoint", server.url());
        let error = transport
            .post(&url, "key", &json!({}), TIMEOUT)
            .await
            .unwrap_err();

        match error {
            EcocashError::Protocol { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("not found"));
            }
            other => panic!("expected Protocol error, got: {}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_non_json_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/endpoint")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let transport = HttpTransport::new();
        let url = format!("{}/endpoint", server.url());
        let error = transport
            .post(&url, "key", &json!({}), TIMEOUT)
            .await
            .unwrap_err();

        match error {
            EcocashError::Protocol { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("Bad Gateway"));
            }
            other => panic!("expected Protocol error, got: {}", other),
        }
    }

    #[tokio::test]
    async fn test_success_status_with_non_json_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/endpoint")
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;

        let transport = HttpTransport::new();
        let url = format!("{}/endpoint", server.url());
        let error = transport
            .post(&url, "key", &json!({}), TIMEOUT)
            .await
            .unwrap_err();

        match error {
            EcocashError::Protocol { status, message } => {
                assert_eq!(status, 200);
                assert!(message.contains("non-JSON"));
            }
            other => panic!("expected Protocol error, got: {}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let transport = HttpTransport::new();
        // Reserved TLD guarantees resolution failure
        let error = transport
            .post(
                "http://ecocash.invalid/endpoint",
                "key",
                &json!({}),
                TIMEOUT,
            )
            .await
            .unwrap_err();

        assert!(
            matches!(error, EcocashError::Network { .. }),
            "expected Network error, got: {}",
            error
        );
        assert!(error.is_retryable());
    }
}
