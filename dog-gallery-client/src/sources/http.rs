//! HTTP source backed by the `/api/data` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ClientError, DEFAULT_API_ERROR_MESSAGE, Result};
use crate::http_client::HttpUtils;
use crate::traits::DogSource;
use crate::types::{DogRecord, Envelope, EnvelopeStatus, ErrorBody};

/// Path of the paginated listing, relative to the base URL.
pub const DATA_PATH: &str = "/api/data";

const SOURCE_NAME: &str = "http";

/// Client for `GET {base_url}/api/data?page=N`.
///
/// No authentication, no request body, no retries. The timeout is only set
/// when explicitly asked for.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: Client,
    base_url: String,
}

impl DogApiClient {
    /// Creates a client without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a client, optionally bounding every request by `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ClientError::InvalidConfig {
            detail: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for one page.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}{DATA_PATH}?page={page}", self.base_url)
    }
}

#[async_trait]
impl DogSource for DogApiClient {
    fn id(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<DogRecord>> {
        let url = self.page_url(page);
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), SOURCE_NAME, &url).await?;
        decode_response(status, &body)
    }
}

/// Turns a `(status, body)` pair into records or the matching error.
///
/// - non-2xx: [`ClientError::from_status`], using the body's message if any
/// - 2xx, not an envelope: [`ClientError::Parse`]
/// - `status: "error"`: [`ClientError::Api`]
/// - `status: "success"`: the records, possibly none
pub fn decode_response(status: u16, body: &str) -> Result<Vec<DogRecord>> {
    if !(200..300).contains(&status) {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message);
        let err = ClientError::from_status(status, server_message);
        log::error!("[{SOURCE_NAME}] HTTP {status}: {err}");
        return Err(err);
    }

    let envelope: Envelope = HttpUtils::parse_json(body, SOURCE_NAME)?;
    match envelope.status {
        EnvelopeStatus::Success => Ok(envelope.data),
        EnvelopeStatus::Error => {
            let message = envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_string());
            log::error!("[{SOURCE_NAME}] API error: {message}");
            Err(ClientError::Api { message })
        }
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ClientError::InvalidConfig {
            detail: format!("base URL must start with http:// or https://, got {raw:?}"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SERVER_ERROR_MESSAGE;

    #[test]
    fn page_url_appends_path_and_query() {
        let client = DogApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.page_url(3), "http://localhost:8000/api/data?page=3");
    }

    #[test]
    fn base_url_without_scheme_is_rejected() {
        let err = DogApiClient::new("localhost:8000").unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig { .. }));
    }

    #[test]
    fn success_returns_records_in_order() {
        let body = r#"{"status":"success","data":[
            {"breed":"Pug","image":"a"},{"breed":"Beagle","image":""},{"breed":"Akita","image":"c"}
        ]}"#;
        let dogs = decode_response(200, body).unwrap();
        assert_eq!(dogs.len(), 3);
        assert_eq!(dogs[1].breed, "Beagle");
        assert!(dogs[1].uses_placeholder());
    }

    #[test]
    fn success_with_empty_data_is_ok() {
        assert_eq!(decode_response(200, r#"{"status":"success","data":[]}"#), Ok(vec![]));
    }

    #[test]
    fn error_envelope_uses_message() {
        let err = decode_response(200, r#"{"status":"error","message":"No such page"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "No such page");
    }

    #[test]
    fn error_envelope_without_message_uses_default() {
        let err = decode_response(200, r#"{"status":"error"}"#).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_API_ERROR_MESSAGE);
    }

    #[test]
    fn status_500_is_fixed_server_error() {
        let err = decode_response(500, r#"{"status":"error","message":"trace..."}"#).unwrap_err();
        assert_eq!(err, ClientError::Server);
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn non_success_status_uses_body_message() {
        let err = decode_response(404, r#"{"status":"error","message":"Gone fishing"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Gone fishing");

        let err = decode_response(422, r#"{"detail":"page must be positive"}"#).unwrap_err();
        assert_eq!(err.to_string(), "page must be positive");
    }

    #[test]
    fn non_success_status_with_garbage_body_is_generic() {
        let err = decode_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn non_success_status_ignores_body_even_if_success_shaped() {
        let err = decode_response(403, r#"{"status":"success","data":[]}"#).unwrap_err();
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        let err = decode_response(200, r#"{"dogs":[]}"#).unwrap_err();
        assert!(matches!(err, ClientError::Parse { .. }));
    }
}
