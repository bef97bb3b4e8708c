//! Shared HTTP plumbing
//!
//! Sending, logging and body reading live here so that sources only deal
//! with URLs and with interpreting `(status, body)` pairs.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Maximum number of bytes of a body that ends up in the log.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and returns `(status_code, body)`.
    ///
    /// Only transport problems are errors here; a 4xx/5xx status is returned
    /// to the caller untouched so it can pick the right message.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{source_name}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            log::warn!("[{source_name}] Request failed: {e}");
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{source_name}] Response Status: {status_code}");

        let body = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[{source_name}] Response Body: {}", truncate_for_log(&body));

        Ok((status_code, body))
    }

    /// Parses a JSON body, logging the raw text when it does not fit `T`.
    pub fn parse_json<T>(body: &str, source_name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{source_name}] JSON parse failed: {e}");
            log::error!("[{source_name}] Raw response: {}", truncate_for_log(body));
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// Shortens a body for logging without splitting a UTF-8 sequence.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let cut = (0..=LOG_BODY_LIMIT)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
