//! Generic HTTP execution
//!
//! Sends one prepared request, logs it, reads the body and turns any
//! 4xx/5xx status into [`DnsimpleError::Api`]. Every service method goes
//! through [`HttpUtils::execute_request`]; decoding of successful bodies
//! happens in [`crate::response`].
//!
//! There is no retry: each call is exactly one request and every failure
//! is surfaced to the caller.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::DnsimpleError;
use crate::response::{RateLimit, RawResponse};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the raw successful response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, auth, body)
    /// * `method_name` - HTTP method, for logging
    /// * `url` - request URL, for logging
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - status < 400, with rate limit headers and body text
    /// * `Err(DnsimpleError::Api)` - status >= 400
    /// * `Err(DnsimpleError::Timeout | NetworkError)` - transport failure
    pub(crate) async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<RawResponse, DnsimpleError> {
        log::debug!("[dnsimple] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DnsimpleError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                DnsimpleError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let rate_limit = RateLimit::from_headers(response.headers());
        log::debug!(
            "[dnsimple] Response Status: {}, rate limit remaining: {:?}",
            status.as_u16(),
            rate_limit.remaining
        );

        let body = response
            .text()
            .await
            .map_err(|e| DnsimpleError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[dnsimple] Response Body: {}", truncate_for_log(&body));

        if status.as_u16() >= 400 {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            log::warn!(
                "[dnsimple] {method_name} {url} failed: HTTP {} {reason}",
                status.as_u16()
            );
            return Err(DnsimpleError::from_response(status.as_u16(), reason, body));
        }

        Ok(RawResponse {
            status: status.as_u16(),
            rate_limit,
            body,
        })
    }

    /// Parse JSON text
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(DnsimpleError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, DnsimpleError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[dnsimple] JSON parse failed: {e}");
            log::error!(
                "[dnsimple] Raw response: {}",
                truncate_for_log(response_text)
            );
            DnsimpleError::parse(e)
        })
    }

    /// Serialize a request body to JSON.
    pub(crate) fn to_json_body<B: serde::Serialize + ?Sized>(
        body: &B,
    ) -> Result<String, DnsimpleError> {
        serde_json::to_string(body).map_err(|e| DnsimpleError::SerializationError {
            detail: e.to_string(),
        })
    }
}
