//! Response wrapper: decoded `data`, pagination and rate-limit headers.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DnsimpleError, Result};
use crate::http_client::HttpUtils;

/// Header carrying the maximum number of requests per hour.
pub(crate) const HEADER_RATE_LIMIT: &str = "x-ratelimit-limit";
/// Header carrying the requests left in the current window.
pub(crate) const HEADER_RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
/// Header carrying the window reset time (Unix seconds).
pub(crate) const HEADER_RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Rate limit information read from the `X-RateLimit-*` response headers.
///
/// Every field is `None` when the header was absent or not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Maximum number of requests per hour.
    pub limit: Option<u64>,
    /// Requests remaining in the current window.
    pub remaining: Option<u64>,
    /// When the current window resets, in Unix seconds.
    pub reset: Option<i64>,
}

impl RateLimit {
    /// Read the rate limit headers from a header map.
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        fn header<T: std::str::FromStr>(headers: &reqwest::header::HeaderMap, name: &str) -> Option<T> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
        }

        Self {
            limit: header(headers, HEADER_RATE_LIMIT),
            remaining: header(headers, HEADER_RATE_LIMIT_REMAINING),
            reset: header(headers, HEADER_RATE_LIMIT_RESET),
        }
    }

    /// The reset time as a UTC timestamp.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

/// Pagination information attached to list responses.
///
/// See <https://developer.dnsimple.com/v2/#pagination>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The page currently returned.
    pub current_page: u32,
    /// Entries per page.
    pub per_page: u32,
    /// Total entries in the collection.
    pub total_entries: u64,
    /// Total pages given the current `per_page`.
    pub total_pages: u32,
}

impl Pagination {
    /// Whether pages follow the current one.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// A successful HTTP exchange before the body is decoded.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub rate_limit: RateLimit,
    pub body: String,
}

/// A decoded API response.
///
/// `data` holds the content of the JSON `data` key (a single record or a
/// list), or the whole body for the few endpoints that do not wrap their
/// payload. For endpoints answering `204 No Content` the type is `Response<()>`.
#[derive(Debug, Clone, Serialize)]
pub struct Response<T> {
    /// HTTP status code.
    pub status: u16,
    /// Decoded payload.
    pub data: T,
    /// Pagination block, present on list responses.
    pub pagination: Option<Pagination>,
    /// Rate limit headers.
    pub rate_limit: RateLimit,
}

impl<T> Response<T> {
    /// Transform the payload, keeping status, pagination and rate limit.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            status: self.status,
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
        }
    }

    /// Fallible [`map`](Self::map).
    pub fn try_map<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Response<U>> {
        Ok(Response {
            status: self.status,
            data: f(self.data)?,
            pagination: self.pagination,
            rate_limit: self.rate_limit,
        })
    }

    /// Discard the metadata and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: DeserializeOwned> Response<T> {
    pub(crate) fn decode(raw: RawResponse) -> Result<Self> {
        let mut root: Value = HttpUtils::parse_json(&raw.body)?;

        let pagination = match root.get_mut("pagination").map(Value::take) {
            Some(Value::Null) | None => None,
            Some(p) => Some(serde_json::from_value(p).map_err(DnsimpleError::parse)?),
        };

        let payload = match root {
            Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        };

        let data = serde_json::from_value(payload).map_err(|e| {
            log::error!("Failed to decode response data: {e}");
            DnsimpleError::parse(e)
        })?;

        Ok(Self {
            status: raw.status,
            data,
            pagination,
            rate_limit: raw.rate_limit,
        })
    }
}

impl Response<()> {
    pub(crate) fn empty(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            data: (),
            pagination: None,
            rate_limit: raw.rate_limit,
        }
    }
}
