//! # dnsimple-client
//!
//! A typed async client for the [DNSimple](https://dnsimple.com/) REST API.
//!
//! Every operation is one HTTP request: the client builds the path, sends the
//! JSON body, decodes the JSON answer into typed records and turns any
//! `4xx`/`5xx` status into [`DnsimpleError::Api`]. Pagination, sorting and
//! filtering are passed through as query parameters; there is no retry and no
//! caching.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! dnsimple-client = "0.1"
//! ```
//!
//! ```rust,no_run
//! use dnsimple_client::{Client, ListOptions, ZoneRecordInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a client (or `Client::from_env()` with DNSIMPLE_ACCESS_TOKEN set)
//!     let client = Client::builder()
//!         .access_token("your-token")
//!         .sandbox(true)
//!         .build()?;
//!
//!     // 2. Find the account the token belongs to
//!     let whoami = client.identity().whoami().await?.data;
//!     let account = whoami.account.ok_or("not an account token")?.id;
//!
//!     // 3. List zones, 10 per page
//!     let zones = client
//!         .zones()
//!         .list_zones(account, &ListOptions::new().per_page(10))
//!         .await?;
//!     if let Some(p) = zones.pagination {
//!         println!("page {}/{}", p.current_page, p.total_pages);
//!     }
//!
//!     // 4. Add a record at the apex
//!     let record = client
//!         .zones()
//!         .create_record(account, "example.com", &ZoneRecordInput::new("", "A", "1.2.3.4").ttl(600))
//!         .await?;
//!     println!("created record {}", record.data.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DnsimpleError>`](DnsimpleError):
//!
//! - [`DnsimpleError::Api`]: the API answered `4xx`/`5xx`; carries status,
//!   reason, the `message` and attribute-level `errors` from the body
//! - [`DnsimpleError::NetworkError`] / [`DnsimpleError::Timeout`]: transport failures
//! - [`DnsimpleError::ParseError`]: a success body could not be decoded
//! - [`DnsimpleError::Config`]: missing or invalid configuration
//!
//! ## Rate Limits
//!
//! Every [`Response`] carries the `X-RateLimit-*` headers in
//! [`Response::rate_limit`].
//!
//! ## API v1
//!
//! [`LegacyClient`] talks to the retired `/v1` API with `X-DNSimple-Token`,
//! `X-DNSimple-Domain-Token` or basic auth, reading credentials from a
//! `.dnsimple` file when none are given.

mod client;
mod config;
mod error;
mod http_client;
mod legacy;
mod params;
mod response;
pub mod services;
pub mod types;
mod utils;

pub use client::{Client, ClientBuilder, NO_BODY};
pub use config::{
    API_VERSION, ClientConfig, Credentials, DEFAULT_USER_AGENT, ENV_ACCESS_TOKEN, ENV_BASE_URL,
    ENV_EMAIL, ENV_PASSWORD, ENV_SANDBOX, ENV_USER_AGENT, LegacyFileConfig, PRODUCTION_BASE_URL,
    SANDBOX_BASE_URL,
};
pub use error::{AttributeErrors, DnsimpleError, Result};
pub use legacy::{LegacyClient, LegacyCredentials};
pub use params::ListOptions;
pub use response::{Pagination, RateLimit, Response};
pub use types::*;
pub use utils::log_sanitizer;
