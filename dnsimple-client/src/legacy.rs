//! Client for the retired API v1.
//!
//! Kept for accounts and scripts still on `/v1`. Responses are returned as
//! raw JSON; the v1 API wraps every object in its type name
//! (`{"domain": {...}}`).

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use serde_json::{Value, json};

use crate::client::segment;
use crate::config::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_REQUEST_TIMEOUT_MS, LEGACY_CONFIG_FILE,
    LegacyFileConfig,
};
use crate::error::{DnsimpleError, Result};
use crate::http_client::HttpUtils;

const PRODUCTION_ENDPOINT: &str = "https://api.dnsimple.com/v1";
const SANDBOX_ENDPOINT: &str = "https://api.sandbox.dnsimple.com/v1";
const LEGACY_USER_AGENT: &str = concat!("DNSimple Rust API ", env!("CARGO_PKG_VERSION"));

const HEADER_TOKEN: &str = "X-DNSimple-Token";
const HEADER_DOMAIN_TOKEN: &str = "X-DNSimple-Domain-Token";

/// Authentication for API v1.
#[derive(Clone, PartialEq, Eq)]
pub enum LegacyCredentials {
    /// `X-DNSimple-Token: <email>:<api_token>`
    ApiToken { email: String, api_token: String },
    /// `X-DNSimple-Domain-Token: <token>`, scoped to one domain.
    DomainToken(String),
    /// HTTP basic auth.
    Basic { username: String, password: String },
}

impl std::fmt::Debug for LegacyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::utils::log_sanitizer::mask_secret;
        match self {
            Self::ApiToken { email, api_token } => f
                .debug_struct("ApiToken")
                .field("email", email)
                .field("api_token", &mask_secret(api_token))
                .finish(),
            Self::DomainToken(token) => f
                .debug_tuple("DomainToken")
                .field(&mask_secret(token))
                .finish(),
            Self::Basic { username, password } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &mask_secret(password))
                .finish(),
        }
    }
}

impl LegacyCredentials {
    /// Pick credentials from the keys of a `.dnsimple` file.
    ///
    /// Precedence: API token, then domain token, then username/password.
    pub fn from_file_config(config: &LegacyFileConfig) -> Result<Self> {
        if config.is_empty() {
            return Err(DnsimpleError::config(format!(
                "{LEGACY_CONFIG_FILE} has no credentials in its [DNSimple] section"
            )));
        }
        if let Some(api_token) = &config.api_token {
            let email = config
                .email
                .clone()
                .ok_or_else(|| DnsimpleError::config("api_token is set but email is missing"))?;
            return Ok(Self::ApiToken {
                email,
                api_token: api_token.clone(),
            });
        }
        if let Some(token) = &config.domain_token {
            return Ok(Self::DomainToken(token.clone()));
        }
        match (&config.username, &config.password) {
            (Some(username), Some(password)) => Ok(Self::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => Err(DnsimpleError::config("No authentication details provided")),
        }
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiToken { email, api_token } => {
                builder.header(HEADER_TOKEN, format!("{email}:{api_token}"))
            }
            Self::DomainToken(token) => builder.header(HEADER_DOMAIN_TOKEN, token),
            Self::Basic { username, password } => builder.basic_auth(username, Some(password)),
        }
    }
}

/// API v1 client.
#[derive(Clone)]
pub struct LegacyClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: LegacyCredentials,
}

impl std::fmt::Debug for LegacyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyClient")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl LegacyClient {
    pub fn new(credentials: LegacyCredentials, sandbox: bool) -> Result<Self> {
        let endpoint = if sandbox {
            SANDBOX_ENDPOINT
        } else {
            PRODUCTION_ENDPOINT
        };
        Self::with_endpoint(credentials, endpoint)
    }

    /// Client for a custom endpoint, including the `/v1` suffix.
    pub fn with_endpoint(credentials: LegacyCredentials, endpoint: &str) -> Result<Self> {
        Self::build(
            credentials,
            endpoint,
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
        )
    }

    /// Client sharing the host and timeouts of a v2 [`ClientConfig`].
    ///
    /// The endpoint is the resolved base URL plus `/v1`; the v2 user agent
    /// and credentials are not used.
    pub fn with_config(credentials: LegacyCredentials, config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::build(
            credentials,
            &format!("{}/v1", config.resolved_base_url()),
            config.timeout(),
            config.connect_timeout(),
        )
    }

    fn build(
        credentials: LegacyCredentials,
        endpoint: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| DnsimpleError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Read credentials from `.dnsimple` in the working directory, then the
    /// home directory.
    pub fn from_config_file(sandbox: bool) -> Result<Self> {
        let config = LegacyFileConfig::discover()?.ok_or_else(|| {
            DnsimpleError::config("No authentication details provided and no .dnsimple file found")
        })?;
        Self::new(LegacyCredentials::from_file_config(&config)?, sandbox)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn user_agent(&self) -> &'static str {
        LEGACY_USER_AGENT
    }

    /// A request with auth, `Accept` and `User-Agent` set.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{path}", self.endpoint))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, LEGACY_USER_AGENT);
        self.credentials.apply(builder)
    }

    async fn call(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}{path}", self.endpoint);
        let method_name = method.to_string();
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(HttpUtils::to_json_body(body)?);
        }

        let raw = HttpUtils::execute_request(builder, &method_name, &url).await?;
        if raw.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        HttpUtils::parse_json(&raw.body)
    }

    // ============ Domains ============

    pub async fn domains(&self) -> Result<Value> {
        self.call(Method::GET, "/domains", None).await
    }

    pub async fn domain(&self, id_or_name: &str) -> Result<Value> {
        self.call(Method::GET, &format!("/domains/{}", segment(id_or_name)), None)
            .await
    }

    pub async fn add_domain(&self, name: &str) -> Result<Value> {
        let body = json!({ "domain": { "name": name } });
        self.call(Method::POST, "/domains", Some(&body)).await
    }

    /// Availability of a domain for registration.
    pub async fn check(&self, name: &str) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("/domains/{}/check", segment(name)),
            None,
        )
        .await
    }

    /// Register a domain. Without `registrant_id`, the registrant of the
    /// first domain in the account is used.
    pub async fn register(&self, name: &str, registrant_id: Option<u64>) -> Result<Value> {
        let registrant_id = match registrant_id {
            Some(id) => id,
            None => self.default_registrant_id().await?,
        };
        let body = json!({ "name": name, "registrant_id": registrant_id });
        self.call(Method::POST, "/domain_registrations", Some(&body))
            .await
    }

    async fn default_registrant_id(&self) -> Result<u64> {
        let domains = self.domains().await?;
        domains
            .get(0)
            .and_then(|d| d.get("domain"))
            .and_then(|d| d.get("registrant_id"))
            .and_then(Value::as_u64)
            .ok_or_else(|| DnsimpleError::InvalidParameter {
                param: "registrant_id".to_string(),
                detail: "could not find a registrant on existing domains, specify it".to_string(),
            })
    }

    /// Transfer a domain in from another registrar.
    pub async fn transfer(&self, name: &str, registrant_id: u64) -> Result<Value> {
        let body = json!({ "domain": { "name": name, "registrant_id": registrant_id } });
        self.call(Method::POST, "/domain_transfers", Some(&body))
            .await
    }

    pub async fn delete(&self, id_or_name: &str) -> Result<Value> {
        self.call(
            Method::DELETE,
            &format!("/domains/{}", segment(id_or_name)),
            None,
        )
        .await
    }

    // ============ Records ============

    pub async fn records(&self, id_or_name: &str) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("/domains/{}/records", segment(id_or_name)),
            None,
        )
        .await
    }

    pub async fn record(&self, id_or_name: &str, record_id: u64) -> Result<Value> {
        self.call(
            Method::GET,
            &format!("/domains/{}/records/{record_id}", segment(id_or_name)),
            None,
        )
        .await
    }

    /// Create a record. `record` holds `record_type`, `name`, `content` and
    /// optionally `ttl` and `prio`.
    pub async fn add_record(&self, id_or_name: &str, record: &Value) -> Result<Value> {
        let body = json!({ "record": record });
        self.call(
            Method::POST,
            &format!("/domains/{}/records", segment(id_or_name)),
            Some(&body),
        )
        .await
    }

    pub async fn update_record(
        &self,
        id_or_name: &str,
        record_id: u64,
        record: &Value,
    ) -> Result<Value> {
        let body = json!({ "record": record });
        self.call(
            Method::PUT,
            &format!("/domains/{}/records/{record_id}", segment(id_or_name)),
            Some(&body),
        )
        .await
    }

    pub async fn delete_record(&self, id_or_name: &str, record_id: u64) -> Result<Value> {
        self.call(
            Method::DELETE,
            &format!("/domains/{}/records/{record_id}", segment(id_or_name)),
            None,
        )
        .await
    }

    // ============ Contacts ============

    pub async fn contacts(&self) -> Result<Value> {
        self.call(Method::GET, "/contacts", None).await
    }

    pub async fn contact(&self, contact_id: u64) -> Result<Value> {
        self.call(Method::GET, &format!("/contacts/{contact_id}"), None)
            .await
    }

    /// Create a contact usable as registrant.
    pub async fn add_contact(&self, contact: &Value) -> Result<Value> {
        let body = json!({ "contact": contact });
        self.call(Method::POST, "/contacts", Some(&body)).await
    }
}
