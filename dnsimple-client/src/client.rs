//! The API v2 client: base URL, versioned paths, authentication and the
//! generic request helpers every service is built on.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{API_VERSION, ClientConfig, Credentials};
use crate::error::{DnsimpleError, Result};
use crate::http_client::HttpUtils;
use crate::params::ListOptions;
use crate::response::{RawResponse, Response};
use crate::services::{
    Accounts, Billing, Certificates, Contacts, DnsAnalyticsService, Domains, Identity, Oauth,
    Registrar, SecondaryDns, Services, Templates, Tlds, VanityNameServers, Webhooks, Zones,
};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Placeholder for `post`/`put`/`patch` calls that send no body.
pub const NO_BODY: Option<&()> = None;

/// Percent-encode one path segment (domain name, zone name, template sid...).
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Milliseconds in `d`; a non-zero duration below 1 ms counts as 1 ms.
pub(crate) fn duration_ms(d: Duration) -> u64 {
    let ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
    if ms == 0 && !d.is_zero() { 1 } else { ms }
}

/// DNSimple API v2 client.
///
/// Cheap to clone: clones share the underlying connection pool.
///
/// ```rust,no_run
/// use dnsimple_client::{Client, ListOptions};
///
/// # async fn run() -> dnsimple_client::Result<()> {
/// let client = Client::builder()
///     .access_token("your-token")
///     .sandbox(true)
///     .build()?;
///
/// let whoami = client.identity().whoami().await?.data;
/// let account_id = whoami.account.map(|a| a.id).unwrap_or_default();
///
/// let domains = client
///     .domains()
///     .list_domains(account_id, &ListOptions::new().sort("expiration:asc"))
///     .await?;
/// for domain in &domains.data {
///     println!("{} ({})", domain.name, domain.state);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    credentials: Option<Credentials>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Build a client from a [`ClientConfig`].
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| DnsimpleError::config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = config.resolved_base_url();
        let user_agent = config.resolved_user_agent();
        log::debug!("[dnsimple] client ready for {base_url}");

        Ok(Self {
            http,
            base_url,
            user_agent,
            credentials: config.credentials,
        })
    }

    /// Build a client from `DNSIMPLE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Join the base URL, the API version and `path`.
    ///
    /// `versioned("/whoami")` and `versioned("whoami")` both give
    /// `https://api.dnsimple.com/v2/whoami`.
    pub fn versioned(&self, path: &str) -> String {
        format!(
            "{}/{API_VERSION}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// A request to `versioned(path)` with the standard headers and auth set.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.versioned(path))
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(USER_AGENT, &self.user_agent);

        match &self.credentials {
            Some(Credentials::AccessToken { token }) => builder.bearer_auth(token),
            Some(Credentials::Basic { email, password }) => {
                builder.basic_auth(email, Some(password))
            }
            None => builder,
        }
    }

    /// Send one request and return the raw successful response.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.versioned(path);
        let method_name = method.to_string();
        let mut builder = self.request(method, path);

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            let json = HttpUtils::to_json_body(body)?;
            builder = builder.header(CONTENT_TYPE, JSON_MEDIA_TYPE).body(json);
        }

        HttpUtils::execute_request(builder, &method_name, &url).await
    }

    // ============ Generic helpers ============

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Response<T>> {
        let raw = self.send(Method::GET, path, query, NO_BODY).await?;
        Response::decode(raw)
    }

    /// GET a collection, passing sort/filter/pagination options through.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<T>>> {
        self.get_with_query(path, &options.to_query()).await
    }

    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.send(Method::POST, path, &[], body).await?;
        Response::decode(raw)
    }

    pub async fn post_empty<B>(&self, path: &str, body: Option<&B>) -> Result<Response<()>>
    where
        B: Serialize + ?Sized,
    {
        let raw = self.send(Method::POST, path, &[], body).await?;
        Ok(Response::empty(raw))
    }

    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.send(Method::PUT, path, &[], body).await?;
        Response::decode(raw)
    }

    pub async fn put_empty<B>(&self, path: &str, body: Option<&B>) -> Result<Response<()>>
    where
        B: Serialize + ?Sized,
    {
        let raw = self.send(Method::PUT, path, &[], body).await?;
        Ok(Response::empty(raw))
    }

    pub async fn patch<T, B>(&self, path: &str, body: Option<&B>) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.send(Method::PATCH, path, &[], body).await?;
        Response::decode(raw)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        let raw = self.send(Method::DELETE, path, &[], NO_BODY).await?;
        Response::decode(raw)
    }

    pub async fn delete_empty(&self, path: &str) -> Result<Response<()>> {
        let raw = self.send(Method::DELETE, path, &[], NO_BODY).await?;
        Ok(Response::empty(raw))
    }

    /// DELETE an endpoint that answers either `202` with a body or `204`.
    pub(crate) async fn delete_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Response<Option<T>>> {
        let raw = self.send(Method::DELETE, path, &[], NO_BODY).await?;
        if raw.body.trim().is_empty() {
            return Ok(Response::empty(raw).map(|()| None));
        }
        Response::decode(raw)
    }

    // ============ Services ============

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    pub fn billing(&self) -> Billing<'_> {
        Billing::new(self)
    }

    pub fn certificates(&self) -> Certificates<'_> {
        Certificates::new(self)
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    pub fn dns_analytics(&self) -> DnsAnalyticsService<'_> {
        DnsAnalyticsService::new(self)
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    pub fn identity(&self) -> Identity<'_> {
        Identity::new(self)
    }

    pub fn oauth(&self) -> Oauth<'_> {
        Oauth::new(self)
    }

    pub fn registrar(&self) -> Registrar<'_> {
        Registrar::new(self)
    }

    pub fn secondary_dns(&self) -> SecondaryDns<'_> {
        SecondaryDns::new(self)
    }

    pub fn services(&self) -> Services<'_> {
        Services::new(self)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(self)
    }

    pub fn tlds(&self) -> Tlds<'_> {
        Tlds::new(self)
    }

    pub fn vanity_name_servers(&self) -> VanityNameServers<'_> {
        VanityNameServers::new(self)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    pub fn zones(&self) -> Zones<'_> {
        Zones::new(self)
    }
}

/// Builder for [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.credentials = Some(Credentials::access_token(token));
        self
    }

    #[must_use]
    pub fn basic_auth(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.credentials = Some(Credentials::basic(email, password));
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.config.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.config.sandbox = sandbox;
        self
    }

    /// Override the base URL. Takes precedence over [`sandbox`](Self::sandbox).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Name prepended to the default user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Overall request timeout, kept at millisecond precision.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = duration_ms(timeout);
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout_ms = duration_ms(timeout);
        self
    }

    pub fn build(self) -> Result<Client> {
        Client::new(self.config)
    }
}
