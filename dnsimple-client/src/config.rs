//! Client configuration
//!
//! - [`Credentials`] - how requests are authenticated against API v2
//! - [`ClientConfig`] - base URL, sandbox switch, user agent, timeouts
//! - [`LegacyFileConfig`] - the `.dnsimple` INI file read by the v1 client

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DnsimpleError, Result};

/// Production API host.
pub const PRODUCTION_BASE_URL: &str = "https://api.dnsimple.com";
/// Sandbox API host.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.dnsimple.com";
/// API version prefix used by [`crate::Client`].
pub const API_VERSION: &str = "v2";
/// Default `User-Agent` value.
pub const DEFAULT_USER_AGENT: &str = concat!("dnsimple-rust/", env!("CARGO_PKG_VERSION"));

/// Default connect timeout (milliseconds).
pub(crate) const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
/// Default request timeout (milliseconds).
pub(crate) const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const ENV_ACCESS_TOKEN: &str = "DNSIMPLE_ACCESS_TOKEN";
pub const ENV_EMAIL: &str = "DNSIMPLE_EMAIL";
pub const ENV_PASSWORD: &str = "DNSIMPLE_PASSWORD";
pub const ENV_SANDBOX: &str = "DNSIMPLE_SANDBOX";
pub const ENV_BASE_URL: &str = "DNSIMPLE_BASE_URL";
pub const ENV_USER_AGENT: &str = "DNSIMPLE_USER_AGENT";

/// Name of the legacy credentials file.
pub const LEGACY_CONFIG_FILE: &str = ".dnsimple";
/// Section of the legacy credentials file holding the keys.
const LEGACY_CONFIG_SECTION: &str = "DNSimple";

// ============ Credentials ============

/// Credentials for API v2.
///
/// Serialized as a tagged enum:
///
/// ```json
/// { "type": "access_token", "token": "..." }
/// { "type": "basic", "email": "...", "password": "..." }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    /// OAuth2 access token or account/user API token, sent as `Authorization: Bearer`.
    AccessToken {
        /// The token.
        token: String,
    },
    /// Email and password, sent as HTTP basic auth.
    Basic {
        /// Login email.
        email: String,
        /// Login password.
        password: String,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::utils::log_sanitizer::mask_secret;
        match self {
            Self::AccessToken { token } => f
                .debug_struct("AccessToken")
                .field("token", &mask_secret(token))
                .finish(),
            Self::Basic { email, password } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("password", &mask_secret(password))
                .finish(),
        }
    }
}

impl Credentials {
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken {
            token: token.into(),
        }
    }

    pub fn basic(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            email: email.into(),
            password: password.into(),
        }
    }
}

// ============ Client configuration ============

/// Settings for building a [`crate::Client`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Credentials; `None` sends unauthenticated requests.
    #[serde(default)]
    pub credentials: Option<Credentials>,
    /// Target the sandbox environment.
    #[serde(default)]
    pub sandbox: bool,
    /// Explicit base URL; overrides `sandbox`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Custom name prepended to the default user agent.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Overall request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            sandbox: false,
            base_url: None,
            user_agent: None,
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Read configuration from `DNSIMPLE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a key lookup function.
    ///
    /// `DNSIMPLE_ACCESS_TOKEN` wins over `DNSIMPLE_EMAIL` + `DNSIMPLE_PASSWORD`.
    /// Setting only one of email/password is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials = match (get(ENV_ACCESS_TOKEN), get(ENV_EMAIL), get(ENV_PASSWORD)) {
            (Some(token), _, _) => Some(Credentials::AccessToken { token }),
            (None, Some(email), Some(password)) => Some(Credentials::Basic { email, password }),
            (None, Some(_), None) => {
                return Err(DnsimpleError::config(format!(
                    "{ENV_EMAIL} is set but {ENV_PASSWORD} is missing"
                )));
            }
            (None, None, Some(_)) => {
                return Err(DnsimpleError::config(format!(
                    "{ENV_PASSWORD} is set but {ENV_EMAIL} is missing"
                )));
            }
            (None, None, None) => None,
        };

        let sandbox = match get(ENV_SANDBOX) {
            None => false,
            Some(v) => parse_bool(&v).ok_or_else(|| {
                DnsimpleError::config(format!("{ENV_SANDBOX} must be true/false/1/0, got '{v}'"))
            })?,
        };

        Ok(Self {
            credentials,
            sandbox,
            base_url: get(ENV_BASE_URL),
            user_agent: get(ENV_USER_AGENT),
            ..Self::default()
        })
    }

    /// The base URL requests are sent to.
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if self.sandbox => SANDBOX_BASE_URL.to_string(),
            None => PRODUCTION_BASE_URL.to_string(),
        }
    }

    /// The `User-Agent` header value.
    pub fn resolved_user_agent(&self) -> String {
        match &self.user_agent {
            Some(custom) => format!("{custom} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Check the configuration before a client is built.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(DnsimpleError::config(format!(
                "base_url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.timeout_ms == 0 {
            return Err(DnsimpleError::config("timeout_ms must be > 0"));
        }
        if self.connect_timeout_ms == 0 {
            return Err(DnsimpleError::config("connect_timeout_ms must be > 0"));
        }
        Ok(())
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ============ Legacy `.dnsimple` file ============

/// Credentials read from a legacy `.dnsimple` file.
///
/// ```ini
/// [DNSimple]
/// email: user@example.com
/// api_token: abc123
/// ```
///
/// Both `key = value` and `key: value` are accepted; `#` and `;` start comments.
/// Empty values count as unset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LegacyFileConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub api_token: Option<String>,
    pub domain_token: Option<String>,
}

impl std::fmt::Debug for LegacyFileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::utils::log_sanitizer::mask_secret;
        let masked = |v: &Option<String>| v.as_deref().map(mask_secret);
        f.debug_struct("LegacyFileConfig")
            .field("username", &self.username)
            .field("password", &masked(&self.password))
            .field("email", &self.email)
            .field("api_token", &masked(&self.api_token))
            .field("domain_token", &masked(&self.domain_token))
            .finish()
    }
}

impl LegacyFileConfig {
    /// Parse the INI content of a `.dnsimple` file.
    ///
    /// Only the `[DNSimple]` section is read. A file without it yields an
    /// empty config.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut in_section = false;

        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    return Err(DnsimpleError::config(format!(
                        "{LEGACY_CONFIG_FILE}:{}: malformed section header",
                        idx + 1
                    )));
                };
                in_section = name.trim() == LEGACY_CONFIG_SECTION;
                continue;
            }

            if !in_section {
                continue;
            }

            let Some(split) = line.find(['=', ':']) else {
                return Err(DnsimpleError::config(format!(
                    "{LEGACY_CONFIG_FILE}:{}: expected 'key = value'",
                    idx + 1
                )));
            };
            let key = line[..split].trim().to_ascii_lowercase();
            let value = line[split + 1..].trim();
            let value = (!value.is_empty()).then(|| value.to_string());

            match key.as_str() {
                "username" => config.username = value,
                "password" => config.password = value,
                "email" => config.email = value,
                "api_token" => config.api_token = value,
                "domain_token" => config.domain_token = value,
                other => log::debug!("Ignoring unknown {LEGACY_CONFIG_FILE} key '{other}'"),
            }
        }

        Ok(config)
    }

    /// Read and parse a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DnsimpleError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Candidate locations, in lookup order: working directory, then home.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LEGACY_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(LEGACY_CONFIG_FILE));
        }
        paths
    }

    /// Load the first existing file among [`candidate_paths`](Self::candidate_paths).
    pub fn discover() -> Result<Option<Self>> {
        Self::discover_in(&Self::candidate_paths())
    }

    /// Load the first existing file among `paths`.
    pub fn discover_in(paths: &[PathBuf]) -> Result<Option<Self>> {
        for path in paths {
            if path.is_file() {
                log::info!("Reading DNSimple credentials from {}", path.display());
                return Self::load(path).map(Some);
            }
        }
        Ok(None)
    }

    /// Whether no credential key is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.api_token.is_none()
            && self.domain_token.is_none()
    }
}
