use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A one-click service.
///
/// See <https://developer.dnsimple.com/v2/services/>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub sid: String,
    pub description: String,
    pub setup_description: Option<String>,
    #[serde(default)]
    pub requires_setup: bool,
    pub default_subdomain: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub settings: Vec<ServiceSetting>,
}

/// A setting a service needs when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSetting {
    pub name: String,
    pub label: String,
    pub append: Option<String>,
    pub description: String,
    pub example: Option<String>,
    #[serde(default)]
    pub password: bool,
}

/// Setting values sent with `apply_service`, keyed by [`ServiceSetting::name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettingsInput {
    pub settings: BTreeMap<String, String>,
}

impl ServiceSettingsInput {
    #[must_use]
    pub fn setting(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(name.into(), value.into());
        self
    }
}
