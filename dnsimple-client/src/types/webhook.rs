//! Incoming webhook payloads.
//!
//! DNSimple POSTs an event envelope to every webhook URL:
//!
//! ```json
//! {
//!   "name": "domain.create",
//!   "api_version": "v2",
//!   "request_identifier": "096bfc29-2bf0-40c6-991b-f03b1f8521f1",
//!   "data": { "domain": { ... } },
//!   "account": { "id": 1111, "display": "Personal", "identifier": "xxxxxxxx" },
//!   "actor": { "id": "1120", "entity": "user", "pretty": "xxxxxxx@xxxxxx.xxx" }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DnsimpleError, Result};
use crate::http_client::HttpUtils;

use super::{Certificate, Contact, Domain, Webhook, Zone, ZoneRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookAccount {
    pub id: u64,
    pub display: Option<String>,
    pub identifier: Option<String>,
}

/// Who triggered the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookActor {
    pub id: String,
    /// `user`, `account` or `dnsimple`.
    pub entity: String,
    pub pretty: Option<String>,
}

/// A webhook event envelope. `data` is kept as JSON because its shape
/// depends on `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Event name, e.g. `domain.create` or `zone_record.update`.
    pub name: String,
    pub api_version: String,
    pub request_identifier: String,
    #[serde(default)]
    pub data: Value,
    pub account: Option<WebhookAccount>,
    pub actor: Option<WebhookActor>,
}

impl WebhookPayload {
    /// Decode a webhook request body.
    pub fn parse(body: &str) -> Result<Self> {
        HttpUtils::parse_json(body)
    }

    /// Decode `data.<key>` when present.
    pub fn resource<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.data.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => serde_json::from_value(v.clone())
                .map(Some)
                .map_err(DnsimpleError::parse),
        }
    }

    pub fn domain(&self) -> Result<Option<Domain>> {
        self.resource("domain")
    }

    pub fn zone(&self) -> Result<Option<Zone>> {
        self.resource("zone")
    }

    pub fn zone_record(&self) -> Result<Option<ZoneRecord>> {
        self.resource("zone_record")
    }

    pub fn contact(&self) -> Result<Option<Contact>> {
        self.resource("contact")
    }

    pub fn certificate(&self) -> Result<Option<Certificate>> {
        self.resource("certificate")
    }

    pub fn webhook(&self) -> Result<Option<Webhook>> {
        self.resource("webhook")
    }
}
