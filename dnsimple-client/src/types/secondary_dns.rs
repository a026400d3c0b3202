use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A primary server secondary zones are transferred from.
///
/// See <https://developer.dnsimple.com/v2/secondary-dns/>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryServer {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    pub ip: String,
    pub port: u16,
    #[serde(default)]
    pub linked_secondary_zones: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `create_primary_server`. The API default port is 53.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryServerInput {
    pub name: String,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryZoneInput {
    pub name: String,
}
