use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vanity name server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VanityNameServer {
    pub id: u64,
    pub name: String,
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
