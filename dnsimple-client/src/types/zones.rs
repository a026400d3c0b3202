use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Zone ============

/// A DNS zone.
///
/// See <https://developer.dnsimple.com/v2/zones/>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub secondary: bool,
    pub last_transferred_at: Option<DateTime<Utc>>,
    /// Whether DNS resolution is active for the zone.
    pub active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The zone in BIND format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFile {
    pub zone: String,
}

/// Whether a zone or record has propagated to every name server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    pub distributed: bool,
}

/// Body of `update_zone_ns_records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateZoneNsRecordsInput {
    pub ns_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ns_set_ids: Option<Vec<u64>>,
}

// ============ Records ============

/// A record in a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: u64,
    pub zone_id: String,
    pub parent_id: Option<u64>,
    /// Relative name; the apex is `""`.
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u32>,
    #[serde(rename = "type")]
    pub record_type: String,
    /// `["global"]` unless regional records are in use.
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub system_record: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `create_record`. An empty `name` creates the record at the apex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecordInput {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

impl ZoneRecordInput {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn regions(mut self, regions: Vec<String>) -> Self {
        self.regions = Some(regions);
        self
    }
}

/// Body of `update_record`. Only set fields are sent; `Some("")` moves the
/// record to the apex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecordUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

// ============ Batch changes ============

/// One update in a batch: the record id plus the fields to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchUpdateZoneRecord {
    pub id: u64,
    #[serde(flatten)]
    pub changes: ZoneRecordUpdateInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDeleteZoneRecord {
    pub id: u64,
}

/// Body of `batch_change_zone_records`.
///
/// Any combination of the three lists may be sent; unset lists are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchChangeZoneRecordsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creates: Option<Vec<ZoneRecordInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<BatchUpdateZoneRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletes: Option<Vec<BatchDeleteZoneRecord>>,
}

/// Records created, updated and deleted by a batch change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchChangeZoneRecordsResult {
    #[serde(default)]
    pub creates: Option<Vec<ZoneRecord>>,
    #[serde(default)]
    pub updates: Option<Vec<ZoneRecord>>,
    #[serde(default)]
    pub deletes: Option<Vec<BatchDeleteZoneRecord>>,
}
