use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DnsimpleError, Result};

/// One row of DNS analytics.
///
/// `date` and `zone_name` are only present when results are grouped by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsAnalytics {
    pub volume: u64,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// DNS analytics as sent by the API: a header row plus value rows.
///
/// ```json
/// {"rows": [[1200, "2023-12-08", "example.com"]], "headers": ["volume", "date", "zone_name"]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsAnalyticsTable {
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
    #[serde(default)]
    pub headers: Vec<String>,
}

impl DnsAnalyticsTable {
    /// Zip every row with the headers and decode it.
    pub fn into_records(self) -> Result<Vec<DnsAnalytics>> {
        let headers = self.headers;
        self.rows
            .into_iter()
            .map(|row| {
                if row.len() != headers.len() {
                    return Err(DnsimpleError::parse(format!(
                        "analytics row has {} values for {} headers",
                        row.len(),
                        headers.len()
                    )));
                }
                let object: Map<String, Value> = headers.iter().cloned().zip(row).collect();
                serde_json::from_value(Value::Object(object)).map_err(DnsimpleError::parse)
            })
            .collect()
    }
}
