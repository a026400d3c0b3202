//! Money amount deserialization
//!
//! Billing endpoints send amounts as decimal strings (`"14.50"`).
//! - Deserialize: decimal string, JSON number or `null` -> `Option<f64>`;
//!   an unparsable string is logged and becomes `None`
//! - Serialize: `Option<f64>` -> JSON number or `null`

use serde::{Deserialize, Deserializer, Serializer};

/// Serialize `Option<f64>` as a JSON number or `null`.
#[allow(clippy::ref_option)]
pub fn serialize<S>(amount: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match amount {
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

/// Deserialize a decimal string or number into `Option<f64>`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        String(String),
        Number(f64),
    }

    match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::String(s)) if s.trim().is_empty() => Ok(None),
        Some(RawAmount::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                log::warn!("Ignoring invalid amount '{s}': {e}");
                Ok(None)
            }
        },
        Some(RawAmount::Number(n)) => Ok(Some(n)),
        None => Ok(None),
    }
}
