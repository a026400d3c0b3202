use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::amount;

/// A billing charge.
///
/// Amounts are sent by the API as decimal strings (`"14.50"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub invoiced_at: DateTime<Utc>,
    #[serde(default, with = "amount")]
    pub total_amount: Option<f64>,
    #[serde(default, with = "amount")]
    pub balance_amount: Option<f64>,
    pub reference: String,
    /// `collected` or `refunded`.
    pub state: String,
    #[serde(default)]
    pub items: Vec<ChargeItem>,
}

/// One line of a [`Charge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeItem {
    pub description: String,
    #[serde(default, with = "amount")]
    pub amount: Option<f64>,
    pub product_id: Option<u64>,
    pub product_type: String,
    pub product_reference: Option<String>,
}
