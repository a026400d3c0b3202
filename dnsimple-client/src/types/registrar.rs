use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::amount;

/// Extended attributes sent with registrations, transfers and registrant
/// changes (e.g. `{"x-eu-registrant-citizenship": "it"}`).
pub type ExtendedAttributes = BTreeMap<String, String>;

// ============ Availability and prices ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheck {
    pub domain: String,
    pub available: bool,
    pub premium: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPremiumPrice {
    #[serde(default, with = "amount")]
    pub premium_price: Option<f64>,
    pub action: String,
}

/// Action a premium price is requested for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumPriceAction {
    #[default]
    Registration,
    Renewal,
    Transfer,
}

impl PremiumPriceAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Renewal => "renewal",
            Self::Transfer => "transfer",
        }
    }
}

/// Registration, renewal and transfer prices of a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPrices {
    pub domain: String,
    pub premium: bool,
    #[serde(default, with = "amount")]
    pub registration_price: Option<f64>,
    #[serde(default, with = "amount")]
    pub renewal_price: Option<f64>,
    #[serde(default, with = "amount")]
    pub transfer_price: Option<f64>,
    #[serde(default, with = "amount")]
    pub restore_price: Option<f64>,
}

// ============ Registration ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRegistration {
    pub id: u64,
    pub domain_id: u64,
    pub registrant_id: u64,
    pub period: u32,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub whois_privacy: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `register_domain`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterDomainInput {
    pub registrant_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_attributes: Option<ExtendedAttributes>,
    /// Required for premium domains, as returned by `get_domain_premium_price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<String>,
}

// ============ Transfer ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTransfer {
    pub id: u64,
    pub domain_id: u64,
    pub registrant_id: u64,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub whois_privacy: bool,
    pub status_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `transfer_domain`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferDomainInput {
    pub registrant_id: u64,
    /// Required by most TLDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_attributes: Option<ExtendedAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<String>,
}

/// Lock preventing a domain from being transferred away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTransferLock {
    pub enabled: bool,
}

// ============ Renewal and restore ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRenewal {
    pub id: u64,
    pub domain_id: u64,
    pub period: u32,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewDomainInput {
    /// Years; the API default is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRestore {
    pub id: u64,
    pub domain_id: u64,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreDomainInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<String>,
}

// ============ WHOIS privacy ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisPrivacy {
    pub id: u64,
    pub domain_id: u64,
    pub expires_on: Option<NaiveDate>,
    pub enabled: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisPrivacyRenewal {
    pub id: u64,
    pub domain_id: u64,
    pub whois_privacy_id: u64,
    pub state: String,
    pub enabled: bool,
    pub expires_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============ Registrant changes ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrantChange {
    pub id: u64,
    pub account_id: u64,
    pub contact_id: u64,
    pub domain_id: u64,
    /// `new`, `pending`, `cancelling`, `cancelled` or `completed`.
    pub state: String,
    #[serde(default)]
    pub extended_attributes: ExtendedAttributes,
    pub registry_owner_change: bool,
    pub irt_lock_lifted_by: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of `check_registrant_change`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrantChangeCheck {
    pub contact_id: u64,
    pub domain_id: u64,
    #[serde(default)]
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub registry_owner_change: bool,
}

/// Body of `create_registrant_change`. `domain_id` accepts a domain name or id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRegistrantChangeInput {
    pub domain_id: String,
    pub contact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_attributes: Option<ExtendedAttributes>,
}

/// Body of `check_registrant_change`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRegistrantChangeInput {
    pub domain_id: String,
    pub contact_id: String,
}

// ============ TLD extended attributes ============

/// An extended attribute a TLD requires or accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedAttribute {
    pub name: String,
    pub description: Option<String>,
    pub required: bool,
    #[serde(default)]
    pub options: Vec<ExtendedAttributeOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedAttributeOption {
    pub title: String,
    pub value: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_input_sends_only_registrant_by_default() {
        let input = RegisterDomainInput {
            registrant_id: 2,
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&input).unwrap(), r#"{"registrant_id":2}"#);
    }

    #[test]
    fn transfer_input_with_extended_attributes() {
        let input = TransferDomainInput {
            registrant_id: 2,
            auth_code: Some("x1y2z3".to_string()),
            extended_attributes: Some([("x-eu-registrant-citizenship".to_string(), "it".to_string())].into()),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&input).unwrap();
        assert_eq!(json["auth_code"], "x1y2z3");
        assert_eq!(json["extended_attributes"]["x-eu-registrant-citizenship"], "it");
        assert!(json.get("whois_privacy").is_none());
    }

    #[test]
    fn premium_price_string_becomes_number() {
        let p: DomainPremiumPrice =
            serde_json::from_str(r#"{"premium_price":"109.00","action":"registration"}"#).unwrap();
        assert_eq!(p.premium_price, Some(109.0));
    }

    #[test]
    fn premium_price_action_names() {
        assert_eq!(PremiumPriceAction::default().as_str(), "registration");
        assert_eq!(PremiumPriceAction::Transfer.as_str(), "transfer");
    }
}
