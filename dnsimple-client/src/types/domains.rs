use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============ Domain ============

/// A domain in an account.
///
/// See <https://developer.dnsimple.com/v2/domains/>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub account_id: u64,
    pub registrant_id: Option<u64>,
    pub name: String,
    pub unicode_name: String,
    /// `hosted`, `registered`, `expired`...
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub private_whois: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub expires_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `create_domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomainInput {
    pub name: String,
}

// ============ Collaborators ============

/// A user invited to manage a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: u64,
    pub domain_id: u64,
    pub domain_name: String,
    pub user_id: Option<u64>,
    pub user_email: String,
    /// `true` until the invited email accepts the invitation.
    #[serde(default)]
    pub invitation: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCollaboratorInput {
    pub email: String,
}

// ============ DNSSEC ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dnssec {
    pub enabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A delegation signer (DS) record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationSigner {
    pub id: u64,
    pub domain_id: u64,
    pub algorithm: String,
    pub digest: Option<String>,
    pub digest_type: Option<String>,
    pub keytag: Option<String>,
    pub public_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `create_delegation_signer_record`.
///
/// Numeric DNSSEC values are passed as strings (`algorithm: "8"`,
/// `digest_type: "2"`). Registries that take a public key instead of a
/// digest use `public_key`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationSignerInput {
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keytag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

// ============ Email forwards ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailForward {
    pub id: u64,
    pub domain_id: u64,
    pub alias_email: String,
    pub destination_email: String,
    pub active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmailForward {
    /// Address mail is received on.
    pub fn email_from(&self) -> &str {
        &self.alias_email
    }

    /// Address mail is forwarded to.
    pub fn email_to(&self) -> &str {
        &self.destination_email
    }
}

/// Body of `create_email_forward`. `alias_name` is the local part (`jim` for `jim@example.com`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailForwardInput {
    pub alias_name: String,
    pub destination_email: String,
}

// ============ Pushes ============

/// A pending transfer of a domain to another account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Push {
    pub id: u64,
    pub domain_id: u64,
    pub contact_id: Option<u64>,
    pub account_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiatePushInput {
    pub new_account_email: String,
}

/// `contact_id` becomes the registrant when the domain is registered with DNSimple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptPushInput {
    pub contact_id: u64,
}

// ============ Research ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainResearchStatus {
    pub request_id: String,
    pub domain: String,
    /// `available`, `unavailable` or `unknown`.
    pub availability: String,
    #[serde(default)]
    pub errors: Vec<String>,
}
