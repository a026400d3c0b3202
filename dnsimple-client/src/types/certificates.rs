use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An SSL certificate.
///
/// See <https://developer.dnsimple.com/v2/certificates/>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u64,
    pub domain_id: u64,
    pub contact_id: Option<u64>,
    pub name: String,
    pub common_name: String,
    pub years: u32,
    pub csr: Option<String>,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub authority_identifier: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expires_on: Option<NaiveDate>,
}

/// The PEM bundle of an issued certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateDownload {
    pub server: String,
    pub root: Option<String>,
    #[serde(default)]
    pub chain: Vec<String>,
}

/// The private key of a certificate.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificatePrivateKey {
    pub private_key: String,
}

impl std::fmt::Debug for CertificatePrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificatePrivateKey")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// A Let's Encrypt certificate order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetsencryptCertificatePurchase {
    pub id: u64,
    pub certificate_id: u64,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A Let's Encrypt certificate renewal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetsencryptCertificateRenewal {
    pub id: u64,
    pub old_certificate_id: u64,
    pub new_certificate_id: u64,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of [`purchase_letsencrypt_certificate`](crate::services::Certificates::purchase_letsencrypt_certificate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetsencryptCertificateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// Subdomain part of the common name (`www` for `www.example.com`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_names: Option<Vec<String>>,
    /// `ECDSA` or `RSA`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
}

/// Body of [`purchase_letsencrypt_certificate_renewal`](crate::services::Certificates::purchase_letsencrypt_certificate_renewal).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetsencryptCertificateRenewalInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
}
