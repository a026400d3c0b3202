use serde::{Deserialize, Serialize};

/// A top level domain supported by the registrar.
///
/// See <https://developer.dnsimple.com/v2/tlds/>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tld {
    pub tld: String,
    /// 1 = gTLD, 2 = ccTLD, 3 = new TLD.
    pub tld_type: u8,
    pub whois_privacy: bool,
    pub auto_renew_only: bool,
    pub idn: bool,
    pub minimum_registration: u32,
    pub registration_enabled: bool,
    pub renewal_enabled: bool,
    pub transfer_enabled: bool,
    /// `ds` or `key`.
    pub dnssec_interface_type: Option<String>,
    pub name_server_min: Option<u32>,
    pub name_server_max: Option<u32>,
}
