//! One handle per API resource group, borrowed from [`Client`](crate::Client).
//!
//! Each method is one HTTP call: build the path, pick the verb, send the
//! body and decode the typed response.

mod accounts;
mod billing;
mod certificates;
mod contacts;
mod dns_analytics;
mod domains;
mod identity;
mod oauth;
mod registrar;
mod secondary_dns;
mod services;
mod templates;
mod tlds;
mod vanity_name_servers;
mod webhooks;
mod zones;

pub use accounts::Accounts;
pub use billing::Billing;
pub use certificates::Certificates;
pub use contacts::Contacts;
pub use dns_analytics::DnsAnalyticsService;
pub use domains::Domains;
pub use identity::Identity;
pub use oauth::Oauth;
pub use registrar::Registrar;
pub use secondary_dns::SecondaryDns;
pub use services::Services;
pub use templates::Templates;
pub use tlds::Tlds;
pub use vanity_name_servers::VanityNameServers;
pub use webhooks::Webhooks;
pub use zones::Zones;
