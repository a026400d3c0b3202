//! Records exchanged with the API.
//!
//! Response types mirror the JSON objects field for field. Input types
//! (`*Input`) omit unset fields when serialized.

mod analytics;
mod billing;
mod certificates;
mod contacts;
mod domains;
mod identity;
mod oauth;
mod registrar;
mod secondary_dns;
mod services;
mod templates;
mod tlds;
mod vanity;
pub mod webhook;
mod webhooks;
mod zones;

pub use analytics::{DnsAnalytics, DnsAnalyticsTable};
pub use billing::{Charge, ChargeItem};
pub use certificates::{
    Certificate, CertificateDownload, CertificatePrivateKey, LetsencryptCertificateInput,
    LetsencryptCertificatePurchase, LetsencryptCertificateRenewal,
    LetsencryptCertificateRenewalInput,
};
pub use contacts::{Contact, ContactInput};
pub use domains::{
    AcceptPushInput, AddCollaboratorInput, Collaborator, CreateDomainInput, DelegationSigner,
    DelegationSignerInput, Dnssec, Domain, DomainResearchStatus, EmailForward, EmailForwardInput,
    InitiatePushInput, Push,
};
pub use identity::{Account, User, Whoami};
pub use oauth::AccessToken;
pub(crate) use oauth::ExchangeAuthorizationInput;
pub use registrar::{
    CheckRegistrantChangeInput, CreateRegistrantChangeInput, DomainCheck, DomainPremiumPrice,
    DomainPrices, DomainRegistration, DomainRenewal, DomainRestore, DomainTransfer,
    DomainTransferLock, ExtendedAttribute, ExtendedAttributeOption, ExtendedAttributes,
    PremiumPriceAction, RegisterDomainInput, RegistrantChange, RegistrantChangeCheck,
    RenewDomainInput, RestoreDomainInput, TransferDomainInput, WhoisPrivacy, WhoisPrivacyRenewal,
};
pub use secondary_dns::{PrimaryServer, PrimaryServerInput, SecondaryZoneInput};
pub use services::{Service, ServiceSetting, ServiceSettingsInput};
pub use templates::{Template, TemplateInput, TemplateRecord, TemplateRecordInput};
pub use tlds::Tld;
pub use vanity::VanityNameServer;
pub use webhook::WebhookPayload;
pub use webhooks::{Webhook, WebhookInput};
pub use zones::{
    BatchChangeZoneRecordsInput, BatchChangeZoneRecordsResult, BatchDeleteZoneRecord,
    BatchUpdateZoneRecord, UpdateZoneNsRecordsInput, Zone, ZoneDistribution, ZoneFile, ZoneRecord,
    ZoneRecordInput, ZoneRecordUpdateInput,
};
