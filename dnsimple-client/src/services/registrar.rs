use crate::client::{Client, NO_BODY, segment};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{
    CheckRegistrantChangeInput, CreateRegistrantChangeInput, DomainCheck, DomainPremiumPrice,
    DomainPrices, DomainRegistration, DomainRenewal, DomainRestore, DomainTransfer,
    DomainTransferLock, PremiumPriceAction, RegisterDomainInput, RegistrantChange,
    RegistrantChangeCheck, RenewDomainInput, RestoreDomainInput, TransferDomainInput,
    VanityNameServer, WhoisPrivacy, WhoisPrivacyRenewal,
};

/// Domain registration, transfer, renewal and the registrar-side settings
/// of a domain.
///
/// See <https://developer.dnsimple.com/v2/registrar/>.
pub struct Registrar<'a> {
    client: &'a Client,
}

impl<'a> Registrar<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn domain_path(account: u64, domain: &str) -> String {
        format!("/{account}/registrar/domains/{}", segment(domain))
    }

    // ============ Availability and prices ============

    pub async fn check_domain(&self, account: u64, domain: &str) -> Result<Response<DomainCheck>> {
        self.client
            .get(&format!("{}/check", Self::domain_path(account, domain)))
            .await
    }

    /// Premium price for `action`; the API defaults to registration when
    /// no action is given. Answers `400` for non-premium domains.
    pub async fn get_domain_premium_price(
        &self,
        account: u64,
        domain: &str,
        action: Option<PremiumPriceAction>,
    ) -> Result<Response<DomainPremiumPrice>> {
        let query: Vec<(String, String)> = action
            .map(|a| ("action".to_string(), a.as_str().to_string()))
            .into_iter()
            .collect();
        self.client
            .get_with_query(
                &format!("{}/premium_price", Self::domain_path(account, domain)),
                &query,
            )
            .await
    }

    pub async fn get_domain_prices(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<DomainPrices>> {
        self.client
            .get(&format!("{}/prices", Self::domain_path(account, domain)))
            .await
    }

    // ============ Registration ============

    pub async fn register_domain(
        &self,
        account: u64,
        domain: &str,
        input: &RegisterDomainInput,
    ) -> Result<Response<DomainRegistration>> {
        self.client
            .post(
                &format!("{}/registrations", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn get_domain_registration(
        &self,
        account: u64,
        domain: &str,
        registration: u64,
    ) -> Result<Response<DomainRegistration>> {
        self.client
            .get(&format!(
                "{}/registrations/{registration}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ Transfer ============

    pub async fn transfer_domain(
        &self,
        account: u64,
        domain: &str,
        input: &TransferDomainInput,
    ) -> Result<Response<DomainTransfer>> {
        self.client
            .post(
                &format!("{}/transfers", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn get_domain_transfer(
        &self,
        account: u64,
        domain: &str,
        transfer: u64,
    ) -> Result<Response<DomainTransfer>> {
        self.client
            .get(&format!(
                "{}/transfers/{transfer}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    /// Cancel an in-progress transfer. Answers `202` with the transfer in
    /// state `cancelling`.
    pub async fn cancel_domain_transfer(
        &self,
        account: u64,
        domain: &str,
        transfer: u64,
    ) -> Result<Response<DomainTransfer>> {
        self.client
            .delete(&format!(
                "{}/transfers/{transfer}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    /// Unlock the domain and email the auth code to the registrant.
    pub async fn transfer_domain_out(&self, account: u64, domain: &str) -> Result<Response<()>> {
        self.client
            .post_empty(
                &format!(
                    "{}/authorize_transfer_out",
                    Self::domain_path(account, domain)
                ),
                NO_BODY,
            )
            .await
    }

    // ============ Renewal and restore ============

    pub async fn renew_domain(
        &self,
        account: u64,
        domain: &str,
        input: &RenewDomainInput,
    ) -> Result<Response<DomainRenewal>> {
        self.client
            .post(
                &format!("{}/renewals", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn get_domain_renewal(
        &self,
        account: u64,
        domain: &str,
        renewal: u64,
    ) -> Result<Response<DomainRenewal>> {
        self.client
            .get(&format!(
                "{}/renewals/{renewal}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    /// Restore an expired domain still in its redemption period.
    pub async fn restore_domain(
        &self,
        account: u64,
        domain: &str,
        input: &RestoreDomainInput,
    ) -> Result<Response<DomainRestore>> {
        self.client
            .post(
                &format!("{}/restores", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn get_domain_restore(
        &self,
        account: u64,
        domain: &str,
        restore: u64,
    ) -> Result<Response<DomainRestore>> {
        self.client
            .get(&format!(
                "{}/restores/{restore}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ Delegation ============

    /// Name servers the domain is delegated to.
    pub async fn get_domain_delegation(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<Vec<String>>> {
        self.client
            .get(&format!("{}/delegation", Self::domain_path(account, domain)))
            .await
    }

    pub async fn change_domain_delegation(
        &self,
        account: u64,
        domain: &str,
        name_servers: &[String],
    ) -> Result<Response<Vec<String>>> {
        self.client
            .put(
                &format!("{}/delegation", Self::domain_path(account, domain)),
                Some(name_servers),
            )
            .await
    }

    /// Delegate to vanity name servers (`ns1.example.com`...).
    pub async fn change_domain_delegation_to_vanity(
        &self,
        account: u64,
        domain: &str,
        name_servers: &[String],
    ) -> Result<Response<Vec<VanityNameServer>>> {
        self.client
            .put(
                &format!(
                    "{}/delegation/vanity",
                    Self::domain_path(account, domain)
                ),
                Some(name_servers),
            )
            .await
    }

    pub async fn change_domain_delegation_from_vanity(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "{}/delegation/vanity",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ Auto renewal ============

    pub async fn enable_domain_auto_renewal(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<()>> {
        self.client
            .put_empty(
                &format!("{}/auto_renewal", Self::domain_path(account, domain)),
                NO_BODY,
            )
            .await
    }

    pub async fn disable_domain_auto_renewal(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "{}/auto_renewal",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ WHOIS privacy ============

    pub async fn get_whois_privacy(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<WhoisPrivacy>> {
        self.client
            .get(&format!(
                "{}/whois_privacy",
                Self::domain_path(account, domain)
            ))
            .await
    }

    /// Answers `201` when privacy was purchased, `200` when it was already owned.
    pub async fn enable_whois_privacy(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<WhoisPrivacy>> {
        self.client
            .put(
                &format!("{}/whois_privacy", Self::domain_path(account, domain)),
                NO_BODY,
            )
            .await
    }

    pub async fn disable_whois_privacy(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<WhoisPrivacy>> {
        self.client
            .delete(&format!(
                "{}/whois_privacy",
                Self::domain_path(account, domain)
            ))
            .await
    }

    pub async fn renew_whois_privacy(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<WhoisPrivacyRenewal>> {
        self.client
            .post(
                &format!(
                    "{}/whois_privacy/renewals",
                    Self::domain_path(account, domain)
                ),
                NO_BODY,
            )
            .await
    }

    // ============ Transfer lock ============

    pub async fn get_domain_transfer_lock(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<DomainTransferLock>> {
        self.client
            .get(&format!(
                "{}/transfer_lock",
                Self::domain_path(account, domain)
            ))
            .await
    }

    pub async fn enable_domain_transfer_lock(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<DomainTransferLock>> {
        self.client
            .post(
                &format!("{}/transfer_lock", Self::domain_path(account, domain)),
                NO_BODY,
            )
            .await
    }

    pub async fn disable_domain_transfer_lock(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<DomainTransferLock>> {
        self.client
            .delete(&format!(
                "{}/transfer_lock",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ Registrant changes ============

    pub async fn list_registrant_changes(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<RegistrantChange>>> {
        self.client
            .get_list(&format!("/{account}/registrar/registrant_changes"), options)
            .await
    }

    pub async fn create_registrant_change(
        &self,
        account: u64,
        input: &CreateRegistrantChangeInput,
    ) -> Result<Response<RegistrantChange>> {
        self.client
            .post(
                &format!("/{account}/registrar/registrant_changes"),
                Some(input),
            )
            .await
    }

    /// Which extended attributes a registrant change needs and whether it
    /// is a registry owner change.
    pub async fn check_registrant_change(
        &self,
        account: u64,
        input: &CheckRegistrantChangeInput,
    ) -> Result<Response<RegistrantChangeCheck>> {
        self.client
            .post(
                &format!("/{account}/registrar/registrant_changes/check"),
                Some(input),
            )
            .await
    }

    pub async fn get_registrant_change(
        &self,
        account: u64,
        registrant_change: u64,
    ) -> Result<Response<RegistrantChange>> {
        self.client
            .get(&format!(
                "/{account}/registrar/registrant_changes/{registrant_change}"
            ))
            .await
    }

    /// Cancel a registrant change. `data` is the change in state
    /// `cancelling` when the API answers `202`, `None` on `204`.
    pub async fn delete_registrant_change(
        &self,
        account: u64,
        registrant_change: u64,
    ) -> Result<Response<Option<RegistrantChange>>> {
        self.client
            .delete_optional(&format!(
                "/{account}/registrar/registrant_changes/{registrant_change}"
            ))
            .await
    }
}
