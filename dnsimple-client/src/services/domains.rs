use crate::client::{Client, NO_BODY, segment};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{
    AcceptPushInput, AddCollaboratorInput, Collaborator, CreateDomainInput, DelegationSigner,
    DelegationSignerInput, Dnssec, Domain, DomainResearchStatus, EmailForward, EmailForwardInput,
    InitiatePushInput, Push,
};

/// Domains and the resources hanging off them: collaborators, DNSSEC,
/// delegation signer records, email forwards and pushes.
///
/// See <https://developer.dnsimple.com/v2/domains/>.
pub struct Domains<'a> {
    client: &'a Client,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn domain_path(account: u64, domain: &str) -> String {
        format!("/{account}/domains/{}", segment(domain))
    }

    // ============ Domains ============

    /// List domains. Filters: `name_like`, `registrant_id`. Sort: `id`, `name`, `expiration`.
    pub async fn list_domains(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<Domain>>> {
        self.client
            .get_list(&format!("/{account}/domains"), options)
            .await
    }

    /// Add a domain to the account (without registering it).
    pub async fn create_domain(
        &self,
        account: u64,
        input: &CreateDomainInput,
    ) -> Result<Response<Domain>> {
        self.client
            .post(&format!("/{account}/domains"), Some(input))
            .await
    }

    /// `domain` is a name or an id.
    pub async fn get_domain(&self, account: u64, domain: &str) -> Result<Response<Domain>> {
        self.client.get(&Self::domain_path(account, domain)).await
    }

    pub async fn delete_domain(&self, account: u64, domain: &str) -> Result<Response<()>> {
        self.client
            .delete_empty(&Self::domain_path(account, domain))
            .await
    }

    // ============ Collaborators ============

    pub async fn list_collaborators(
        &self,
        account: u64,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<Collaborator>>> {
        self.client
            .get_list(
                &format!("{}/collaborators", Self::domain_path(account, domain)),
                options,
            )
            .await
    }

    /// Invite a user by email. Unknown emails receive an invitation
    /// (`invitation: true` on the result).
    pub async fn add_collaborator(
        &self,
        account: u64,
        domain: &str,
        input: &AddCollaboratorInput,
    ) -> Result<Response<Collaborator>> {
        self.client
            .post(
                &format!("{}/collaborators", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn remove_collaborator(
        &self,
        account: u64,
        domain: &str,
        collaborator: u64,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "{}/collaborators/{collaborator}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ DNSSEC ============

    pub async fn get_dnssec(&self, account: u64, domain: &str) -> Result<Response<Dnssec>> {
        self.client
            .get(&format!("{}/dnssec", Self::domain_path(account, domain)))
            .await
    }

    pub async fn enable_dnssec(&self, account: u64, domain: &str) -> Result<Response<Dnssec>> {
        self.client
            .post(
                &format!("{}/dnssec", Self::domain_path(account, domain)),
                NO_BODY,
            )
            .await
    }

    pub async fn disable_dnssec(&self, account: u64, domain: &str) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!("{}/dnssec", Self::domain_path(account, domain)))
            .await
    }

    // ============ Delegation signer records ============

    pub async fn list_delegation_signer_records(
        &self,
        account: u64,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<DelegationSigner>>> {
        self.client
            .get_list(
                &format!("{}/ds_records", Self::domain_path(account, domain)),
                options,
            )
            .await
    }

    pub async fn create_delegation_signer_record(
        &self,
        account: u64,
        domain: &str,
        input: &DelegationSignerInput,
    ) -> Result<Response<DelegationSigner>> {
        self.client
            .post(
                &format!("{}/ds_records", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn get_delegation_signer_record(
        &self,
        account: u64,
        domain: &str,
        ds: u64,
    ) -> Result<Response<DelegationSigner>> {
        self.client
            .get(&format!(
                "{}/ds_records/{ds}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    pub async fn delete_delegation_signer_record(
        &self,
        account: u64,
        domain: &str,
        ds: u64,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "{}/ds_records/{ds}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ Email forwards ============

    pub async fn list_email_forwards(
        &self,
        account: u64,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<EmailForward>>> {
        self.client
            .get_list(
                &format!("{}/email_forwards", Self::domain_path(account, domain)),
                options,
            )
            .await
    }

    pub async fn create_email_forward(
        &self,
        account: u64,
        domain: &str,
        input: &EmailForwardInput,
    ) -> Result<Response<EmailForward>> {
        self.client
            .post(
                &format!("{}/email_forwards", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn get_email_forward(
        &self,
        account: u64,
        domain: &str,
        email_forward: u64,
    ) -> Result<Response<EmailForward>> {
        self.client
            .get(&format!(
                "{}/email_forwards/{email_forward}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    pub async fn delete_email_forward(
        &self,
        account: u64,
        domain: &str,
        email_forward: u64,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "{}/email_forwards/{email_forward}",
                Self::domain_path(account, domain)
            ))
            .await
    }

    // ============ Pushes ============

    /// Start moving a domain to the account owning `new_account_email`.
    pub async fn initiate_push(
        &self,
        account: u64,
        domain: &str,
        input: &InitiatePushInput,
    ) -> Result<Response<Push>> {
        self.client
            .post(
                &format!("{}/pushes", Self::domain_path(account, domain)),
                Some(input),
            )
            .await
    }

    /// Pushes waiting for the account to accept or reject.
    pub async fn list_pushes(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<Push>>> {
        self.client
            .get_list(&format!("/{account}/pushes"), options)
            .await
    }

    pub async fn accept_push(
        &self,
        account: u64,
        push: u64,
        input: &AcceptPushInput,
    ) -> Result<Response<()>> {
        self.client
            .post_empty(&format!("/{account}/pushes/{push}"), Some(input))
            .await
    }

    pub async fn reject_push(&self, account: u64, push: u64) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!("/{account}/pushes/{push}"))
            .await
    }

    // ============ Research ============

    /// Availability of a domain, as seen by the registry.
    pub async fn domain_research_status(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<DomainResearchStatus>> {
        self.client
            .get_with_query(
                &format!("/{account}/domains/research/status"),
                &[("domain".to_string(), domain.to_string())],
            )
            .await
    }
}
