use crate::client::{Client, NO_BODY, segment};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{
    Certificate, CertificateDownload, CertificatePrivateKey, LetsencryptCertificateInput,
    LetsencryptCertificatePurchase, LetsencryptCertificateRenewal,
    LetsencryptCertificateRenewalInput,
};

/// SSL certificates of a domain, including Let's Encrypt orders.
///
/// See <https://developer.dnsimple.com/v2/certificates/>.
pub struct Certificates<'a> {
    client: &'a Client,
}

impl<'a> Certificates<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn base(account: u64, domain: &str) -> String {
        format!("/{account}/domains/{}/certificates", segment(domain))
    }

    pub async fn list_certificates(
        &self,
        account: u64,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<Certificate>>> {
        self.client
            .get_list(&Self::base(account, domain), options)
            .await
    }

    pub async fn get_certificate(
        &self,
        account: u64,
        domain: &str,
        certificate: u64,
    ) -> Result<Response<Certificate>> {
        self.client
            .get(&format!("{}/{certificate}", Self::base(account, domain)))
            .await
    }

    /// PEM-encoded server certificate, root and intermediate chain.
    pub async fn download_certificate(
        &self,
        account: u64,
        domain: &str,
        certificate: u64,
    ) -> Result<Response<CertificateDownload>> {
        self.client
            .get(&format!(
                "{}/{certificate}/download",
                Self::base(account, domain)
            ))
            .await
    }

    pub async fn get_certificate_private_key(
        &self,
        account: u64,
        domain: &str,
        certificate: u64,
    ) -> Result<Response<CertificatePrivateKey>> {
        self.client
            .get(&format!(
                "{}/{certificate}/private_key",
                Self::base(account, domain)
            ))
            .await
    }

    /// Order a Let's Encrypt certificate. Follow with
    /// [`issue_letsencrypt_certificate`](Self::issue_letsencrypt_certificate).
    pub async fn purchase_letsencrypt_certificate(
        &self,
        account: u64,
        domain: &str,
        input: &LetsencryptCertificateInput,
    ) -> Result<Response<LetsencryptCertificatePurchase>> {
        self.client
            .post(
                &format!("{}/letsencrypt", Self::base(account, domain)),
                Some(input),
            )
            .await
    }

    pub async fn issue_letsencrypt_certificate(
        &self,
        account: u64,
        domain: &str,
        purchase: u64,
    ) -> Result<Response<Certificate>> {
        self.client
            .post(
                &format!("{}/letsencrypt/{purchase}/issue", Self::base(account, domain)),
                NO_BODY,
            )
            .await
    }

    pub async fn purchase_letsencrypt_certificate_renewal(
        &self,
        account: u64,
        domain: &str,
        certificate: u64,
        input: &LetsencryptCertificateRenewalInput,
    ) -> Result<Response<LetsencryptCertificateRenewal>> {
        self.client
            .post(
                &format!(
                    "{}/letsencrypt/{certificate}/renewals",
                    Self::base(account, domain)
                ),
                Some(input),
            )
            .await
    }

    pub async fn issue_letsencrypt_certificate_renewal(
        &self,
        account: u64,
        domain: &str,
        certificate: u64,
        renewal: u64,
    ) -> Result<Response<Certificate>> {
        self.client
            .post(
                &format!(
                    "{}/letsencrypt/{certificate}/renewals/{renewal}/issue",
                    Self::base(account, domain)
                ),
                NO_BODY,
            )
            .await
    }
}
