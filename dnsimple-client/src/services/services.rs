use crate::client::{Client, segment};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{Service, ServiceSettingsInput};

/// One-click services and the domains they are applied to.
///
/// See <https://developer.dnsimple.com/v2/services/>.
pub struct Services<'a> {
    client: &'a Client,
}

impl<'a> Services<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list_services(&self, options: &ListOptions) -> Result<Response<Vec<Service>>> {
        self.client.get_list("/services", options).await
    }

    /// `service` is an id or a sid.
    pub async fn get_service(&self, service: &str) -> Result<Response<Service>> {
        self.client
            .get(&format!("/services/{}", segment(service)))
            .await
    }

    pub async fn applied_services(
        &self,
        account: u64,
        domain: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<Service>>> {
        self.client
            .get_list(
                &format!("/{account}/domains/{}/services", segment(domain)),
                options,
            )
            .await
    }

    pub async fn apply_service(
        &self,
        account: u64,
        domain: &str,
        service: &str,
        settings: &ServiceSettingsInput,
    ) -> Result<Response<()>> {
        self.client
            .post_empty(
                &format!(
                    "/{account}/domains/{}/services/{}",
                    segment(domain),
                    segment(service)
                ),
                Some(settings),
            )
            .await
    }

    pub async fn unapply_service(
        &self,
        account: u64,
        domain: &str,
        service: &str,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "/{account}/domains/{}/services/{}",
                segment(domain),
                segment(service)
            ))
            .await
    }
}
