use crate::client::{Client, NO_BODY};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{PrimaryServer, PrimaryServerInput, SecondaryZoneInput, Zone};

/// Primary servers and the secondary zones transferred from them.
///
/// See <https://developer.dnsimple.com/v2/secondary-dns/>.
pub struct SecondaryDns<'a> {
    client: &'a Client,
}

impl<'a> SecondaryDns<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list_primary_servers(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<PrimaryServer>>> {
        self.client
            .get_list(&format!("/{account}/secondary_dns/primaries"), options)
            .await
    }

    pub async fn create_primary_server(
        &self,
        account: u64,
        input: &PrimaryServerInput,
    ) -> Result<Response<PrimaryServer>> {
        self.client
            .post(&format!("/{account}/secondary_dns/primaries"), Some(input))
            .await
    }

    pub async fn get_primary_server(
        &self,
        account: u64,
        primary_server: u64,
    ) -> Result<Response<PrimaryServer>> {
        self.client
            .get(&format!(
                "/{account}/secondary_dns/primaries/{primary_server}"
            ))
            .await
    }

    pub async fn remove_primary_server(
        &self,
        account: u64,
        primary_server: u64,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "/{account}/secondary_dns/primaries/{primary_server}"
            ))
            .await
    }

    /// Link the primary server to the secondary name servers.
    pub async fn link_primary_server(
        &self,
        account: u64,
        primary_server: u64,
    ) -> Result<Response<PrimaryServer>> {
        self.client
            .put(
                &format!("/{account}/secondary_dns/primaries/{primary_server}/link"),
                NO_BODY,
            )
            .await
    }

    pub async fn unlink_primary_server(
        &self,
        account: u64,
        primary_server: u64,
    ) -> Result<Response<PrimaryServer>> {
        self.client
            .put(
                &format!("/{account}/secondary_dns/primaries/{primary_server}/unlink"),
                NO_BODY,
            )
            .await
    }

    pub async fn create_secondary_zone(
        &self,
        account: u64,
        input: &SecondaryZoneInput,
    ) -> Result<Response<Zone>> {
        self.client
            .post(&format!("/{account}/secondary_dns/zones"), Some(input))
            .await
    }
}
