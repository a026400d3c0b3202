use crate::client::{Client, NO_BODY, segment};
use crate::error::Result;
use crate::response::Response;
use crate::types::VanityNameServer;

/// Vanity name servers for domains not registered with DNSimple.
pub struct VanityNameServers<'a> {
    client: &'a Client,
}

impl<'a> VanityNameServers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn enable_vanity_name_servers(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<Vec<VanityNameServer>>> {
        self.client
            .put(&format!("/{account}/vanity/{}", segment(domain)), NO_BODY)
            .await
    }

    pub async fn disable_vanity_name_servers(
        &self,
        account: u64,
        domain: &str,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!("/{account}/vanity/{}", segment(domain)))
            .await
    }
}
