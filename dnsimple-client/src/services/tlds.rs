use crate::client::{Client, segment};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{ExtendedAttribute, Tld};

pub struct Tlds<'a> {
    client: &'a Client,
}

impl<'a> Tlds<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list_tlds(&self, options: &ListOptions) -> Result<Response<Vec<Tld>>> {
        self.client.get_list("/tlds", options).await
    }

    /// `tld` without the leading dot (`com`, `co.uk`).
    pub async fn get_tld(&self, tld: &str) -> Result<Response<Tld>> {
        self.client.get(&format!("/tlds/{}", segment(tld))).await
    }

    pub async fn get_tld_extended_attributes(
        &self,
        tld: &str,
    ) -> Result<Response<Vec<ExtendedAttribute>>> {
        self.client
            .get(&format!("/tlds/{}/extended_attributes", segment(tld)))
            .await
    }
}
