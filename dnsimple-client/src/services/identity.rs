use crate::client::Client;
use crate::error::Result;
use crate::response::Response;
use crate::types::Whoami;

pub struct Identity<'a> {
    client: &'a Client,
}

impl<'a> Identity<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// The account or user the credentials belong to.
    pub async fn whoami(&self) -> Result<Response<Whoami>> {
        self.client.get("/whoami").await
    }
}
