use crate::client::Client;
use crate::error::Result;
use crate::response::Response;
use crate::types::Account;

/// Accounts reachable with the current credentials.
pub struct Accounts<'a> {
    client: &'a Client,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// With an account token this is the token's account; with user
    /// credentials, every account the user belongs to.
    pub async fn list_accounts(&self) -> Result<Response<Vec<Account>>> {
        self.client.get("/accounts").await
    }
}
