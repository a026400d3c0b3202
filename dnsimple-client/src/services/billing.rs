use crate::client::Client;
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::Charge;

pub struct Billing<'a> {
    client: &'a Client,
}

impl<'a> Billing<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List billing charges.
    ///
    /// Filters: `start_date`, `end_date` (`YYYY-MM-DD`). Sort: `invoiced:asc|desc`.
    pub async fn list_charges(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<Charge>>> {
        self.client
            .get_list(&format!("/{account}/billing/charges"), options)
            .await
    }
}
