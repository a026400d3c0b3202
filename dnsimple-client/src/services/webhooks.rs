use crate::client::Client;
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{Webhook, WebhookInput};

pub struct Webhooks<'a> {
    client: &'a Client,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list_webhooks(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<Webhook>>> {
        self.client
            .get_list(&format!("/{account}/webhooks"), options)
            .await
    }

    pub async fn create_webhook(
        &self,
        account: u64,
        input: &WebhookInput,
    ) -> Result<Response<Webhook>> {
        self.client
            .post(&format!("/{account}/webhooks"), Some(input))
            .await
    }

    pub async fn get_webhook(&self, account: u64, webhook: u64) -> Result<Response<Webhook>> {
        self.client
            .get(&format!("/{account}/webhooks/{webhook}"))
            .await
    }

    pub async fn delete_webhook(&self, account: u64, webhook: u64) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!("/{account}/webhooks/{webhook}"))
            .await
    }
}
