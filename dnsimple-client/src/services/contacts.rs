use crate::client::Client;
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{Contact, ContactInput};

/// Contacts of an account.
///
/// See <https://developer.dnsimple.com/v2/contacts/>.
pub struct Contacts<'a> {
    client: &'a Client,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list_contacts(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<Contact>>> {
        self.client
            .get_list(&format!("/{account}/contacts"), options)
            .await
    }

    pub async fn create_contact(
        &self,
        account: u64,
        input: &ContactInput,
    ) -> Result<Response<Contact>> {
        self.client
            .post(&format!("/{account}/contacts"), Some(input))
            .await
    }

    pub async fn get_contact(&self, account: u64, contact: u64) -> Result<Response<Contact>> {
        self.client
            .get(&format!("/{account}/contacts/{contact}"))
            .await
    }

    pub async fn update_contact(
        &self,
        account: u64,
        contact: u64,
        input: &ContactInput,
    ) -> Result<Response<Contact>> {
        self.client
            .patch(&format!("/{account}/contacts/{contact}"), Some(input))
            .await
    }

    pub async fn delete_contact(&self, account: u64, contact: u64) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!("/{account}/contacts/{contact}"))
            .await
    }
}
