use crate::client::{Client, NO_BODY, segment};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{Template, TemplateInput, TemplateRecord, TemplateRecordInput};

/// Record templates.
///
/// `template` arguments accept the numeric id or the sid.
pub struct Templates<'a> {
    client: &'a Client,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn template_path(account: u64, template: &str) -> String {
        format!("/{account}/templates/{}", segment(template))
    }

    pub async fn list_templates(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<Template>>> {
        self.client
            .get_list(&format!("/{account}/templates"), options)
            .await
    }

    pub async fn create_template(
        &self,
        account: u64,
        input: &TemplateInput,
    ) -> Result<Response<Template>> {
        self.client
            .post(&format!("/{account}/templates"), Some(input))
            .await
    }

    pub async fn get_template(&self, account: u64, template: &str) -> Result<Response<Template>> {
        self.client
            .get(&Self::template_path(account, template))
            .await
    }

    pub async fn update_template(
        &self,
        account: u64,
        template: &str,
        input: &TemplateInput,
    ) -> Result<Response<Template>> {
        self.client
            .patch(&Self::template_path(account, template), Some(input))
            .await
    }

    pub async fn delete_template(&self, account: u64, template: &str) -> Result<Response<()>> {
        self.client
            .delete_empty(&Self::template_path(account, template))
            .await
    }

    // ============ Records ============

    pub async fn list_template_records(
        &self,
        account: u64,
        template: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<TemplateRecord>>> {
        self.client
            .get_list(
                &format!("{}/records", Self::template_path(account, template)),
                options,
            )
            .await
    }

    pub async fn create_template_record(
        &self,
        account: u64,
        template: &str,
        input: &TemplateRecordInput,
    ) -> Result<Response<TemplateRecord>> {
        self.client
            .post(
                &format!("{}/records", Self::template_path(account, template)),
                Some(input),
            )
            .await
    }

    pub async fn get_template_record(
        &self,
        account: u64,
        template: &str,
        record: u64,
    ) -> Result<Response<TemplateRecord>> {
        self.client
            .get(&format!(
                "{}/records/{record}",
                Self::template_path(account, template)
            ))
            .await
    }

    pub async fn delete_template_record(
        &self,
        account: u64,
        template: &str,
        record: u64,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "{}/records/{record}",
                Self::template_path(account, template)
            ))
            .await
    }

    /// Create the template's records in the domain's zone.
    pub async fn apply_template(
        &self,
        account: u64,
        domain: &str,
        template: &str,
    ) -> Result<Response<()>> {
        self.client
            .post_empty(
                &format!(
                    "/{account}/domains/{}/templates/{}",
                    segment(domain),
                    segment(template)
                ),
                NO_BODY,
            )
            .await
    }
}
