use crate::client::{Client, NO_BODY, segment};
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{
    BatchChangeZoneRecordsInput, BatchChangeZoneRecordsResult, UpdateZoneNsRecordsInput, Zone,
    ZoneDistribution, ZoneFile, ZoneRecord, ZoneRecordInput, ZoneRecordUpdateInput,
};

/// Zones and zone records.
///
/// See <https://developer.dnsimple.com/v2/zones/>.
pub struct Zones<'a> {
    client: &'a Client,
}

impl<'a> Zones<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn zone_path(account: u64, zone: &str) -> String {
        format!("/{account}/zones/{}", segment(zone))
    }

    // ============ Zones ============

    /// List zones. Filter: `name_like`. Sort: `id`, `name`.
    pub async fn list_zones(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<Zone>>> {
        self.client
            .get_list(&format!("/{account}/zones"), options)
            .await
    }

    pub async fn get_zone(&self, account: u64, zone: &str) -> Result<Response<Zone>> {
        self.client.get(&Self::zone_path(account, zone)).await
    }

    pub async fn get_zone_file(&self, account: u64, zone: &str) -> Result<Response<ZoneFile>> {
        self.client
            .get(&format!("{}/file", Self::zone_path(account, zone)))
            .await
    }

    pub async fn check_zone_distribution(
        &self,
        account: u64,
        zone: &str,
    ) -> Result<Response<ZoneDistribution>> {
        self.client
            .get(&format!("{}/distribution", Self::zone_path(account, zone)))
            .await
    }

    pub async fn update_zone_ns_records(
        &self,
        account: u64,
        zone: &str,
        input: &UpdateZoneNsRecordsInput,
    ) -> Result<Response<Vec<ZoneRecord>>> {
        self.client
            .put(
                &format!("{}/ns_records", Self::zone_path(account, zone)),
                Some(input),
            )
            .await
    }

    /// Turn DNS resolution on for the zone.
    pub async fn activate_dns(&self, account: u64, zone: &str) -> Result<Response<Zone>> {
        self.client
            .put(
                &format!("{}/activation", Self::zone_path(account, zone)),
                NO_BODY,
            )
            .await
    }

    pub async fn deactivate_dns(&self, account: u64, zone: &str) -> Result<Response<Zone>> {
        self.client
            .delete(&format!("{}/activation", Self::zone_path(account, zone)))
            .await
    }

    // ============ Records ============

    /// List records. Filters: `name_like`, `name` (exact, `""` for the
    /// apex), `type`. Sort: `id`, `name`, `content`, `type`.
    pub async fn list_records(
        &self,
        account: u64,
        zone: &str,
        options: &ListOptions,
    ) -> Result<Response<Vec<ZoneRecord>>> {
        self.client
            .get_list(
                &format!("{}/records", Self::zone_path(account, zone)),
                options,
            )
            .await
    }

    pub async fn create_record(
        &self,
        account: u64,
        zone: &str,
        input: &ZoneRecordInput,
    ) -> Result<Response<ZoneRecord>> {
        self.client
            .post(
                &format!("{}/records", Self::zone_path(account, zone)),
                Some(input),
            )
            .await
    }

    pub async fn get_record(
        &self,
        account: u64,
        zone: &str,
        record: u64,
    ) -> Result<Response<ZoneRecord>> {
        self.client
            .get(&format!(
                "{}/records/{record}",
                Self::zone_path(account, zone)
            ))
            .await
    }

    pub async fn update_record(
        &self,
        account: u64,
        zone: &str,
        record: u64,
        input: &ZoneRecordUpdateInput,
    ) -> Result<Response<ZoneRecord>> {
        self.client
            .patch(
                &format!("{}/records/{record}", Self::zone_path(account, zone)),
                Some(input),
            )
            .await
    }

    pub async fn delete_record(
        &self,
        account: u64,
        zone: &str,
        record: u64,
    ) -> Result<Response<()>> {
        self.client
            .delete_empty(&format!(
                "{}/records/{record}",
                Self::zone_path(account, zone)
            ))
            .await
    }

    pub async fn check_zone_record_distribution(
        &self,
        account: u64,
        zone: &str,
        record: u64,
    ) -> Result<Response<ZoneDistribution>> {
        self.client
            .get(&format!(
                "{}/records/{record}/distribution",
                Self::zone_path(account, zone)
            ))
            .await
    }

    /// Create, update and delete records in one request.
    pub async fn batch_change_zone_records(
        &self,
        account: u64,
        zone: &str,
        input: &BatchChangeZoneRecordsInput,
    ) -> Result<Response<BatchChangeZoneRecordsResult>> {
        self.client
            .post(
                &format!("{}/batch", Self::zone_path(account, zone)),
                Some(input),
            )
            .await
    }
}
