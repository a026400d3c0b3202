use crate::client::Client;
use crate::error::Result;
use crate::params::ListOptions;
use crate::response::Response;
use crate::types::{DnsAnalytics, DnsAnalyticsTable};

/// DNS query volume.
///
/// See <https://developer.dnsimple.com/v2/dns-analytics/>.
pub struct DnsAnalyticsService<'a> {
    client: &'a Client,
}

impl<'a> DnsAnalyticsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Query DNS analytics.
    ///
    /// - filters: `start_date`, `end_date`
    /// - param `groupings`: `date`, `zone_name` or both, comma separated
    /// - sort: `date`, `zone_name` or `volume`
    ///
    /// ```rust,no_run
    /// # use dnsimple_client::{Client, ListOptions};
    /// # async fn run(client: Client) -> dnsimple_client::Result<()> {
    /// let opts = ListOptions::new()
    ///     .param("groupings", "date,zone_name")
    ///     .filter("start_date", "2024-08-01")
    ///     .filter("end_date", "2024-09-01")
    ///     .sort("volume:desc");
    /// let rows = client.dns_analytics().query(1010, &opts).await?.data;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query(
        &self,
        account: u64,
        options: &ListOptions,
    ) -> Result<Response<Vec<DnsAnalytics>>> {
        let response: Response<DnsAnalyticsTable> = self
            .client
            .get_with_query(&format!("/{account}/dns_analytics"), &options.to_query())
            .await?;
        response.try_map(DnsAnalyticsTable::into_records)
    }
}
