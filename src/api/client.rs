use super::models::{DnsRecord, RecordData, Zone};
use crate::error::Result;
use async_trait::async_trait;

/// The slice of the provider API the reconciler depends on. Kept as a
/// trait so tests can drive the reconciler without a network.
#[async_trait]
pub trait DnsApiClient {
    /// All zones visible to the credential.
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// The first A record in the zone matching `name`, if any. More than
    /// one match is possible; the provider's first is taken as-is.
    async fn find_record(&self, zone_id: &str, name: &str) -> Result<Option<DnsRecord>>;

    async fn create_record(&self, zone_id: &str, data: &RecordData) -> Result<DnsRecord>;

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        data: &RecordData,
    ) -> Result<DnsRecord>;
}
