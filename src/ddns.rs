use std::net::Ipv4Addr;

use log::info;

use crate::api::models::RecordData;
use crate::api::DnsApiClient;
use crate::config::Config;
use crate::error::{Error, Result};

/// Which provider write a run performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Created,
    Updated,
}

/// Drives one reconciliation: find the zone, look up the managed record,
/// then create or update it. Exactly one write call per run, always —
/// an unchanged IP still refreshes the record's TTL and proxy settings.
pub struct DdnsUpdater<'a, C: DnsApiClient> {
    client: &'a C,
    config: &'a Config,
}

impl<'a, C: DnsApiClient> DdnsUpdater<'a, C> {
    pub fn new(client: &'a C, config: &'a Config) -> Self {
        Self { client, config }
    }

    pub async fn run(&self, public_ip: Ipv4Addr) -> Result<WriteAction> {
        let zone_id = self.find_zone_id().await?;
        let name = &self.config.managed_name;
        let data = RecordData::a(name, &public_ip.to_string());

        match self.client.find_record(&zone_id, name).await? {
            Some(existing) => {
                self.client
                    .update_record(&zone_id, &existing.id, &data)
                    .await?;
                info!("updated record {} to {}", name, public_ip);
                Ok(WriteAction::Updated)
            }
            None => {
                self.client.create_record(&zone_id, &data).await?;
                info!("created record {} with IP {}", name, public_ip);
                Ok(WriteAction::Created)
            }
        }
    }

    /// Exact, case-sensitive match of the target domain against the
    /// account's zone list.
    async fn find_zone_id(&self) -> Result<String> {
        let zones = self.client.list_zones().await?;
        zones
            .into_iter()
            .find(|zone| zone.name == self.config.target_zone)
            .map(|zone| zone.id)
            .ok_or_else(|| Error::zone_not_found(&self.config.target_zone))
    }
}
