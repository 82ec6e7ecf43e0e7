use std::time::Duration;

use super::{client::DnsApiClient, models::*};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin reqwest wrapper around the Cloudflare v4 REST API.
pub struct CloudflareClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

impl CloudflareClient {
    pub fn new(api_token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::api(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_token,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Unwrap Cloudflare's `{result, success, errors}` envelope.
    fn decode<T: DeserializeOwned>(text: &str) -> std::result::Result<T, String> {
        let parsed: ApiResponse<T> = serde_json::from_str(text)
            .map_err(|e| format!("failed to parse API response: {}. Response: {}", e, text))?;

        if !parsed.success {
            return Err(format!("API request failed: {:?}", parsed.errors));
        }

        Ok(parsed.result)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;

        let text = response.text().await.map_err(|e| Error::api(e.to_string()))?;
        Self::decode(&text).map_err(Error::api)
    }
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.get(format!("{}/zones", self.base_url), &[]).await
    }

    async fn find_record(&self, zone_id: &str, name: &str) -> Result<Option<DnsRecord>> {
        let records: Vec<DnsRecord> = self
            .get(
                format!("{}/zones/{}/dns_records", self.base_url, zone_id),
                &[("name", name), ("type", "A")],
            )
            .await?;

        // Provider-defined order; first match wins.
        Ok(records.into_iter().next())
    }

    async fn create_record(&self, zone_id: &str, data: &RecordData) -> Result<DnsRecord> {
        let response = self
            .client
            .post(format!("{}/zones/{}/dns_records", self.base_url, zone_id))
            .bearer_auth(&self.api_token)
            .json(data)
            .send()
            .await
            .map_err(|e| Error::provider_write(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::provider_write(e.to_string()))?;
        Self::decode(&text).map_err(Error::provider_write)
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        data: &RecordData,
    ) -> Result<DnsRecord> {
        let response = self
            .client
            .put(format!(
                "{}/zones/{}/dns_records/{}",
                self.base_url, zone_id, record_id
            ))
            .bearer_auth(&self.api_token)
            .json(data)
            .send()
            .await
            .map_err(|e| Error::provider_write(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| Error::provider_write(e.to_string()))?;
        Self::decode(&text).map_err(Error::provider_write)
    }
}
