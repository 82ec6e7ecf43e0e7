use serde::{Deserialize, Serialize};

use crate::config::{RECORD_PROXIED, RECORD_TTL};

/// A zone as returned by `GET /zones`. Only the fields the updater
/// needs; the API returns far more.
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// An existing DNS record as returned by the records endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    pub content: String,
    pub r#type: String,
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
}

/// Request body for record create/update calls.
#[derive(Debug, Clone, Serialize)]
pub struct RecordData {
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl RecordData {
    /// An A record payload with the fixed TTL and proxy settings.
    pub fn a(name: &str, content: &str) -> Self {
        Self {
            r#type: "A".to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl: RECORD_TTL,
            proxied: RECORD_PROXIED,
        }
    }
}

/// Cloudflare's standard v4 response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_data_a_uses_fixed_settings() {
        let data = RecordData::a("home.example.com", "203.0.113.42");
        assert_eq!(data.r#type, "A");
        assert_eq!(data.ttl, 300);
        assert!(!data.proxied);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "A",
                "name": "home.example.com",
                "content": "203.0.113.42",
                "ttl": 300,
                "proxied": false,
            })
        );
    }

    #[test]
    fn test_record_deserializes_without_proxied() {
        let record: DnsRecord = serde_json::from_value(serde_json::json!({
            "id": "r1",
            "name": "home.example.com",
            "content": "203.0.113.42",
            "type": "A",
            "ttl": 300,
        }))
        .unwrap();
        assert!(!record.proxied);
    }
}
