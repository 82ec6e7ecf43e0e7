//! Error types for the updater.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run. Every variant is fatal: there are no
/// retries, and the first error terminates the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty credential / bad environment configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Public IP lookup against OpenDNS failed
    #[error("public IP resolution failed: {0}")]
    Resolution(String),

    /// The target domain is not present in the Cloudflare account
    #[error("zone not found: {0}")]
    ZoneNotFound(String),

    /// A record create/update call was rejected or failed in transit
    #[error("provider write failed: {0}")]
    ProviderWrite(String),

    /// The audit log row could not be written
    #[error("audit log write failed: {0}")]
    LogWrite(String),

    /// Cloudflare API read failed (transport, decode, or error envelope)
    #[error("Cloudflare API error: {0}")]
    Api(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    pub fn zone_not_found(zone: impl Into<String>) -> Self {
        Self::ZoneNotFound(zone.into())
    }

    pub fn provider_write(msg: impl Into<String>) -> Self {
        Self::ProviderWrite(msg.into())
    }

    pub fn log_write(msg: impl Into<String>) -> Self {
        Self::LogWrite(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }
}
