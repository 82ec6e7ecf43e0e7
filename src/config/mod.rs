use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Root domain managed when `DYNDNS_ZONE` is not set.
const DEFAULT_ZONE: &str = "somepublicdomain.com";
/// Directory the audit log lands in when `DYNDNS_LOG_DIR` is not set.
const DEFAULT_LOG_DIR: &str = "/var/log";

/// TTL applied to every create/update, in seconds.
pub const RECORD_TTL: u32 = 300;
/// The managed record is never proxied through Cloudflare.
pub const RECORD_PROXIED: bool = false;

/// Everything a run needs, resolved once at startup and passed by
/// reference into the rest of the program. No module reads the
/// environment after this is constructed.
pub struct Config {
    pub api_token: String,
    pub target_zone: String,
    pub managed_name: String,
    pub log_dir: PathBuf,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `CLOUDFLARE_API_TOKEN` is required; a missing or empty token fails
    /// here, before any network call is made. The zone, record name, and
    /// log directory fall back to the built-in defaults.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("CLOUDFLARE_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::config("CLOUDFLARE_API_TOKEN is not set"))?;

        let target_zone =
            env::var("DYNDNS_ZONE").unwrap_or_else(|_| DEFAULT_ZONE.to_string());
        let managed_name = env::var("DYNDNS_RECORD")
            .unwrap_or_else(|_| format!("home.{}", target_zone));
        let log_dir = env::var("DYNDNS_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));

        Ok(Self {
            api_token,
            target_zone,
            managed_name,
            log_dir,
        })
    }

    /// Path of the per-record audit log, e.g.
    /// `/var/log/cloudflare_home.example.com.log`.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir
            .join(format!("cloudflare_{}.log", self.managed_name))
    }
}

// The token must never end up in logs or panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<REDACTED>")
            .field("target_zone", &self.target_zone)
            .field("managed_name", &self.managed_name)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in [
            "CLOUDFLARE_API_TOKEN",
            "DYNDNS_ZONE",
            "DYNDNS_RECORD",
            "DYNDNS_LOG_DIR",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_missing_token_is_a_config_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_token_is_a_config_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("CLOUDFLARE_API_TOKEN", "");

        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_defaults_derive_from_zone() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("CLOUDFLARE_API_TOKEN", "test_token");
        env::set_var("DYNDNS_ZONE", "example.com");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_token, "test_token");
        assert_eq!(config.target_zone, "example.com");
        assert_eq!(config.managed_name, "home.example.com");
        assert_eq!(
            config.log_path(),
            PathBuf::from("/var/log/cloudflare_home.example.com.log")
        );
    }

    #[test]
    fn test_explicit_record_and_log_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("CLOUDFLARE_API_TOKEN", "test_token");
        env::set_var("DYNDNS_ZONE", "example.com");
        env::set_var("DYNDNS_RECORD", "vpn.example.com");
        env::set_var("DYNDNS_LOG_DIR", "/tmp");

        let config = Config::from_env().unwrap();
        assert_eq!(config.managed_name, "vpn.example.com");
        assert_eq!(
            config.log_path(),
            PathBuf::from("/tmp/cloudflare_vpn.example.com.log")
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config {
            api_token: "super-secret".to_string(),
            target_zone: "example.com".to_string(),
            managed_name: "home.example.com".to_string(),
            log_dir: PathBuf::from("/var/log"),
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<REDACTED>"));
    }
}
