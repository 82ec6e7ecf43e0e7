mod api;
mod audit;
mod config;
mod ddns;
mod error;
mod ip;

use anyhow::Result;
use api::CloudflareClient;
use config::Config;
use ddns::{DdnsUpdater, WriteAction};

#[tokio::main]
async fn main() -> Result<()> {
    // Pull in a local .env, if any, before reading the environment.
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let public_ip = ip::public_ipv4().await?;
    println!("Public IP: {}", public_ip);
    println!("Managed record: {}", config.managed_name);

    let client = CloudflareClient::new(config.api_token.clone())?;
    let updater = DdnsUpdater::new(&client, &config);
    match updater.run(public_ip).await? {
        WriteAction::Updated => {
            println!("Updated record {} to {}", config.managed_name, public_ip)
        }
        WriteAction::Created => {
            println!("Created record {} with IP {}", config.managed_name, public_ip)
        }
    }

    // The DNS write has already succeeded at this point; a log failure
    // surfaces as the run's error but rolls nothing back.
    audit::append_entry(
        &config.log_path(),
        &config.managed_name,
        &public_ip.to_string(),
    )?;

    Ok(())
}
