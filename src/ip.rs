//! Public IP detection via OpenDNS.
//!
//! `myip.opendns.com` is a magic hostname: OpenDNS resolvers answer an A
//! query for it with the address the query came from. Asking a pinned
//! OpenDNS resolver therefore yields our public IPv4 address without any
//! HTTP round trip.

use std::net::{IpAddr, Ipv4Addr};

use hickory_resolver::{
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
    TokioResolver,
};

use crate::error::{Error, Result};

const OPENDNS_RESOLVER: IpAddr = IpAddr::V4(Ipv4Addr::new(208, 67, 222, 222));
const MYIP_HOSTNAME: &str = "myip.opendns.com.";

/// Resolver config pinned to OpenDNS, bypassing the system resolvers.
fn opendns_config() -> ResolverConfig {
    ResolverConfig::from_parts(
        None,
        vec![],
        NameServerConfigGroup::from_ips_clear(&[OPENDNS_RESOLVER], 53, true),
    )
}

/// Determine the caller's current public IPv4 address.
///
/// Issues a single A query and takes the first answer. A timeout, an
/// empty answer set, or an unreachable resolver is fatal for the run;
/// there is no retry and no fallback resolver.
pub async fn public_ipv4() -> Result<Ipv4Addr> {
    let resolver =
        TokioResolver::builder_with_config(opendns_config(), TokioConnectionProvider::default())
            .with_options(ResolverOpts::default())
            .build();

    let lookup = resolver
        .ipv4_lookup(MYIP_HOSTNAME)
        .await
        .map_err(|e| Error::resolution(e.to_string()))?;

    let record = lookup
        .iter()
        .next()
        .ok_or_else(|| Error::resolution("resolver returned no A records"))?;

    Ok(record.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_pinned_to_opendns() {
        let config = opendns_config();
        let servers = config.name_servers();
        assert!(!servers.is_empty());
        assert!(servers
            .iter()
            .all(|ns| ns.socket_addr.ip() == OPENDNS_RESOLVER));
        assert!(servers.iter().all(|ns| ns.socket_addr.port() == 53));
    }
}
