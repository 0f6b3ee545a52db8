//! Attributing online hosts to subnets.
//!
//! Subnets are walked in partition order and a host leaves the working set
//! as soon as one subnet claims it, so every online host ends up in exactly
//! one subnet or in the unmatched list.

use crate::error::{Error, Result};
use crate::models::{HostRecord, Ipv4};
use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Hosts attributed to one subnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetHosts {
    pub subnet: Ipv4,
    /// Hostnames in inventory order, each listed once.
    pub hostnames: Vec<String>,
}

/// Outcome of classifying an inventory against a partition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    /// One entry per subnet, in partition order.
    pub subnets: Vec<SubnetHosts>,
    /// Online hostnames no subnet matched, in inventory order.
    pub unmatched: Vec<String>,
}

struct OnlineHost<'a> {
    hostname: &'a str,
    addresses: Vec<Ipv4Addr>,
}

/// Classify the online hosts of `hosts` into `subnets`.
///
/// Every address of every online host is parsed first; a malformed address
/// fails the whole call before any subnet is evaluated.
pub fn classify_hosts(hosts: &[HostRecord], subnets: &[Ipv4]) -> Result<Classification> {
    let online = online_hosts(hosts)?;
    log::debug!("Loaded {} servers from API", hosts.len());
    log::debug!("Filtered {} online servers", online.len());

    let mut remaining: Vec<&str> = online.iter().map(|h| h.hostname).collect();
    let mut result = Classification::default();

    for subnet in subnets {
        let pending: HashSet<&str> = remaining.iter().copied().collect();
        let mut matched: Vec<String> = Vec::new();

        for host in online.iter().filter(|h| pending.contains(h.hostname)) {
            for addr in &host.addresses {
                let hit = subnet.contains(*addr);
                log::debug!(
                    "Host: {} IP: {} Subnet: {} Status: {}",
                    host.hostname,
                    addr,
                    subnet,
                    if hit { "match" } else { "miss" }
                );
                if hit && !matched.iter().any(|m| m.as_str() == host.hostname) {
                    matched.push(host.hostname.to_string());
                }
            }
        }

        remaining.retain(|name| !matched.iter().any(|m| m.as_str() == *name));
        result.subnets.push(SubnetHosts {
            subnet: *subnet,
            hostnames: matched,
        });
    }

    // duplicate inventory records share one attribution
    let mut listed = HashSet::new();
    result.unmatched = remaining
        .into_iter()
        .filter(|name| listed.insert(*name))
        .map(str::to_string)
        .collect();
    Ok(result)
}

fn online_hosts(hosts: &[HostRecord]) -> Result<Vec<OnlineHost<'_>>> {
    hosts
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_online())
        .map(|(index, h)| {
            let hostname = h
                .hostname
                .as_deref()
                .ok_or_else(|| Error::InvalidHostRecord {
                    index,
                    reason: "online host without hostname".to_string(),
                })?;
            let addresses = h
                .addresses()
                .enumerate()
                .map(|(i, ip)| {
                    let ip = ip.ok_or_else(|| Error::InvalidHostRecord {
                        index,
                        reason: format!("{hostname} ips[{i}] has no ip.ip string"),
                    })?;
                    ip.trim()
                        .parse::<Ipv4Addr>()
                        .map_err(|_| Error::InvalidHostAddress {
                            hostname: hostname.to_string(),
                            address: ip.to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(OnlineHost {
                hostname,
                addresses,
            })
        })
        .collect()
}
