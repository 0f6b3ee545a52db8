//! Typed run settings built from the `[config]` section.

use super::ini::ConfigMap;
use crate::error::{Error, Result};

/// Settings required by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Inventory API endpoint returning a JSON array of hosts.
    pub api_url: String,
    /// Base network in CIDR form, validated by the partitioner.
    pub subnet: String,
    /// Prefix length of the generated child subnets.
    pub new_prefix: u8,
}

impl Settings {
    pub fn from_map(map: &ConfigMap) -> Result<Settings> {
        let get = |key: &str| {
            map.get(key)
                .cloned()
                .ok_or_else(|| Error::MissingKey(key.to_string()))
        };

        let new_prefix = get("new_prefix")?;
        let new_prefix = new_prefix
            .parse::<u8>()
            .map_err(|source| Error::InvalidPrefixValue {
                value: new_prefix.clone(),
                source,
            })?;

        Ok(Settings {
            api_url: get("api_url")?,
            subnet: get("subnet")?,
            new_prefix,
        })
    }
}
