//! Splitting a base network into equal-sized child subnets.

use crate::error::{Error, Result};
use crate::models::{next_subnet_ipv4, Ipv4, MAX_LENGTH};
use itertools::Itertools;

/// Split `subnet` (CIDR string) into every child network of `new_prefix`,
/// in ascending address order.
///
/// # Returns
/// * `Ok(Vec<Ipv4>)` - children covering the base exactly, without overlap
/// * `Err` - invalid base network, `new_prefix` > 32 or shorter than the base prefix
pub fn split_subnet(subnet: &str, new_prefix: u8) -> Result<Vec<Ipv4>> {
    log::debug!("Loaded subnet: {subnet}");
    log::debug!("Generating new prefix size: {new_prefix}");

    let base = Ipv4::new(subnet)?;
    let children = split_network(base, new_prefix)?;

    log::info!("Generated subnets: [{}]", children.iter().join(" "));
    Ok(children)
}

/// Split an already parsed base network.
pub fn split_network(base: Ipv4, new_prefix: u8) -> Result<Vec<Ipv4>> {
    if new_prefix > MAX_LENGTH {
        return Err(Error::PrefixTooLong(new_prefix));
    }
    if new_prefix < base.mask {
        return Err(Error::PrefixTooShort {
            network: base.to_string(),
            base_prefix: base.mask,
            new_prefix,
        });
    }

    let count = 1u64 << (new_prefix - base.mask);
    let mut current = Ipv4 {
        addr: base.lo(),
        mask: new_prefix,
    };
    let mut children = Vec::with_capacity(count.min(1 << 16) as usize);
    children.push(current);
    // the last child may end at 255.255.255.255, so never step past it
    while (children.len() as u64) < count {
        current = next_subnet_ipv4(current)?;
        children.push(current);
    }
    Ok(children)
}
