//! IPv4 network and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing an IPv4 network (address + prefix length),
//! along with the bit helpers used to split and walk networks.

use crate::error::{Error, Result};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use inventory_subnet_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(Error::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Returns the IP address following the given subnet.
pub fn ip_after_subnet(addr: Ipv4Addr, cidr: u8) -> Result<Ipv4Addr> {
    let subnet_size = 1u64 << (MAX_LENGTH - cidr.min(MAX_LENGTH));
    let network_bits = u32::from(cut_addr(addr, cidr)?) as u64;
    let next_bits = network_bits + subnet_size;
    u32::try_from(next_bits)
        .map(Ipv4Addr::from)
        .map_err(|_| Error::SubnetOverflow(format!("{addr}/{cidr}")))
}

/// Calculate the next subnet of the same size after the given [`Ipv4`] subnet.
pub fn next_subnet_ipv4(ipv4: Ipv4) -> Result<Ipv4> {
    let next = ip_after_subnet(ipv4.addr, ipv4.mask)?;
    Ok(Ipv4 {
        addr: next,
        mask: ipv4.mask,
    })
}

/// IPv4 network in CIDR notation.
///
/// Ordering is by address first, then prefix length.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Parse a network in CIDR form (e.g. "10.0.0.0/24").
    ///
    /// The address must be the network address: host bits set is an error.
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let invalid = |reason: &str| Error::InvalidNetwork {
            network: addr_cidr.to_string(),
            reason: reason.to_string(),
        };

        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| invalid("expected address/prefix"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| invalid(&format!("invalid address {addr}")))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| invalid(&format!("invalid prefix length {mask}")))?;
        if mask > MAX_LENGTH {
            return Err(Error::PrefixTooLong(mask));
        }
        if cut_addr(addr, mask)? != addr {
            return Err(invalid("has host bits set"));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Number of addresses covered by this subnet.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    fn mask_bits(&self) -> u32 {
        // mask is validated on construction
        get_cidr_mask(self.mask).unwrap_or(u32::MAX)
    }
}

impl FromStr for Ipv4 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
