//! Domain models for the inventory subnet summary.
//!
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`HostRecord`] - inventory server entry from the API

mod host;
mod ipv4;

// Re-export public types
pub use host::{HostRecord, ONLINE_STATUS};
pub use ipv4::{get_cidr_mask, next_subnet_ipv4, Ipv4, MAX_LENGTH};
