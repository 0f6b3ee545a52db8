//! Subnet processing logic.
//!
//! - [`partition`] - splitting the base network into child subnets
//! - [`classify`] - attributing online hosts to those subnets

mod classify;
mod partition;

// Re-export public functions
pub use classify::{classify_hosts, Classification, SubnetHosts};
pub use partition::{split_network, split_subnet};
