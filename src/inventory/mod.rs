//! Inventory API access.

mod fetch;

pub use fetch::{decode_inventory, fetch_inventory};
