// cargo watch -x 'fmt' -x 'run -- -c parser.ini'

pub mod args;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Settings;
use models::HostRecord;
use processing::Classification;
use std::io::Write;
use std::path::Path;

pub use error::{Error, Result};

/// Load `config_path`, fetch the inventory and write the report to `out`.
pub fn run<W: Write>(config_path: &Path, out: &mut W) -> Result<Classification> {
    let config = config::load_config(config_path)?;
    let settings = Settings::from_map(&config)?;

    let hosts = inventory::fetch_inventory(&settings.api_url)?;
    report_hosts(&hosts, &settings, out)
}

/// Partition the configured network, classify `hosts` and write the report.
///
/// Nothing is written unless classification succeeds.
pub fn report_hosts<W: Write>(
    hosts: &[HostRecord],
    settings: &Settings,
    out: &mut W,
) -> Result<Classification> {
    let subnets = processing::split_subnet(&settings.subnet, settings.new_prefix)?;
    let result = processing::classify_hosts(hosts, &subnets)?;
    output::write_report(out, &result)?;
    Ok(result)
}
