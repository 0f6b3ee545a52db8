//! Line-oriented report of the classification.

use crate::error::Result;
use crate::models::Ipv4;
use crate::processing::Classification;
use itertools::Itertools;
use std::io::Write;

/// `Subnet: <cidr> Hosts: [ <hostnames> ]`
pub fn subnet_line(subnet: &Ipv4, hostnames: &[String]) -> String {
    format!("Subnet: {subnet} Hosts: [ {} ]", hostnames.iter().join(" "))
}

/// `Hosts with no subnet match: [ <hostnames> ]`
pub fn unmatched_line(hostnames: &[String]) -> String {
    format!("Hosts with no subnet match: [ {} ]", hostnames.iter().join(" "))
}

/// Write one line per subnet, in partition order, then the unmatched line.
///
/// Each line is also logged at info level.
pub fn write_report<W: Write>(out: &mut W, result: &Classification) -> Result<()> {
    for entry in &result.subnets {
        let line = subnet_line(&entry.subnet, &entry.hostnames);
        writeln!(out, "{line}")?;
        log::info!("{line}");
    }

    let line = unmatched_line(&result.unmatched);
    writeln!(out, "{line}")?;
    log::info!("{line}");
    out.flush()?;
    Ok(())
}
