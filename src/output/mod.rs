//! Output formatting for the subnet report.

mod report;

pub use report::{subnet_line, unmatched_line, write_report};
