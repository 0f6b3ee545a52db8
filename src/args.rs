use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "inventory-subnet-summary",
    about = "Split a network into subnets and report which inventory hosts fall into each",
    version,
    long_about = None
)]
pub struct Args {
    /// Config file to be used
    #[arg(short = 'c', long = "config", env = "INVENTORY_SUBNET_CONFIG")]
    pub config: PathBuf,

    /// Parser log level DEBUG or INFO
    #[arg(short = 'l', long = "log_level", value_enum, default_value = "INFO")]
    pub log_level: LogLevel,

    /// Log file path
    #[arg(short = 'f', long = "log", default_value = "parser.log")]
    pub log: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "INFO")]
    Info,
    #[value(name = "DEBUG")]
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}
