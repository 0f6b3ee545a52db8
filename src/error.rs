//! Error types for the inventory subnet summary pipeline.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config file {0} does not exist or not accessible")]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config syntax error on line {line}: {reason}")]
    ConfigSyntax { line: usize, reason: String },

    #[error("Config section [{0}] not found")]
    MissingSection(String),

    #[error("Config key '{0}' not found")]
    MissingKey(String),

    #[error("Invalid new_prefix '{value}': {source}")]
    InvalidPrefixValue {
        value: String,
        source: ParseIntError,
    },

    #[error("Invalid network '{network}': {reason}")]
    InvalidNetwork { network: String, reason: String },

    #[error("Network length /{0} is too long")]
    PrefixTooLong(u8),

    #[error("New prefix /{new_prefix} is shorter than /{base_prefix} of {network}")]
    PrefixTooShort {
        network: String,
        base_prefix: u8,
        new_prefix: u8,
    },

    #[error("Next subnet calculation overflowed after {0}")]
    SubnetOverflow(String),

    #[error("Can't get information from API server: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Error parsing API response at path={path}: {message}")]
    Decode { path: String, message: String },

    #[error("Host record [{index}]: {reason}")]
    InvalidHostRecord { index: usize, reason: String },

    #[error("Host {hostname} has invalid IPv4 address '{address}'")]
    InvalidHostAddress { hostname: String, address: String },

    #[error("Failed to set up logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
