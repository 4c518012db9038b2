use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a carrier table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid IPv4 prefix '{0}': expected two octets such as '203.226'")]
    InvalidPrefix(String),

    #[error("Invalid IPv6 prefix '{0}': expected hex digits and ':' only")]
    InvalidIpv6Prefix(String),

    #[error("Range {start} ~ {end} ends before it starts")]
    InvertedRange { start: String, end: String },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid carrier table: {0}")]
    Table(#[from] TableError),
}
