//! Error types for rate loading and conversion

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure of a live rates fetch. The held snapshot is never touched when one
/// of these is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed rates payload: {0}")]
    Malformed(String),
}

/// Failure to compute a conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Failure to read the local seed file. Recovered by the built-in snapshot.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
