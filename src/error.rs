//! Error types for the GuardDuty findings exporter.
//!
//! Every failure is fatal: errors propagate to the process boundary
//! without retry or partial-output salvage. The two variants exist so
//! callers and logs can distinguish remote-call failures from local
//! filesystem failures.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the exporter.
#[derive(Error, Debug)]
pub enum Error {
    /// A remote AWS call failed (authentication, authorization,
    /// throttling, or transport).
    #[error("{operation} failed in {region}: {message}")]
    RemoteCall {
        /// Logical name of the remote operation (e.g. `ListFindings`)
        operation: &'static str,
        /// Region the call was issued against
        region: String,
        /// Message rendered from the SDK error
        message: String,
    },

    /// Writing the output CSV failed.
    #[error("failed to write findings to '{path}': {message}")]
    Export {
        /// Destination file path
        path: PathBuf,
        /// Message rendered from the underlying CSV or I/O error
        message: String,
    },
}

impl Error {
    /// Build a [`Error::RemoteCall`] from an SDK error.
    pub fn remote(
        operation: &'static str,
        region: impl Into<String>,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::RemoteCall {
            operation,
            region: region.into(),
            message: err.to_string(),
        }
    }

    /// Build a [`Error::Export`] from a CSV or I/O error.
    pub fn export(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Export {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
