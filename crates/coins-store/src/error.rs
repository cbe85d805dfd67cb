//! # Store Errors
//!
//! Failures a store can report. A missing record is never an error; see
//! [`crate::AccountStore`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by [`crate::AccountStore`] implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A lookup ran before `initialize()` completed.
    #[error("store not initialized")]
    NotInitialized,

    /// The backing data source could not answer.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },

    /// The seed file could not be read or parsed.
    #[error("failed to load seed file {}: {reason}", path.display())]
    Seed {
        /// Path of the seed file.
        path: PathBuf,
        /// Read or parse failure.
        reason: String,
    },

    /// A dataset holds more than one record of a kind for one identity.
    #[error("duplicate {kind} record for user '{username}'")]
    DuplicateRecord {
        /// Record kind (`credential` or `balance`).
        kind: &'static str,
        /// The identity that appears twice.
        username: String,
    },
}
