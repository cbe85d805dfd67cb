//! # Store Capability Trait
//!
//! [`AccountStore`] is the contract the authorization gate and the balance
//! handler depend on. Implementations are chosen once at process
//! construction and shared behind an `Arc<dyn AccountStore>`.
//!
//! ## Blocking
//!
//! The methods are synchronous and may block for arbitrary time (network,
//! disk, or the simulated latency of [`crate::InMemoryStore`]). Async callers
//! run them on the blocking pool via `tokio::task::spawn_blocking` so that
//! unrelated requests are not stalled.

use std::fmt;

use crate::error::StoreError;
use crate::record::{BalanceRecord, CredentialRecord};

/// Lookup interface over credential and balance records.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// request tasks behind an `Arc`. The trait is object-safe to support
/// store selection at startup (in-memory vs. seed file).
pub trait AccountStore: Send + Sync + fmt::Debug {
    /// Look up the credential record for `username`.
    ///
    /// Returns `Ok(None)` when no record exists.
    fn get_credential(&self, username: &str) -> Result<Option<CredentialRecord>, StoreError>;

    /// Look up the balance record for `username`.
    ///
    /// Returns `Ok(None)` when no record exists.
    fn get_balance(&self, username: &str) -> Result<Option<BalanceRecord>, StoreError>;

    /// Prepare the store for use (open connections, load data).
    fn initialize(&self) -> Result<(), StoreError>;

    /// Human-readable name of this implementation, for logs.
    fn store_name(&self) -> &str;
}
