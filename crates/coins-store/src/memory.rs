//! # In-Memory Reference Store
//!
//! Serves a fixed dataset from memory and sleeps on every lookup to model a
//! slow external dependency. The dataset is indexed once at construction and
//! never mutated, so lookups take no locks.

use std::time::Duration;

use crate::error::StoreError;
use crate::record::{BalanceRecord, CredentialRecord, Dataset, Index};
use crate::store::AccountStore;

/// Simulated per-lookup latency of the reference store.
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

/// In-memory [`AccountStore`] with simulated latency.
#[derive(Debug)]
pub struct InMemoryStore {
    index: Index,
    latency: Duration,
}

impl InMemoryStore {
    /// Store holding the three-user reference dataset (`alex`, `maria`, `john`).
    pub fn reference() -> Self {
        Self {
            index: Index::reference(),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Store holding an arbitrary dataset.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        Ok(Self {
            index: dataset.into_index()?,
            latency: DEFAULT_LATENCY,
        })
    }

    /// Override the simulated latency. Zero disables the sleep.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The simulated per-lookup latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}

impl AccountStore for InMemoryStore {
    fn get_credential(&self, username: &str) -> Result<Option<CredentialRecord>, StoreError> {
        self.simulate_latency();
        Ok(self.index.credential(username))
    }

    fn get_balance(&self, username: &str) -> Result<Option<BalanceRecord>, StoreError> {
        self.simulate_latency();
        Ok(self.index.balance(username))
    }

    fn initialize(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn store_name(&self) -> &str {
        "InMemoryStore"
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const KNOWN: [&str; 3] = ["alex", "maria", "john"];

    proptest! {
        /// Every identity resolves without error; only the reference users are present.
        #[test]
        fn lookups_are_total(username in "[a-zA-Z0-9_]{0,12}") {
            let store = InMemoryStore::reference().with_latency(Duration::ZERO);
            let known = KNOWN.contains(&username.as_str());

            let credential = store.get_credential(&username);
            prop_assert!(credential.is_ok());
            prop_assert_eq!(credential.unwrap().is_some(), known);

            let balance = store.get_balance(&username);
            prop_assert!(balance.is_ok());
            prop_assert_eq!(balance.unwrap().is_some(), known);
        }
    }
}
