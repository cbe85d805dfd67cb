//! # Seed-File Store
//!
//! Loads a [`Dataset`] from a YAML or JSON file when `initialize()` runs.
//! Until then every lookup fails with [`StoreError::NotInitialized`].
//! After loading, the dataset is never mutated; the lock only guards the
//! one-time publication.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::record::{BalanceRecord, CredentialRecord, Dataset, Index};
use crate::store::AccountStore;

/// [`AccountStore`] backed by a seed file on disk.
#[derive(Debug)]
pub struct SeedFileStore {
    path: PathBuf,
    index: RwLock<Option<Index>>,
}

impl SeedFileStore {
    /// Create a store for the seed file at `path`. Nothing is read until
    /// [`AccountStore::initialize`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            index: RwLock::new(None),
        }
    }

    /// Path of the seed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Index, StoreError> {
        let seed_err = |reason: String| StoreError::Seed {
            path: self.path.clone(),
            reason,
        };

        let raw = std::fs::read_to_string(&self.path).map_err(|e| seed_err(e.to_string()))?;
        let dataset: Dataset = serde_yaml::from_str(&raw).map_err(|e| seed_err(e.to_string()))?;

        tracing::info!(
            path = %self.path.display(),
            credentials = dataset.credentials.len(),
            balances = dataset.balances.len(),
            "seed dataset loaded"
        );

        dataset.into_index()
    }
}

impl AccountStore for SeedFileStore {
    fn get_credential(&self, username: &str) -> Result<Option<CredentialRecord>, StoreError> {
        self.index
            .read()
            .as_ref()
            .map(|index| index.credential(username))
            .ok_or(StoreError::NotInitialized)
    }

    fn get_balance(&self, username: &str) -> Result<Option<BalanceRecord>, StoreError> {
        self.index
            .read()
            .as_ref()
            .map(|index| index.balance(username))
            .ok_or(StoreError::NotInitialized)
    }

    fn initialize(&self) -> Result<(), StoreError> {
        let mut guard = self.index.write();
        if guard.is_some() {
            return Ok(());
        }
        *guard = Some(self.load()?);
        Ok(())
    }

    fn store_name(&self) -> &str {
        "SeedFileStore"
    }
}
