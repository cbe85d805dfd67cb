//! # Store Bootstrap
//!
//! Selects the [`AccountStore`] implementation from configuration and
//! initializes it before the server accepts traffic. Selection happens once,
//! at process construction; handlers only ever see `Arc<dyn AccountStore>`.

use std::sync::Arc;

use coins_store::{AccountStore, InMemoryStore, SeedFileStore, StoreError};

use crate::state::AppConfig;

/// Build and initialize the configured store.
///
/// - `seed_file` set: [`SeedFileStore`] over that file.
/// - otherwise: [`InMemoryStore`] with the reference dataset and the
///   configured simulated latency.
pub fn build_store(config: &AppConfig) -> Result<Arc<dyn AccountStore>, StoreError> {
    let store: Arc<dyn AccountStore> = match &config.seed_file {
        Some(path) => {
            let store = SeedFileStore::new(path);
            tracing::info!(path = %store.path().display(), "using seed-file store");
            Arc::new(store)
        }
        None => {
            let store = InMemoryStore::reference().with_latency(config.store_latency);
            tracing::info!(
                latency_ms = store.latency().as_millis() as u64,
                "using in-memory reference store"
            );
            Arc::new(store)
        }
    };

    store.initialize()?;
    tracing::info!(store = store.store_name(), "store initialized");

    Ok(store)
}
