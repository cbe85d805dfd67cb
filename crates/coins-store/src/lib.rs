//! # coins-store: Credential and Balance Stores
//!
//! The storage abstraction behind the coins service. Two lookups and one
//! setup operation, expressed as the [`AccountStore`] trait, so the
//! authorization gate and the balance handler never depend on a concrete
//! backend.
//!
//! ## Implementations
//!
//! | Store              | Backing data                         | Latency              |
//! |--------------------|--------------------------------------|----------------------|
//! | [`InMemoryStore`]  | Fixed reference dataset (or any [`Dataset`]) | Simulated, 1s default |
//! | [`SeedFileStore`]  | YAML/JSON seed file read on `initialize()` | None           |
//!
//! ## Absence Is Not Failure
//!
//! Lookups return `Result<Option<_>, StoreError>`. `Ok(None)` means no record
//! exists for the identity, and callers must check it before use. `Err(_)`
//! means the store itself could not answer.
//!
//! ## Crate Policy
//!
//! - No HTTP types. The API crate maps [`StoreError`] onto responses.
//! - Records are immutable once loaded; no update or delete operations.

pub mod error;
pub mod memory;
pub mod record;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use record::{BalanceRecord, CredentialRecord, Dataset};
pub use seed::SeedFileStore;
pub use store::AccountStore;
