//! # Stored Records
//!
//! Credential and balance records, plus the [`Dataset`] document that seeds
//! a store. Identity strings are the join key between the two record kinds.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Authoritative secret token for one identity.
///
/// Custom `Debug` redacts the token value to prevent credential leakage in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub username: String,
    pub token: String,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Coin balance held by one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub username: String,
    pub balance: i64,
}

impl BalanceRecord {
    pub fn new(username: impl Into<String>, balance: i64) -> Self {
        Self {
            username: username.into(),
            balance,
        }
    }
}

/// Seed document for a store.
///
/// Deserializes from YAML or JSON:
///
/// ```yaml
/// credentials:
///   - username: alex
///     token: "123ABC"
/// balances:
///   - username: alex
///     balance: 1000
/// ```
///
/// The two lists are independent. An identity may have a credential without
/// a balance, which the API reports as a missing balance record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub credentials: Vec<CredentialRecord>,
    #[serde(default)]
    pub balances: Vec<BalanceRecord>,
}

impl Dataset {
    /// The fixed three-user reference dataset.
    pub fn reference() -> Self {
        Self {
            credentials: vec![
                CredentialRecord::new("alex", "123ABC"),
                CredentialRecord::new("maria", "456DEF"),
                CredentialRecord::new("john", "789GHI"),
            ],
            balances: vec![
                BalanceRecord::new("alex", 1000),
                BalanceRecord::new("maria", 2500),
                BalanceRecord::new("john", 500),
            ],
        }
    }

    /// Index the dataset by identity.
    ///
    /// Rejects a dataset with two records of the same kind for one identity.
    pub(crate) fn into_index(self) -> Result<Index, StoreError> {
        let mut credentials = HashMap::with_capacity(self.credentials.len());
        for record in self.credentials {
            if credentials.contains_key(&record.username) {
                return Err(StoreError::DuplicateRecord {
                    kind: "credential",
                    username: record.username,
                });
            }
            credentials.insert(record.username.clone(), record);
        }

        let mut balances = HashMap::with_capacity(self.balances.len());
        for record in self.balances {
            if balances.contains_key(&record.username) {
                return Err(StoreError::DuplicateRecord {
                    kind: "balance",
                    username: record.username,
                });
            }
            balances.insert(record.username.clone(), record);
        }

        Ok(Index {
            credentials,
            balances,
        })
    }
}

/// Identity-keyed view of a [`Dataset`]. Read-only after construction.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Index {
    credentials: HashMap<String, CredentialRecord>,
    balances: HashMap<String, BalanceRecord>,
}

impl Index {
    /// Index of [`Dataset::reference`], built without duplicate checks.
    pub(crate) fn reference() -> Self {
        let Dataset {
            credentials,
            balances,
        } = Dataset::reference();
        Self {
            credentials: credentials
                .into_iter()
                .map(|record| (record.username.clone(), record))
                .collect(),
            balances: balances
                .into_iter()
                .map(|record| (record.username.clone(), record))
                .collect(),
        }
    }

    pub(crate) fn credential(&self, username: &str) -> Option<CredentialRecord> {
        self.credentials.get(username).cloned()
    }

    pub(crate) fn balance(&self, username: &str) -> Option<BalanceRecord> {
        self.balances.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_redacts_token() {
        let record = CredentialRecord::new("alex", "123ABC");
        let debug = format!("{record:?}");
        assert!(debug.contains("alex"));
        assert!(!debug.contains("123ABC"), "token leaked: {debug}");
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn reference_dataset_pairs_every_identity() {
        let index = Dataset::reference().into_index().unwrap();
        for (user, token, balance) in [
            ("alex", "123ABC", 1000),
            ("maria", "456DEF", 2500),
            ("john", "789GHI", 500),
        ] {
            assert_eq!(index.credential(user).unwrap().token, token);
            assert_eq!(index.balance(user).unwrap().balance, balance);
        }
    }

    #[test]
    fn reference_index_matches_checked_index() {
        let checked = Dataset::reference().into_index().unwrap();
        let index = Index::reference();
        assert_eq!(index, checked);
        assert_eq!(index.credentials.len(), 3);
        assert_eq!(index.balances.len(), 3);
    }

    #[test]
    fn index_lookup_is_case_sensitive() {
        let index = Dataset::reference().into_index().unwrap();
        assert!(index.credential("Alex").is_none());
        assert!(index.balance("ALEX").is_none());
    }

    #[test]
    fn duplicate_credential_rejected() {
        let dataset = Dataset {
            credentials: vec![
                CredentialRecord::new("alex", "a"),
                CredentialRecord::new("alex", "b"),
            ],
            balances: vec![],
        };
        match dataset.into_index() {
            Err(StoreError::DuplicateRecord { kind, username }) => {
                assert_eq!(kind, "credential");
                assert_eq!(username, "alex");
            }
            other => panic!("expected DuplicateRecord, got: {other:?}"),
        }
    }

    #[test]
    fn duplicate_balance_rejected() {
        let dataset = Dataset {
            credentials: vec![],
            balances: vec![BalanceRecord::new("john", 1), BalanceRecord::new("john", 2)],
        };
        assert!(matches!(
            dataset.into_index(),
            Err(StoreError::DuplicateRecord { kind: "balance", .. })
        ));
    }

    #[test]
    fn dataset_lists_default_to_empty() {
        let dataset: Dataset = serde_yaml::from_str("credentials: []").unwrap();
        assert!(dataset.balances.is_empty());
        let dataset: Dataset = serde_yaml::from_str("{}").unwrap();
        assert_eq!(dataset, Dataset::default());
    }
}
