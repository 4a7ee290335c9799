//! services/client/src/registry.rs
//!
//! The account registry: owns the set of registered accounts, enforces
//! username uniqueness, and persists the whole collection through the
//! injected `KeyValueStore`.

use health_advisor_core::domain::Account;
use health_advisor_core::ports::{AccountError, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The store key holding the serialized account list.
pub(crate) const ACCOUNTS_KEY: &str = "users";

//=========================================================================================
// "Impure" Persistence Record Structs
//=========================================================================================

#[derive(Serialize, Deserialize)]
pub(crate) struct AccountRecord {
    username: String,
    email: String,
    password: String,
}

impl AccountRecord {
    pub(crate) fn to_domain(self) -> Account {
        Account {
            username: self.username,
            email: self.email,
            password: self.password,
        }
    }

    pub(crate) fn from_domain(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            password: account.password.clone(),
        }
    }
}

//=========================================================================================
// AccountRegistry
//=========================================================================================

/// The durable set of known accounts, backed by a single store key.
///
/// Every mutation rewrites the full persisted blob, so the in-memory view and
/// the persisted form never diverge.
#[derive(Clone)]
pub struct AccountRegistry {
    store: Arc<dyn KeyValueStore>,
}

impl AccountRegistry {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Registers a new account.
    ///
    /// Fails with `InvalidInput` when any field is empty and with
    /// `DuplicateUsername` when the username is already taken; the rejected
    /// attempt leaves the persisted registry untouched.
    pub fn register(&self, candidate: Account) -> Result<Account, AccountError> {
        if candidate.username.is_empty()
            || candidate.email.is_empty()
            || candidate.password.is_empty()
        {
            return Err(AccountError::InvalidInput);
        }

        let mut accounts = self.load();
        if accounts.iter().any(|a| a.username == candidate.username) {
            return Err(AccountError::DuplicateUsername(candidate.username));
        }

        accounts.push(candidate.clone());
        self.save(&accounts);
        Ok(candidate)
    }

    /// Looks up an account by exact, case-sensitive username. No side effects.
    pub fn find_by_username(&self, username: &str) -> Option<Account> {
        self.load().into_iter().find(|a| a.username == username)
    }

    /// Loads every persisted account, in insertion order.
    ///
    /// An absent key or a blob that no longer parses reads as an empty
    /// registry; the user can recover by registering again.
    pub fn load(&self) -> Vec<Account> {
        let Some(raw) = self.store.get(ACCOUNTS_KEY) else {
            return Vec::new();
        };
        serde_json::from_str::<Vec<AccountRecord>>(&raw)
            .map(|records| records.into_iter().map(AccountRecord::to_domain).collect())
            .unwrap_or_default()
    }

    fn save(&self, accounts: &[Account]) {
        let records: Vec<AccountRecord> = accounts.iter().map(AccountRecord::from_domain).collect();
        match serde_json::to_string(&records) {
            Ok(raw) => self.store.set(ACCOUNTS_KEY, &raw),
            Err(e) => tracing::error!("Failed to serialize account registry: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;

    fn account(username: &str) -> Account {
        Account {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "p1".to_string(),
        }
    }

    fn registry() -> AccountRegistry {
        AccountRegistry::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn register_appends_and_returns_the_account() {
        let registry = registry();
        let stored = registry.register(account("amy")).unwrap();
        assert_eq!(stored.username, "amy");
        assert_eq!(registry.load(), vec![account("amy")]);
    }

    #[test]
    fn duplicate_username_is_rejected_and_count_unchanged() {
        let registry = registry();
        registry.register(account("amy")).unwrap();

        let second = Account {
            email: "other@example.com".to_string(),
            ..account("amy")
        };
        assert_eq!(
            registry.register(second),
            Err(AccountError::DuplicateUsername("amy".to_string()))
        );
        assert_eq!(registry.load().len(), 1);
    }

    #[test]
    fn empty_fields_are_rejected() {
        let registry = registry();
        let mut candidate = account("amy");
        candidate.email = String::new();
        assert_eq!(registry.register(candidate), Err(AccountError::InvalidInput));
        assert!(registry.load().is_empty());
    }

    #[test]
    fn registry_is_written_through_to_the_store() {
        let store = Arc::new(InMemoryStore::new());
        let registry = AccountRegistry::new(store.clone());
        registry.register(account("amy")).unwrap();

        // A second registry over the same store sees the account immediately.
        let other = AccountRegistry::new(store);
        assert_eq!(other.find_by_username("amy"), Some(account("amy")));
    }

    #[test]
    fn malformed_blob_loads_as_empty() {
        let store = Arc::new(InMemoryStore::new());
        store.set(ACCOUNTS_KEY, "{{{ not json");
        let registry = AccountRegistry::new(store);
        assert!(registry.load().is_empty());
    }

    #[test]
    fn find_by_username_is_case_sensitive() {
        let registry = registry();
        registry.register(account("amy")).unwrap();
        assert!(registry.find_by_username("Amy").is_none());
        assert!(registry.find_by_username("amy").is_some());
    }
}
