//! services/client/src/session.rs
//!
//! Session state for the browser context: at most one authenticated account,
//! persisted under its own store key so it survives page reloads. Protected
//! views call `require_session` before rendering anything.

use crate::registry::{AccountRegistry, AccountRecord};
use health_advisor_core::domain::Account;
use health_advisor_core::ports::{AuthError, KeyValueStore};
use std::sync::Arc;

/// The store key holding the currently logged-in account.
pub(crate) const SESSION_KEY: &str = "loggedInUser";

/// Where unauthenticated callers are sent.
pub const LOGIN_PAGE: &str = "index.html";

/// The outcome of a session check on a protected view.
///
/// The caller is responsible for acting on `Redirect`; the guard itself never
/// navigates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Authenticated(Account),
    Redirect(&'static str),
}

//=========================================================================================
// SessionGuard
//=========================================================================================

/// Determines whether a caller is authenticated and owns the persisted
/// session pointer.
#[derive(Clone)]
pub struct SessionGuard {
    store: Arc<dyn KeyValueStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Authenticates against the registry and, on success, persists the
    /// account as the current session.
    ///
    /// Password comparison is an exact string match. Logging in while another
    /// session exists overwrites it; there is no merging.
    pub fn login(
        &self,
        registry: &AccountRegistry,
        username: &str,
        password: &str,
    ) -> Result<Account, AuthError> {
        let account = registry
            .find_by_username(username)
            .ok_or(AuthError::UnknownUser)?;
        if account.password != password {
            return Err(AuthError::WrongPassword);
        }

        match serde_json::to_string(&AccountRecord::from_domain(&account)) {
            Ok(raw) => self.store.set(SESSION_KEY, &raw),
            Err(e) => tracing::error!("Failed to serialize session: {}", e),
        }
        Ok(account)
    }

    /// The currently authenticated account, if any.
    ///
    /// An absent or malformed session blob reads as anonymous, never as an
    /// error.
    pub fn current_session(&self) -> Option<Account> {
        let raw = self.store.get(SESSION_KEY)?;
        serde_json::from_str::<AccountRecord>(&raw)
            .ok()
            .map(AccountRecord::to_domain)
    }

    /// The guard every protected view calls before rendering protected
    /// content.
    pub fn require_session(&self) -> Access {
        match self.current_session() {
            Some(account) => Access::Authenticated(account),
            None => Access::Redirect(LOGIN_PAGE),
        }
    }

    /// Clears the persisted session. Clearing an absent session is not an
    /// error.
    pub fn logout(&self) {
        self.store.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;
    use health_advisor_core::domain::Account;

    fn fixture() -> (Arc<InMemoryStore>, AccountRegistry, SessionGuard) {
        let store = Arc::new(InMemoryStore::new());
        let registry = AccountRegistry::new(store.clone());
        let guard = SessionGuard::new(store.clone());
        registry
            .register(Account {
                username: "amy".to_string(),
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            })
            .unwrap();
        (store, registry, guard)
    }

    #[test]
    fn login_with_valid_credentials_returns_the_registered_account() {
        let (_, registry, guard) = fixture();
        let account = guard.login(&registry, "amy", "p1").unwrap();
        assert_eq!(account.username, "amy");
        assert_eq!(guard.current_session(), Some(account));
    }

    #[test]
    fn login_with_wrong_password_fails() {
        let (_, registry, guard) = fixture();
        assert_eq!(
            guard.login(&registry, "amy", "wrong"),
            Err(AuthError::WrongPassword)
        );
        assert!(guard.current_session().is_none());
    }

    #[test]
    fn login_with_unknown_username_fails() {
        let (_, registry, guard) = fixture();
        assert_eq!(
            guard.login(&registry, "bob", "anything"),
            Err(AuthError::UnknownUser)
        );
    }

    #[test]
    fn logout_clears_the_session_and_is_idempotent() {
        let (_, registry, guard) = fixture();
        guard.login(&registry, "amy", "p1").unwrap();
        guard.logout();
        assert!(guard.current_session().is_none());
        // Clearing again must not be an error.
        guard.logout();
        assert!(guard.current_session().is_none());
    }

    #[test]
    fn session_survives_a_reload() {
        let (store, registry, guard) = fixture();
        guard.login(&registry, "amy", "p1").unwrap();

        // A fresh guard over the same store models a page reload.
        let reloaded = SessionGuard::new(store);
        assert_eq!(
            reloaded.require_session(),
            Access::Authenticated(registry.find_by_username("amy").unwrap())
        );
    }

    #[test]
    fn require_session_redirects_anonymous_callers() {
        let (_, _, guard) = fixture();
        assert_eq!(guard.require_session(), Access::Redirect(LOGIN_PAGE));
    }

    #[test]
    fn relogin_overwrites_the_previous_session() {
        let (_, registry, guard) = fixture();
        registry
            .register(Account {
                username: "bob".to_string(),
                email: "b@x.com".to_string(),
                password: "p2".to_string(),
            })
            .unwrap();

        guard.login(&registry, "amy", "p1").unwrap();
        guard.login(&registry, "bob", "p2").unwrap();
        assert_eq!(guard.current_session().map(|a| a.username), Some("bob".to_string()));
    }

    #[test]
    fn malformed_session_blob_reads_as_anonymous() {
        let (store, _, guard) = fixture();
        store.set(SESSION_KEY, "not a json object");
        assert!(guard.current_session().is_none());
        assert_eq!(guard.require_session(), Access::Redirect(LOGIN_PAGE));
    }
}
