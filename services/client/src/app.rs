//! services/client/src/app.rs
//!
//! The application flows behind the page shell: signup, login, logout, the
//! page-load session guard, the fire-and-forget connectivity probe, and the
//! health-form submission that produces the advisory report.

use crate::error::ClientError;
use crate::registry::AccountRegistry;
use crate::report::{self, Document};
use crate::session::{Access, SessionGuard};
use health_advisor_core::domain::{Account, HealthData};
use health_advisor_core::ports::{AccountError, HealthAnalysisService, KeyValueStore};
use serde::Deserialize;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::error;

//=========================================================================================
// Form Types
//=========================================================================================

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

//=========================================================================================
// HealthAdvisorApp
//=========================================================================================

/// Wires the registry, the session guard, and the analysis service together
/// and exposes the flows the page shell drives.
#[derive(Clone)]
pub struct HealthAdvisorApp {
    registry: AccountRegistry,
    guard: SessionGuard,
    analysis: Arc<dyn HealthAnalysisService>,
}

impl HealthAdvisorApp {
    pub fn new(store: Arc<dyn KeyValueStore>, analysis: Arc<dyn HealthAnalysisService>) -> Self {
        Self {
            registry: AccountRegistry::new(store.clone()),
            guard: SessionGuard::new(store),
            analysis,
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// The signup flow. All four fields must be filled and the confirmation
    /// must match before the account reaches the registry.
    pub fn sign_up(&self, form: &SignupForm) -> Result<Account, ClientError> {
        if form.username.is_empty()
            || form.email.is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(AccountError::InvalidInput.into());
        }
        if form.password != form.confirm_password {
            return Err(AccountError::PasswordMismatch.into());
        }

        let account = self.registry.register(Account {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        })?;
        Ok(account)
    }

    pub fn log_in(&self, form: &LoginForm) -> Result<Account, ClientError> {
        let account = self
            .guard
            .login(&self.registry, &form.username, &form.password)?;
        Ok(account)
    }

    pub fn log_out(&self) {
        self.guard.logout();
    }

    /// The page-load guard for the dashboard. The shell must navigate away on
    /// `Access::Redirect` instead of rendering protected content.
    pub fn load_dashboard(&self) -> Access {
        self.guard.require_session()
    }

    /// Fires the connectivity probe in the background. The shell may await
    /// the handle to surface a warning banner, or drop it; either way the
    /// outcome never gates the form flow.
    pub fn probe_service(&self) -> JoinHandle<bool> {
        let analysis = self.analysis.clone();
        tokio::spawn(async move { analysis.check_reachable().await })
    }

    /// Submits the health form and renders the advisory report.
    ///
    /// All-or-nothing: no partial report exists on failure, only the typed
    /// error whose message the shell surfaces as a notification.
    pub async fn submit_health_form(&self, data: HealthData) -> Result<Document, ClientError> {
        let result = self.analysis.analyze(&data).await.map_err(|e| {
            error!("Health analysis request failed: {}", e);
            e
        })?;
        Ok(report::render(&result))
    }
}
