//! crates/health_advisor_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like the browser store
//! or the HTTP stack.

use async_trait::async_trait;
use crate::domain::{AnalysisResult, HealthData};

//=========================================================================================
// Error Types
//=========================================================================================

/// Errors produced while registering a new account.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AccountError {
    /// A required field was left empty.
    #[error("Please fill in all fields")]
    InvalidInput,
    /// An account with this username already exists.
    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),
    /// The password and its confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Errors produced while logging in.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// No account matches the username.
    #[error("Username does not exist. Please sign up first.")]
    UnknownUser,
    /// The account exists but the password differs.
    #[error("Invalid password")]
    WrongPassword,
}

/// Errors produced by one analysis request.
///
/// The three variants classify the outcome of the single network attempt:
/// the call never completed, the endpoint reported failure, or the body did
/// not match the documented response shape.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Unable to connect to the analysis service: {0}")]
    Unreachable(String),
    #[error("The analysis service returned status {0}")]
    ServerError(u16),
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The durable key-value collaborator (the browser origin store).
///
/// All operations are synchronous and infallible from the caller's point of
/// view: a missing key reads as `None`, and implementations absorb their own
/// write failures rather than propagating them.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The remote health-analysis service.
#[async_trait]
pub trait HealthAnalysisService: Send + Sync {
    /// Submits one health-data form and returns the validated advisory
    /// payload. A single attempt, no retries.
    async fn analyze(&self, data: &HealthData) -> Result<AnalysisResult, AnalysisError>;

    /// Best-effort liveness check against the service root. Never fails;
    /// any transport error reads as unreachable.
    async fn check_reachable(&self) -> bool;
}
