//! services/client/src/error.rs
//!
//! Defines the primary error type for the entire client.

use crate::config::ConfigError;
use health_advisor_core::ports::{AccountError, AnalysisError, AuthError};

/// The primary error type for the `client` service.
///
/// Every variant's `Display` text is what the shell shows the user as a
/// blocking notification; no error here is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a signup failure.
    #[error("{0}")]
    Account(#[from] AccountError),

    /// Represents a login failure.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Represents a failure of the analysis request, carrying the most
    /// specific available message.
    #[error("{0}")]
    Analysis(#[from] AnalysisError),
}
