pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod session;

// Re-export the pieces the embedding shell wires together.
pub use app::{HealthAdvisorApp, LoginForm, SignupForm};
pub use config::{init_tracing, Config, DEFAULT_SERVICE_URL};
pub use error::ClientError;
pub use report::{render, Block, Document, FALLBACK_ENTRY};
pub use session::{Access, SessionGuard, LOGIN_PAGE};
