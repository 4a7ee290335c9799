pub mod analysis;
pub mod store;

pub use analysis::RemoteAnalysisAdapter;
pub use store::{InMemoryStore, JsonFileStore};
