pub mod domain;
pub mod ports;

pub use domain::{Account, AnalysisResult, FeverType, HealthData, SectionAdvice, TemperatureAdvice};
pub use ports::{AccountError, AnalysisError, AuthError, HealthAnalysisService, KeyValueStore};
