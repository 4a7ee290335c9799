//! crates/health_advisor_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage backend or serialization format.

/// A registered account. Created by signup, never mutated afterwards.
///
/// Usernames are unique across the registry (case-sensitive exact match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The health form values collected at submission time.
///
/// All fields are free text exactly as the user typed them; nothing here is
/// persisted.
#[derive(Debug, Clone)]
pub struct HealthData {
    pub name: String,
    pub blood_pressure: String,
    pub blood_sugar: String,
    pub temperature: String,
    pub symptom: String,
}

/// Advice for one vital-sign section of the analysis response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAdvice {
    pub message: String,
    pub lifestyle: Vec<String>,
    pub medications: Vec<String>,
}

/// The body-temperature section, which may additionally carry fever types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureAdvice {
    pub advice: SectionAdvice,
    /// Absent when the service sent no `types` field; an empty list and an
    /// absent list render differently, so the distinction is kept.
    pub fever_types: Option<Vec<FeverType>>,
}

/// One recognised fever type from the body-temperature section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeverType {
    pub name: String,
    pub description: String,
    pub common_symptoms: Vec<String>,
}

/// The validated advisory payload returned by the remote analysis service.
///
/// A value of this type only exists after structural validation has confirmed
/// that all four sections were present in the response; a missing section is a
/// contract violation, not a "no data" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub blood_pressure: SectionAdvice,
    pub blood_sugar: SectionAdvice,
    pub body_temperature: TemperatureAdvice,
    pub symptom_analysis: SectionAdvice,
}
