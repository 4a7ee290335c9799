//! services/client/src/adapters/analysis.rs
//!
//! This module contains the adapter for the remote health-analysis service.
//! It implements the `HealthAnalysisService` port from the `core` crate over
//! plain HTTP and validates the response shape before handing anything to the
//! rest of the application.

use async_trait::async_trait;
use health_advisor_core::domain::{
    AnalysisResult, FeverType, HealthData, SectionAdvice, TemperatureAdvice,
};
use health_advisor_core::ports::{AnalysisError, HealthAnalysisService};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

const BLOOD_PRESSURE_KEY: &str = "Blood Pressure";
const BLOOD_SUGAR_KEY: &str = "Blood Sugar";
const BODY_TEMPERATURE_KEY: &str = "Body Temperature";
const SYMPTOM_ANALYSIS_KEY: &str = "Symptom Analysis";

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `HealthAnalysisService` against the configured
/// HTTP endpoint. One attempt per call; no timeout and no retries.
#[derive(Clone)]
pub struct RemoteAnalysisAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteAnalysisAdapter {
    /// Creates a new adapter talking to `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

/// The wire form of one analysis request.
#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    name: &'a str,
    bp: &'a str,
    sugar: &'a str,
    temp: &'a str,
    symptom: &'a str,
}

impl<'a> AnalyzeRequest<'a> {
    fn from_domain(data: &'a HealthData) -> Self {
        Self {
            name: &data.name,
            bp: &data.blood_pressure,
            sugar: &data.blood_sugar,
            temp: &data.temperature,
            symptom: &data.symptom,
        }
    }
}

//=========================================================================================
// `HealthAnalysisService` Trait Implementation
//=========================================================================================

#[async_trait]
impl HealthAnalysisService for RemoteAnalysisAdapter {
    async fn analyze(&self, data: &HealthData) -> Result<AnalysisResult, AnalysisError> {
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(&AnalyzeRequest::from_domain(data))
            .send()
            .await
            .map_err(|e| AnalysisError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::ServerError(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(format!("body is not JSON: {}", e)))?;

        parse_analysis_body(&body)
    }

    async fn check_reachable(&self) -> bool {
        let reachable = match self.client.get(format!("{}/", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        };
        if !reachable {
            warn!("Analysis service at {} is not reachable", self.base_url);
        }
        reachable
    }
}

//=========================================================================================
// Response Validation
//=========================================================================================

/// Validates a response body against the documented shape and converts it
/// into the domain `AnalysisResult`.
///
/// Validation is structural, not semantic: all four sections must be present,
/// `message` must be a string, and `lifestyle`/`medications` must be arrays
/// of strings (possibly empty). The remote service is not assumed to be
/// well-behaved.
pub(crate) fn parse_analysis_body(body: &Value) -> Result<AnalysisResult, AnalysisError> {
    let temperature = section(body, BODY_TEMPERATURE_KEY)?;
    Ok(AnalysisResult {
        blood_pressure: parse_section(section(body, BLOOD_PRESSURE_KEY)?, BLOOD_PRESSURE_KEY)?,
        blood_sugar: parse_section(section(body, BLOOD_SUGAR_KEY)?, BLOOD_SUGAR_KEY)?,
        body_temperature: TemperatureAdvice {
            advice: parse_section(temperature, BODY_TEMPERATURE_KEY)?,
            fever_types: parse_fever_types(temperature)?,
        },
        symptom_analysis: parse_section(section(body, SYMPTOM_ANALYSIS_KEY)?, SYMPTOM_ANALYSIS_KEY)?,
    })
}

fn section<'a>(body: &'a Value, key: &str) -> Result<&'a Value, AnalysisError> {
    body.get(key)
        .ok_or_else(|| AnalysisError::MalformedResponse(format!("missing section '{}'", key)))
}

fn parse_section(value: &Value, key: &str) -> Result<SectionAdvice, AnalysisError> {
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AnalysisError::MalformedResponse(format!("section '{}' has no message", key))
        })?
        .to_string();
    Ok(SectionAdvice {
        message,
        lifestyle: string_list(value, "lifestyle", key)?,
        medications: string_list(value, "medications", key)?,
    })
}

fn string_list(value: &Value, field: &str, key: &str) -> Result<Vec<String>, AnalysisError> {
    let items = value.get(field).and_then(Value::as_array).ok_or_else(|| {
        AnalysisError::MalformedResponse(format!("'{}' in section '{}' is not an array", field, key))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AnalysisError::MalformedResponse(format!(
                    "'{}' in section '{}' contains a non-string entry",
                    field, key
                ))
            })
        })
        .collect()
}

fn parse_fever_types(temperature: &Value) -> Result<Option<Vec<FeverType>>, AnalysisError> {
    let Some(types) = temperature.get("types") else {
        return Ok(None);
    };
    let types = types.as_array().ok_or_else(|| {
        AnalysisError::MalformedResponse("'types' in section 'Body Temperature' is not an array".to_string())
    })?;

    types
        .iter()
        .map(|entry| {
            let name = entry.get("type").and_then(Value::as_str).ok_or_else(|| {
                AnalysisError::MalformedResponse("fever type entry has no 'type'".to_string())
            })?;
            let description = entry
                .get("description")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    AnalysisError::MalformedResponse(format!(
                        "fever type '{}' has no description",
                        name
                    ))
                })?;
            Ok(FeverType {
                name: name.to_string(),
                description: description.to_string(),
                common_symptoms: string_list(entry, "common_symptoms", BODY_TEMPERATURE_KEY)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
