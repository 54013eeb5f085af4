//! Request DTOs and body-shape validation.
//!
//! Conventions:
//! - `*Request` → deserialized from the client JSON body
//! - every field deserializes as `Option` so that a missing field surfaces
//!   as a 400 naming that field, not as a serde type error
//! - presence checks run in declaration order; the first missing field wins

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::cycle_log::NewCycleLog;

/// Deserialize an already-parsed JSON body into a request DTO, mapping any
/// shape mismatch to a 400 validation error without a field path.
pub fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::invalid_body(e.to_string()))
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::missing_field(field))
}

/// POST /api/cycle
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCycleLogRequest {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub mood: Option<String>,
    pub energy_level: Option<String>,
    pub symptoms: Option<String>,
    pub flow_intensity: Option<String>,
}

impl CreateCycleLogRequest {
    pub fn validate(self) -> Result<NewCycleLog, AppError> {
        Ok(NewCycleLog {
            start_date: require(self.start_date, "startDate")?,
            end_date: require(self.end_date, "endDate")?,
            mood: require(self.mood, "mood")?,
            energy_level: require(self.energy_level, "energyLevel")?,
            symptoms: require(self.symptoms, "symptoms")?,
            flow_intensity: require(self.flow_intensity, "flowIntensity")?,
        })
    }
}

/// POST /api/analyze/text and /api/analyze/voice
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: Option<String>,
}

impl AnalyzeTextRequest {
    pub fn validate(self) -> Result<String, AppError> {
        require(self.text, "text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_missing_field_wins() {
        let req: CreateCycleLogRequest = from_json(json!({
            "mood": "Calm",
            "energyLevel": "High",
        }))
        .unwrap();

        let err = req.validate().unwrap_err();
        match err {
            AppError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("startDate")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn later_missing_field_reported_by_name() {
        let req: CreateCycleLogRequest = from_json(json!({
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": "2024-01-05T00:00:00Z",
            "mood": "Calm",
            "energyLevel": "High",
            "symptoms": "None",
        }))
        .unwrap();

        let err = req.validate().unwrap_err();
        match err {
            AppError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("flowIntensity"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn complete_body_validates() {
        let req: CreateCycleLogRequest = from_json(json!({
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": "2024-01-05T00:00:00Z",
            "mood": "Calm",
            "energyLevel": "High",
            "symptoms": "Headache",
            "flowIntensity": "Light",
        }))
        .unwrap();

        let new = req.validate().unwrap();
        assert_eq!(new.mood, "Calm");
        assert_eq!(new.flow_intensity, "Light");
    }

    #[test]
    fn non_object_body_is_invalid_without_field() {
        let err = from_json::<AnalyzeTextRequest>(json!("just a string")).unwrap_err();
        match err {
            AppError::Validation { field, .. } => assert!(field.is_none()),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
