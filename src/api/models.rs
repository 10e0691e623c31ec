use serde::{Deserialize, Serialize};

/// Request body for the `/predict` endpoint.
///
/// Field names follow the service's wire schema; the five numeric answers
/// must serialize as JSON numbers, not strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyPayload {
    pub gender: String,
    pub age: i64,
    pub work_pressure: i64,
    pub job_satisfaction: i64,
    pub sleep_duration: String,
    pub dietary_habits: String,
    pub suicidal_thoughts: String,
    pub work_hours: i64,
    pub financial_stress: i64,
    pub family_mental_health: String,
}

/// Successful prediction response.
///
/// The service emits the risk level under a key containing a space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(rename = "risk level")]
    pub risk_level: String,
    pub percentage: f64,
}
