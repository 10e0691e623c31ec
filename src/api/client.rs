use std::time::Duration;

use anyhow::Result;
use log::debug;

use super::models::{Prediction, SurveyPayload};

/// HTTP client for the prediction service with connection pooling.
#[derive(Clone)]
pub struct PredictionClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("mindcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint: endpoint.into(),
            http_client,
        }
    }

    /// Issue a single prediction request.
    ///
    /// Every failure shape (connect error, timeout, non-2xx status,
    /// malformed body) collapses into one error; callers surface a single
    /// generic message to the user.
    pub async fn predict(&self, payload: &SurveyPayload) -> Result<Prediction> {
        debug!("POST {}", self.endpoint);
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        let prediction = response.json::<Prediction>().await?;
        debug!(
            "Prediction received: {} ({}%)",
            prediction.risk_level, prediction.percentage
        );
        Ok(prediction)
    }
}
