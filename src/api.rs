use crate::{
    config::Config,
    errors::{ChatboxError, ChatboxResult},
    logging::log_api_call,
    models::{ApiCallLog, PredictRequest, PredictResponse},
};
use chrono::Utc;
use log::debug;
use reqwest::{header::CONTENT_TYPE, Client};
use std::time::{Duration, Instant};

/// HTTP client for the prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictClient {
    client: Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> ChatboxResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatboxError::config_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> ChatboxResult<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `{ "message": text }` and returns the `answer` field of the reply.
    ///
    /// The status code is not inspected: any body that parses as
    /// `{ "answer": ... }` is accepted, anything else is `RequestFailed`.
    pub async fn predict(&self, message: &str) -> ChatboxResult<String> {
        let payload = PredictRequest {
            message: message.to_string(),
        };
        let summary = format!("predict ({} chars)", message.chars().count());
        let start_time = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                self.record(&summary, 0, start_time);
                return Err(e.into());
            }
        };

        let status = response.status();
        let body = response.text().await;
        self.record(&summary, status.as_u16(), start_time);

        let body = body?;
        debug!("predict response ({}): {} bytes", status, body.len());

        let parsed: PredictResponse = serde_json::from_str(&body).map_err(|e| {
            ChatboxError::request_failed(format!("unexpected response (HTTP {}): {}", status, e))
        })?;

        Ok(parsed.answer)
    }

    fn record(&self, summary: &str, status: u16, start_time: Instant) {
        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: self.endpoint.clone(),
            request_summary: summary.to_string(),
            response_status: status,
            response_time_ms: start_time.elapsed().as_millis(),
        });
    }
}
