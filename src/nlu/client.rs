//! Blocking client for the Natural Language Understanding v1 sentiment
//! endpoint. One synchronous call per payload, no retries; failures carry a
//! structured kind so callers can tell quota exhaustion from per-item faults.
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::nlu::Credentials;

/// Message marker the service uses when a usage limit is exhausted.
/// Matched as a substring because the error body carries no structured kind.
const QUOTA_MARKER: &str = "limit exceeded";

/// Errors surfaced by the remote analysis call
#[derive(Debug, Error)]
pub enum NluError {
    #[error("usage limit exceeded: {0}")]
    Quota(String),
    #[error("input rejected by service: {0}")]
    InvalidInput(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service error (HTTP {status}): {detail}")]
    Service { status: u16, detail: String },
    #[error("unexpected response payload: {0}")]
    Payload(String),
}

impl NluError {
    /// True for the fatal quota-exhaustion condition. Every other kind is
    /// recoverable at the granularity of one document.
    pub fn is_quota(&self) -> bool {
        matches!(self, NluError::Quota(_))
    }
}

/// Classify a failed service response. The only place that inspects the
/// response text for the quota marker.
fn classify_failure(status: u16, detail: String) -> NluError {
    if status == 429 || detail.contains(QUOTA_MARKER) {
        NluError::Quota(detail)
    } else if status == 400 {
        NluError::InvalidInput(detail)
    } else {
        NluError::Service { status, detail }
    }
}

/// Scoring capability the dataset walker depends on
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<f64, NluError>;
}

/// Endpoint parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    /// API version date pin
    pub version: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://gateway.watsonplatform.net/natural-language-understanding/api"
                .to_string(),
            version: "2017-02-27".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    sentiment: Option<SentimentFeature>,
}

#[derive(Debug, Deserialize)]
struct SentimentFeature {
    document: Option<DocumentSentiment>,
}

#[derive(Debug, Deserialize)]
struct DocumentSentiment {
    score: Option<f64>,
}

/// Blocking client for the sentiment endpoint
pub struct NluClient {
    agent: ureq::Agent,
    endpoint: String,
    version: String,
    auth_header: String,
}

impl NluClient {
    pub fn new(credentials: &Credentials, config: &ServiceConfig) -> Self {
        Self {
            agent: ureq::agent(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            version: config.version.clone(),
            auth_header: credentials.basic_auth_header(),
        }
    }

    /// Score a single text payload, returning the document-level sentiment
    /// score the service reports.
    pub fn analyze_sentiment(&self, text: &str) -> Result<f64, NluError> {
        let url = format!("{}/v1/analyze", self.endpoint);
        let body = serde_json::json!({
            "text": text,
            "features": { "sentiment": {} }
        });

        let response = match self
            .agent
            .post(&url)
            .query("version", &self.version)
            .set("Authorization", &self.auth_header)
            .set("Content-Type", "application/json")
            .send_json(body)
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                let detail = resp.into_string().unwrap_or_default();
                return Err(classify_failure(status, detail));
            }
            Err(ureq::Error::Transport(t)) => return Err(NluError::Transport(t.to_string())),
        };

        let parsed: AnalyzeResponse = response
            .into_json()
            .map_err(|e| NluError::Payload(e.to_string()))?;

        let score = parsed
            .sentiment
            .and_then(|s| s.document)
            .and_then(|d| d.score)
            .ok_or_else(|| NluError::Payload("missing sentiment.document.score".to_string()))?;

        debug!("Document sentiment score: {}", score);
        Ok(score)
    }
}

impl SentimentScorer for NluClient {
    fn score(&self, text: &str) -> Result<f64, NluError> {
        self.analyze_sentiment(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_detected_by_status() {
        let err = classify_failure(429, "Too Many Requests".to_string());
        assert!(err.is_quota());
    }

    #[test]
    fn quota_detected_by_message_marker() {
        let err = classify_failure(403, "daily transaction limit exceeded".to_string());
        assert!(err.is_quota());
    }

    #[test]
    fn bad_request_is_invalid_input() {
        let err = classify_failure(400, "unsupported text language".to_string());
        assert!(matches!(err, NluError::InvalidInput(_)));
        assert!(!err.is_quota());
    }

    #[test]
    fn other_statuses_are_service_errors() {
        let err = classify_failure(502, "bad gateway".to_string());
        assert!(matches!(err, NluError::Service { status: 502, .. }));
        assert!(!err.is_quota());
    }
}
