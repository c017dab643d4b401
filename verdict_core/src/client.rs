//! # Classifier Client
//!
//! [`Classifier`] is the seam between the panel controller and the remote
//! service. [`HttpClassifier`] is the real implementation: one JSON `POST`
//! per call, no retries and no request timeout beyond the transport default.

use async_trait::async_trait;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::errors::{ScanError, ScanResult};
use crate::model::{ClassificationResult, ClassifyRequest};

/// Something that can classify a message
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify one already-trimmed message
    async fn classify(&self, message: &str) -> ScanResult<ClassificationResult>;
}

/// Classifier backed by the `/predict` HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpClassifier {
    pub fn new(config: &ClientConfig) -> ScanResult<Self> {
        let endpoint_str = config.endpoint();
        let endpoint = Url::parse(&endpoint_str)
            .map_err(|e| ScanError::config("server_url", &config.server_url, e.to_string()))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ScanError::config(
                "server_url",
                &config.server_url,
                "URL scheme must be http or https",
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ScanError::config("client", &endpoint_str, format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpClassifier { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, message: &str) -> ScanResult<ClassificationResult> {
        tracing::debug!(endpoint = %self.endpoint, chars = message.chars().count(), "sending classification request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ClassifyRequest::new(message))
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "classification request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "classifier returned an error status");
            return Err(ScanError::Server {
                status: status.as_u16(),
            });
        }

        let result: ClassificationResult = response
            .json()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "classifier response did not decode"))?;

        tracing::debug!(
            prediction = %result.prediction,
            confidence = result.confidence,
            reasons = result.reasons.len(),
            "classification received"
        );
        Ok(result)
    }
}
