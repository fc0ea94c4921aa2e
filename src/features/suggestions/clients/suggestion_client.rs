use reqwest::StatusCode;
use serde::Deserialize;

use crate::core::config::SuggestionApiConfig;
use crate::features::suggestions::models::SuggestionPayload;

/// Success body of the suggestion API
#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    suggestion: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestionClientError {
    #[error("Suggestion request failed: {0}")]
    Transport(String),

    #[error("Suggestion API returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse suggestion response: {0}")]
    Decode(String),
}

/// Client for the AI suggestion endpoint
pub struct SuggestionApiClient {
    http: reqwest::Client,
    endpoint_url: String,
}

impl SuggestionApiClient {
    pub fn new(config: &SuggestionApiConfig) -> Result<Self, SuggestionClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SuggestionClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint_url: config.endpoint_url(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// POST the payload; only HTTP 200 with a `suggestion` string counts as success
    pub async fn request_suggestion(
        &self,
        payload: &SuggestionPayload,
    ) -> Result<String, SuggestionClientError> {
        let response = self
            .http
            .post(&self.endpoint_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SuggestionClientError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(SuggestionClientError::Status(response.status().as_u16()));
        }

        let body: SuggestionResponse = response
            .json()
            .await
            .map_err(|e| SuggestionClientError::Decode(e.to_string()))?;

        Ok(body.suggestion)
    }
}
