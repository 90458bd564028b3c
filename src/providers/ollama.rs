use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use log::{debug, error};

use crate::errors::{ProviderError, preview};
use super::{CompletionRequest, Provider};

/// Default local Ollama endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Ollama client for interacting with Ollama API
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Model name used for every request
    model: String,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    /// Model name to use for generation
    model: String,
    /// Prompt to generate from
    prompt: String,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,
    /// Format to return a response in
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    /// Whether to stream the response
    stream: bool,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationOptions {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Generation response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    #[serde(default)]
    pub response: String,
    /// Whether the generation is complete
    #[serde(default)]
    pub done: bool,
}

impl GenerationRequest {
    /// Build a non-streaming generate request from a completion request
    pub fn from_completion(model: impl Into<String>, request: &CompletionRequest) -> Self {
        Self {
            model: model.into(),
            prompt: request.prompt.clone(),
            options: request.temperature.map(|t| GenerationOptions { temperature: Some(t) }),
            format: request.json_output.then(|| "json".to_string()),
            stream: false,
        }
    }
}

impl Ollama {
    /// Create a new Ollama client from a complete base URL
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.into();
        let base_url = if base_url.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            base_url.trim_end_matches('/').to_string()
        };

        let client = Client::builder()
            .timeout(timeout)
            // Ollama uses HTTP/1.1
            .http1_only()
            .build()
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            client,
            model: model.into(),
        })
    }

    /// Parse a generate body, tolerating a JSONL stream even though
    /// `stream: false` is requested
    pub fn parse_generate_body(body: &str) -> Result<String, ProviderError> {
        if let Ok(response) = serde_json::from_str::<GenerationResponse>(body) {
            return Ok(response.response);
        }

        let mut full_response = String::new();
        let mut saw_line = false;
        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let chunk: GenerationResponse = serde_json::from_str(line).map_err(|e| {
                error!("Failed to parse Ollama API response: {}. Raw response: {}", e, preview(body));
                ProviderError::ParseError(format!("Failed to parse Ollama API response: {}", e))
            })?;
            full_response.push_str(&chunk.response);
            saw_line = true;
        }

        if !saw_line {
            return Err(ProviderError::ParseError("Empty response from Ollama API".to_string()));
        }
        Ok(full_response)
    }
}

#[async_trait]
impl Provider for Ollama {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerationRequest::from_completion(&self.model, &request);
        debug!("Sending {} prompt chars to Ollama model {}", request.prompt.len(), self.model);

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::from_status(status.as_u16(), error_text));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to get response text from Ollama API: {}", e)))?;

        Self::parse_generate_body(&response_text)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
