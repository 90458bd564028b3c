/*!
 * Provider implementations for LLM backends.
 *
 * This module contains client implementations for the supported providers:
 * - Gemini: Google Generative Language API (default)
 * - Ollama: Local LLM server
 * - Mock: Scripted provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single prompt sent to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The full prompt text
    pub prompt: String,

    /// Sampling temperature, provider default when `None`
    pub temperature: Option<f32>,

    /// Ask the provider for a JSON body
    pub json_output: bool,
}

impl CompletionRequest {
    /// Create a new request for the given prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            json_output: false,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Request structured (JSON) output
    pub fn json(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Common trait for all LLM providers
///
/// Providers are used through `Arc<dyn Provider>`, so the trait stays
/// object-safe: requests and responses are plain text.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a request and return the generated text
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The response text or an error
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;

    /// Short provider name for logs
    fn name(&self) -> &str;
}

pub mod gemini;
pub mod mock;
pub mod ollama;
