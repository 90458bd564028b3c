/*!
 * On-demand generation of dictionary fields.
 */

use async_trait::async_trait;
use log::debug;
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::UpstreamError;
use crate::providers::{CompletionRequest, Provider};
use crate::translation::prompts::field_fill_prompt;
use crate::translation::response::parse_object;

use super::models::DetailField;

/// Default sampling temperature for dictionary fills
pub const DEFAULT_FILL_TEMPERATURE: f32 = 0.2;

/// Source of generated vocabulary fields
///
/// Implementations return the raw JSON object; the cache decides which keys
/// it keeps.
#[async_trait]
pub trait FieldFiller: Send + Sync + Debug {
    /// Generate the `requested` fields for one word
    async fn fill_fields(
        &self,
        lemma: &str,
        pos: &str,
        requested: &[DetailField],
    ) -> Result<Map<String, Value>, UpstreamError>;
}

/// `FieldFiller` backed by an LLM provider
#[derive(Debug, Clone)]
pub struct LlmFieldFiller {
    provider: Arc<dyn Provider>,
    temperature: f32,
}

impl LlmFieldFiller {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            temperature: DEFAULT_FILL_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl FieldFiller for LlmFieldFiller {
    async fn fill_fields(
        &self,
        lemma: &str,
        pos: &str,
        requested: &[DetailField],
    ) -> Result<Map<String, Value>, UpstreamError> {
        let request = CompletionRequest::new(field_fill_prompt(lemma, pos, requested))
            .temperature(self.temperature)
            .json();

        let raw = self.provider.complete(request).await?;
        let fields = parse_object(&raw)?;

        debug!(
            "{} filled {} key(s) for {}|{}",
            self.provider.name(),
            fields.len(),
            lemma,
            pos
        );
        Ok(fields)
    }
}
