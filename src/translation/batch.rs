/*!
 * Sentence-aligned batch translation.
 *
 * All sentences of one submission go to the provider in a single prompt and
 * come back as a JSON array. The array is then reconciled against the input
 * so the result always has exactly one translation per sentence.
 */

use log::{debug, warn};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::errors::UpstreamError;
use crate::providers::{CompletionRequest, Provider};

use super::models::TranslateMode;
use super::prompts::batch_translation_prompt;
use super::response::parse_array;

/// Translates ordered sentence lists through one provider call each
#[derive(Debug, Clone)]
pub struct BatchTranslator {
    /// The provider to use
    provider: Arc<dyn Provider>,

    /// Sampling temperature, provider default when `None`
    temperature: Option<f32>,

    /// Batch size above which a warning is logged
    large_batch_warning: usize,
}

impl BatchTranslator {
    /// Create a new batch translator
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            temperature: None,
            large_batch_warning: usize::MAX,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Warn when a batch has more than `threshold` sentences
    pub fn with_large_batch_warning(mut self, threshold: usize) -> Self {
        self.large_batch_warning = threshold;
        self
    }

    /// Translate `sentences` into `target_language`
    ///
    /// The result has the same length and order as `sentences`. An empty
    /// input returns immediately without contacting the provider.
    pub async fn translate_batch(
        &self,
        sentences: &[String],
        target_language: &str,
        mode: TranslateMode,
    ) -> Result<Vec<String>, UpstreamError> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        if sentences.len() > self.large_batch_warning {
            warn!(
                "Translating {} sentences in a single request; long inputs may exceed the model's output limit",
                sentences.len()
            );
        }

        let prompt = batch_translation_prompt(sentences, target_language, mode);
        let mut request = CompletionRequest::new(prompt).json();
        if let Some(temperature) = self.temperature {
            request = request.temperature(temperature);
        }

        let start = Instant::now();
        let raw = self.provider.complete(request).await?;
        debug!(
            "{} translated {} sentences to {} in {:?}",
            self.provider.name(),
            sentences.len(),
            target_language,
            start.elapsed()
        );

        let items = parse_array(&raw)?;
        if items.len() != sentences.len() {
            warn!(
                "Provider returned {} translations for {} sentences; reconciling",
                items.len(),
                sentences.len()
            );
        }

        Ok(reconcile(&items, sentences.len()))
    }
}

/// Align provider output with the input length
///
/// Index `i` takes element `i` when present and `""` otherwise. Extra
/// elements are dropped.
pub fn reconcile(items: &[Value], expected: usize) -> Vec<String> {
    (0..expected)
        .map(|i| items.get(i).map(value_to_text).unwrap_or_default())
        .collect()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
