use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::nlp::{RuleSegmenter, RuleVocabExtractor, TextSegmenter, VocabExtractor};
use crate::providers::Provider;
use crate::translation::{
    BatchTranslator, SentencePair, SplitResponse, TranslateRequest, TranslateResponse,
};
use crate::vocab::{LlmFieldFiller, VocabDetail, VocabDetailCache, VocabDetailRequest};

// @module: Request-level flows of the note service

/// Translation and vocabulary service shared by all request handlers
#[derive(Clone)]
pub struct NoteService {
    // @field: Batch translation protocol
    translator: BatchTranslator,

    // @field: Sentence splitter
    segmenter: Arc<dyn TextSegmenter>,

    // @field: Per-sentence vocabulary extractor
    extractor: Arc<dyn VocabExtractor>,

    // @field: Vocabulary detail cache
    cache: Arc<VocabDetailCache>,

    // @field: Target language when a request names none
    default_target_language: String,
}

impl NoteService {
    // @method: Build the service around `provider` with the rule-based collaborators
    pub fn new(provider: Arc<dyn Provider>, config: &Config) -> Self {
        let translator = BatchTranslator::new(provider.clone())
            .with_temperature(config.translation.translate_temperature)
            .with_large_batch_warning(config.translation.large_batch_warning);

        let filler = LlmFieldFiller::new(provider).with_temperature(config.translation.fill_temperature);
        let cache = VocabDetailCache::new(Arc::new(filler)).with_single_flight(config.vocab.single_flight);

        Self::with_components(
            translator,
            Arc::new(RuleSegmenter::new()),
            Arc::new(RuleVocabExtractor::new()),
            Arc::new(cache),
            config.translation.default_target_language.clone(),
        )
    }

    // @method: Build the service from explicit parts
    pub fn with_components(
        translator: BatchTranslator,
        segmenter: Arc<dyn TextSegmenter>,
        extractor: Arc<dyn VocabExtractor>,
        cache: Arc<VocabDetailCache>,
        default_target_language: String,
    ) -> Self {
        Self {
            translator,
            segmenter,
            extractor,
            cache,
            default_target_language,
        }
    }

    // @method: Build the provider named in `config` and wrap it
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = config.build_provider()?;
        info!(
            "Using {} provider with model {}",
            config.provider.provider_type.display_name(),
            config.provider.model
        );
        Ok(Self::new(provider, config))
    }

    /// Split, translate and annotate `request.text`
    ///
    /// Whitespace-only text yields no sentences and no provider call.
    pub async fn translate_text(&self, request: &TranslateRequest) -> Result<TranslateResponse, AppError> {
        let raw = request.text.trim();
        if raw.is_empty() {
            return Ok(TranslateResponse::default());
        }

        let sentences = self.segmenter.segment(raw);
        let target_language = request
            .target_lang
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .unwrap_or(self.default_target_language.as_str());

        debug!("Split input into {} sentence(s)", sentences.len());

        let translations = self
            .translator
            .translate_batch(&sentences, target_language, request.mode)
            .await?;

        let pairs = sentences
            .into_iter()
            .zip(translations)
            .enumerate()
            .map(|(id, (original, translation))| SentencePair {
                id,
                vocab: self.extractor.extract(&original),
                original,
                translation,
            })
            .collect();

        Ok(TranslateResponse { sentences: pairs })
    }

    /// Sentences of `text`, without translation
    pub fn split(&self, text: &str) -> SplitResponse {
        let sentences = self.segmenter.segment(text);
        SplitResponse {
            count: sentences.len(),
            sentences,
        }
    }

    /// Requested detail fields of one word, filling missing ones on demand
    pub async fn vocab_detail(&self, request: &VocabDetailRequest) -> Result<VocabDetail, AppError> {
        if request.lemma.trim().is_empty() {
            return Err(AppError::InvalidInput("lemma must not be empty".to_string()));
        }
        if request.pos.trim().is_empty() {
            return Err(AppError::InvalidInput("pos must not be empty".to_string()));
        }

        let detail = self
            .cache
            .get_detail(&request.lemma, &request.pos, &request.options)
            .await?;

        let stats = self.cache.stats();
        debug!(
            "Vocab cache: {} entries, {} hits, {} misses, {} fills",
            stats.entries, stats.hits, stats.misses, stats.fills
        );

        Ok(detail)
    }

    /// The shared vocabulary cache
    pub fn cache(&self) -> &Arc<VocabDetailCache> {
        &self.cache
    }
}
