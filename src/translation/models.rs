/*!
 * Request and response types of the translate endpoint.
 */

use serde::{Deserialize, Serialize};

use crate::vocab::VocabItem;

/// Translation style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslateMode {
    /// Natural, fluent output
    #[default]
    Normal,
    /// Explicit grammar for language learners
    Learner,
}

/// Body of `POST /translate` and `POST /debug/split`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Target language tag; the configured default when absent
    #[serde(default)]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub mode: TranslateMode,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: None,
            mode: TranslateMode::Normal,
        }
    }
}

/// One sentence with its translation and extracted vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencePair {
    /// 0-based position in the submitted text
    pub id: usize,
    pub original: String,
    pub translation: String,
    pub vocab: Vec<VocabItem>,
}

/// Response of `POST /translate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub sentences: Vec<SentencePair>,
}

/// Response of `POST /debug/split`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitResponse {
    pub count: usize,
    pub sentences: Vec<String>,
}
