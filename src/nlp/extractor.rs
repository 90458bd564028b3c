//! Vocabulary extraction from a single sentence.

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use super::stop_words::is_stop_word;
use super::tagger::{PosTag, RuleTagger};
use super::VocabExtractor;
use crate::vocab::{VocabDetailKey, VocabItem};

/// Parts of speech worth a vocabulary card
pub const ALLOWED_POS: [PosTag; 6] = [
    PosTag::Noun,
    PosTag::Verb,
    PosTag::Adj,
    PosTag::Adv,
    PosTag::Adp,
    PosTag::Sconj,
];

/// Tags every word, then keeps alphabetic non-stop-word tokens with an allowed tag
#[derive(Debug, Default, Clone)]
pub struct RuleVocabExtractor {
    tagger: RuleTagger,
}

impl RuleVocabExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self { tagger: RuleTagger::new() }
    }
}

impl VocabExtractor for RuleVocabExtractor {
    fn extract(&self, sentence: &str) -> Vec<VocabItem> {
        let tokens: Vec<&str> = sentence.unicode_words().collect();
        let mut seen = HashSet::new();
        let mut vocab = Vec::new();

        for token in self.tagger.tag(&tokens) {
            if !token.text.chars().all(char::is_alphabetic) {
                continue;
            }
            if is_stop_word(token.text) {
                continue;
            }
            if !ALLOWED_POS.contains(&token.pos) {
                continue;
            }

            let lemma = token.lemma.trim().to_lowercase();
            if lemma.is_empty() {
                continue;
            }

            let pos = token.pos.as_str();
            if !seen.insert(VocabDetailKey::new(&lemma, pos)) {
                continue;
            }

            vocab.push(VocabItem {
                text: token.text.to_string(),
                lemma,
                pos: pos.to_string(),
            });
        }

        vocab
    }
}
