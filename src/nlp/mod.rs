/*!
 * Text collaborators: sentence segmentation and vocabulary extraction.
 *
 * The service only depends on the two traits below. The rule-based
 * implementations in `segmenter` and `extractor` are deterministic and need
 * no model files; any other NLP backend can be plugged in behind the same
 * traits.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab::VocabItem;

pub mod extractor;
pub mod segmenter;
pub mod stop_words;
pub mod tagger;

pub use self::extractor::RuleVocabExtractor;
pub use self::segmenter::RuleSegmenter;
pub use self::tagger::{PosTag, RuleTagger};

/// Splits raw text into sentences
pub trait TextSegmenter: Send + Sync {
    /// Ordered, non-empty, trimmed sentences of `text`
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Extracts candidate vocabulary from one sentence
pub trait VocabExtractor: Send + Sync {
    /// Items in first-occurrence order, unique by (lemma, pos)
    fn extract(&self, sentence: &str) -> Vec<VocabItem>;
}

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Replace non-breaking spaces, unify newlines and collapse whitespace runs
pub fn normalize_text(text: &str) -> String {
    let text = text
        .replace('\u{00a0}', " ")
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}
