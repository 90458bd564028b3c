/*!
 * Vocabulary details.
 *
 * - `models`: wire types, cache key and cached entries
 * - `fill`: LLM-backed generation of missing fields
 * - `cache`: process-lifetime detail cache
 */

pub mod cache;
pub mod fill;
pub mod models;

pub use cache::{CacheStats, VocabDetailCache};
pub use fill::{FieldFiller, LlmFieldFiller, DEFAULT_FILL_TEMPERATURE};
pub use models::{
    CachedVocabEntry, CefrLevel, DetailField, VocabDetail, VocabDetailKey, VocabDetailRequest,
    VocabItem, VocabOptions,
};
