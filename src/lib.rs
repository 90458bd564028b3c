/*!
 * # NoteEnglish - sentence translation and vocabulary notes
 *
 * A small HTTP service for English learners.
 *
 * ## Features
 *
 * - Split submitted text into sentences
 * - Translate all sentences of a submission in one LLM call, aligned by index
 * - Extract candidate vocabulary per sentence with a POS filter
 * - Look up dictionary details (translation, definition, example, CEFR level)
 *   for a word, generated on demand and cached for the process lifetime
 * - LLM providers:
 *   - Gemini (default)
 *   - Ollama (local LLM)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `nlp`: Sentence segmentation and vocabulary extraction
 * - `translation`: Batch translation protocol:
 *   - `translation::batch`: Single-call batch translation and reconciliation
 *   - `translation::prompts`: Prompt templates
 *   - `translation::response`: Parsing raw LLM output
 * - `vocab`: Vocabulary details:
 *   - `vocab::cache`: Cache-and-fill of detail fields
 *   - `vocab::fill`: LLM field generation
 * - `service`: Request-level flows
 * - `server`: axum router and error mapping
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for LLM providers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod nlp;
pub mod providers;
pub mod server;
pub mod service;
pub mod translation;
pub mod vocab;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, UpstreamError};
pub use service::NoteService;
pub use translation::{BatchTranslator, TranslateMode};
pub use vocab::{VocabDetailCache, VocabOptions};
