/*!
 * Sentence translation.
 *
 * This module is organized into several submodules:
 * - `batch`: Single-request batch translation and result reconciliation
 * - `models`: Wire types of the translate endpoint
 * - `prompts`: Prompt templates and builders
 * - `response`: Parsing raw LLM output into JSON
 */

pub mod batch;
pub mod models;
pub mod prompts;
pub mod response;

pub use batch::{reconcile, BatchTranslator};
pub use models::{SentencePair, SplitResponse, TranslateMode, TranslateRequest, TranslateResponse};
