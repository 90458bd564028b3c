/*!
 * Prompt construction.
 *
 * - `batch_translation_prompt`: numbered sentences, one JSON array back
 * - `field_fill_prompt`: one word, one JSON object back
 */

pub mod templates;

use crate::language_utils::describe_target_language;
use crate::translation::models::TranslateMode;
use crate::vocab::DetailField;

/// Build the prompt for one batch translation call
///
/// Sentence `i` appears on its own line as `"{i}. {sentence}"`.
pub fn batch_translation_prompt(sentences: &[String], target_language: &str, mode: TranslateMode) -> String {
    let style_hint = match mode {
        TranslateMode::Normal => templates::NORMAL_STYLE,
        TranslateMode::Learner => templates::LEARNER_STYLE,
    };

    let mut prompt = templates::BATCH_TRANSLATION
        .replace("{target_language}", &describe_target_language(target_language))
        .replace("{style_hint}", style_hint);
    prompt.push_str("\n\n");

    for (i, sentence) in sentences.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i, sentence));
    }

    prompt
}

/// Build the dictionary prompt for the `requested` fields of one word
pub fn field_fill_prompt(lemma: &str, pos: &str, requested: &[DetailField]) -> String {
    let tasks = if requested.is_empty() {
        "- None".to_string()
    } else {
        requested
            .iter()
            .map(|field| format!("- {}", task_line(*field)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    templates::FIELD_FILL
        .replace("{lemma}", lemma)
        .replace("{pos}", pos)
        .replace("{tasks}", &tasks)
}

fn task_line(field: DetailField) -> &'static str {
    match field {
        DetailField::Translation => templates::TASK_TRANSLATION,
        DetailField::Definition => templates::TASK_DEFINITION,
        DetailField::Example => templates::TASK_EXAMPLE,
        DetailField::Level => templates::TASK_LEVEL,
    }
}
