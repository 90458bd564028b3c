/*!
 * Prompt templates for batch translation and dictionary field filling.
 *
 * Both prompts ask for bare JSON: the responses are parsed directly, so
 * the wording insists on no prose and no markdown.
 */

/// Style hint for `TranslateMode::Normal`
pub const NORMAL_STYLE: &str = "Use natural, fluent translation.";

/// Style hint for `TranslateMode::Learner`
pub const LEARNER_STYLE: &str = "Translate for language learners. \
Keep sentence structure clear and explicit. \
Avoid omitting subjects or connectors.";

/// Header of the batch translation prompt; numbered sentences follow it
pub const BATCH_TRANSLATION: &str = "Translate each sentence into {target_language}. \
{style_hint} \
Return ONLY a JSON array of strings. \
The array length and order MUST match the input. \
No explanation, no markdown.";

/// Dictionary prompt used to fill missing vocabulary fields
pub const FIELD_FILL: &str = r#"You are an English dictionary for intermediate to advanced learners.

Word: "{lemma}"
Part of speech: {pos}

You MUST return a JSON object with EXACTLY these keys:
- translation
- definition
- example
- level

Tasks to fill:
{tasks}

Rules:
- Use ONLY the given part of speech.
- If a field is NOT listed in "Tasks to fill", return an empty string "" for that field.
- Definition must be ONE clear sentence in English only.
- Translation must be Traditional Chinese (zh-TW).
- Example must be ONE natural sentence using the word.
- Level must be one of: A1, A2, B1, B2, C1, C2.
- Do NOT add extra text.
- Return ONLY valid JSON."#;

/// Task line for translation
pub const TASK_TRANSLATION: &str = "translation: Traditional Chinese meaning of the word.";
/// Task line for definition
pub const TASK_DEFINITION: &str = "definition: ONE clear English definition.";
/// Task line for example
pub const TASK_EXAMPLE: &str = "example: One natural example sentence.";
/// Task line for level
pub const TASK_LEVEL: &str = "level: CEFR level (A1-C2).";
