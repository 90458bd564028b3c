use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for target-language tags
///
/// Target languages arrive as BCP 47 style tags (`zh-TW`, `en`, `pt_BR`).
/// Only the primary subtag is resolved through ISO 639; region and script
/// subtags are passed through untouched.
/// Primary language subtag of a tag, lower-cased
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Resolve the primary subtag of `tag` to an ISO 639 language
pub fn resolve_language(tag: &str) -> Result<Language> {
    let primary = primary_subtag(tag);
    let language = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    };
    language.ok_or_else(|| anyhow!("Invalid language code: {}", tag))
}

/// English display name for a tag, e.g. `Chinese` for `zh-TW`
pub fn get_language_name(tag: &str) -> Result<String> {
    Ok(resolve_language(tag)?.to_name().to_string())
}

/// How a target language is named inside prompts
///
/// Known tags render as `"Chinese (zh-TW)"`; unknown tags are used verbatim
/// so the provider still sees what the caller asked for.
pub fn describe_target_language(tag: &str) -> String {
    let tag = tag.trim();
    match get_language_name(tag) {
        Ok(name) => format!("{} ({})", name, tag),
        Err(_) => tag.to_string(),
    }
}
