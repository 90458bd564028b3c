/*!
 * Tests for language tag utilities
 */

use note_english::language_utils::{describe_target_language, get_language_name, primary_subtag, resolve_language};

#[test]
fn test_primary_subtag_withRegionTags_shouldReturnLanguage() {
    assert_eq!(primary_subtag("zh-TW"), "zh");
    assert_eq!(primary_subtag("en_US"), "en");
    assert_eq!(primary_subtag("ja"), "ja");
}

#[test]
fn test_get_language_name_withValidCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("zh-TW").unwrap(), "Chinese");
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert_eq!(get_language_name("deu").unwrap(), "German");
}

#[test]
fn test_resolve_language_withInvalidCodes_shouldFail() {
    assert!(resolve_language("").is_err());
    assert!(resolve_language("xx").is_err());
    assert!(resolve_language("klingon").is_err());
}

#[test]
fn test_describe_target_language_shouldNameKnownTags() {
    assert_eq!(describe_target_language("zh-TW"), "Chinese (zh-TW)");
    assert_eq!(describe_target_language("es"), "Spanish (es)");
    assert_eq!(describe_target_language("elvish"), "elvish");
}
