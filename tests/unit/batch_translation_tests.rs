/*!
 * Tests for the batch translation protocol
 */

use std::sync::Arc;

use note_english::errors::{ProviderError, UpstreamError, PREVIEW_CHARS};
use note_english::providers::mock::MockProvider;
use note_english::translation::{BatchTranslator, TranslateMode};

use crate::common::mock_providers;

fn sentences(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn translator(mock: &MockProvider) -> BatchTranslator {
    BatchTranslator::new(Arc::new(mock.clone()))
}

#[tokio::test]
async fn test_translate_batch_withEmptyInput_shouldNotCallProvider() {
    let mock = MockProvider::echo_translations();
    let result = translator(&mock)
        .translate_batch(&[], "zh-TW", TranslateMode::Normal)
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_translate_batch_withAlignedResponse_shouldPreserveOrder() {
    let mock = MockProvider::echo_translations();
    let input = sentences(&["I like apples.", "She is reading a book.", "Are you ok?"]);

    let result = translator(&mock)
        .translate_batch(&input, "zh-TW", TranslateMode::Normal)
        .await
        .unwrap();

    assert_eq!(
        result,
        vec!["[0] I like apples.", "[1] She is reading a book.", "[2] Are you ok?"]
    );
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_translate_batch_withShortResponse_shouldPadWithEmptyStrings() {
    let mock = mock_providers::translations(&["A", "B"]);
    let input = sentences(&["one", "two", "three"]);

    let result = translator(&mock)
        .translate_batch(&input, "zh-TW", TranslateMode::Normal)
        .await
        .unwrap();

    assert_eq!(result, vec!["A", "B", ""]);
}

#[tokio::test]
async fn test_translate_batch_withLongResponse_shouldTruncate() {
    let mock = mock_providers::translations(&["A", "B", "C", "D"]);
    let input = sentences(&["one", "two"]);

    let result = translator(&mock)
        .translate_batch(&input, "zh-TW", TranslateMode::Normal)
        .await
        .unwrap();

    assert_eq!(result, vec!["A", "B"]);
}

#[tokio::test]
async fn test_translate_batch_withFencedResponse_shouldUnwrapFence() {
    let mock = MockProvider::responding("```json\n[\"你好\"]\n```");
    let result = translator(&mock)
        .translate_batch(&sentences(&["Hello."]), "zh-TW", TranslateMode::Normal)
        .await
        .unwrap();

    assert_eq!(result, vec!["你好"]);
}

#[tokio::test]
async fn test_translate_batch_withMalformedJson_shouldReturnParseErrorWithBoundedPreview() {
    let raw = format!("Sure! Here are your translations: {}", "x".repeat(1000));
    let mock = MockProvider::responding(raw);

    let err = translator(&mock)
        .translate_batch(&sentences(&["Hello."]), "zh-TW", TranslateMode::Normal)
        .await
        .unwrap_err();

    match err {
        UpstreamError::Parse { preview, .. } => {
            assert_eq!(preview.chars().count(), PREVIEW_CHARS);
            assert!(preview.starts_with("Sure! Here are"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_translate_batch_withObjectResponse_shouldReturnShapeError() {
    let mock = MockProvider::responding(r#"{"translations": ["A"]}"#);
    let err = translator(&mock)
        .translate_batch(&sentences(&["Hello."]), "zh-TW", TranslateMode::Normal)
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Shape(_)));
}

#[tokio::test]
async fn test_translate_batch_withProviderFailure_shouldReturnRequestError() {
    let mock = MockProvider::failing();
    let err = translator(&mock)
        .translate_batch(&sentences(&["Hello."]), "zh-TW", TranslateMode::Normal)
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Request(ProviderError::ApiError { .. })));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_translate_batch_withLearnerMode_shouldSendLearnerPrompt() {
    let mock = MockProvider::echo_translations();
    translator(&mock)
        .translate_batch(&sentences(&["Hello."]), "ja", TranslateMode::Learner)
        .await
        .unwrap();

    let request = &mock.requests()[0];
    assert!(request.json_output);
    assert!(request.prompt.contains("Japanese (ja)"));
    assert!(request.prompt.contains("Avoid omitting subjects or connectors."));
    assert!(request.prompt.contains("0. Hello."));
}

#[tokio::test]
async fn test_translate_batch_withTemperature_shouldForwardIt() {
    let mock = MockProvider::echo_translations();
    BatchTranslator::new(Arc::new(mock.clone()))
        .with_temperature(Some(0.5))
        .translate_batch(&sentences(&["Hello."]), "zh-TW", TranslateMode::Normal)
        .await
        .unwrap();

    assert_eq!(mock.requests()[0].temperature, Some(0.5));
}
