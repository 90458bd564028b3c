/*!
 * Tests for the LLM field-fill protocol
 */

use std::sync::Arc;

use note_english::errors::UpstreamError;
use note_english::providers::mock::MockProvider;
use note_english::vocab::{DetailField, FieldFiller, LlmFieldFiller, DEFAULT_FILL_TEMPERATURE};

use crate::common::mock_providers;

#[tokio::test]
async fn test_fill_fields_withObjectResponse_shouldReturnRawObject() {
    let mock = mock_providers::dictionary("跑", "To move fast.", "I run daily.", "A1");
    let filler = LlmFieldFiller::new(Arc::new(mock.clone()));

    let fields = filler
        .fill_fields("run", "VERB", &[DetailField::Translation])
        .await
        .unwrap();

    assert_eq!(fields.len(), 4);
    assert_eq!(fields["translation"], "跑");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_fill_fields_withRequest_shouldUseLowTemperatureAndJsonHint() {
    let mock = mock_providers::dictionary("", "", "", "");
    LlmFieldFiller::new(Arc::new(mock.clone()))
        .fill_fields("bank", "NOUN", &[DetailField::Definition, DetailField::Example])
        .await
        .unwrap();

    let request = &mock.requests()[0];
    assert_eq!(request.temperature, Some(DEFAULT_FILL_TEMPERATURE));
    assert!(request.json_output);
    assert!(request.prompt.contains("Word: \"bank\""));
    assert!(request.prompt.contains("Part of speech: NOUN"));
    assert!(request.prompt.contains("- definition:"));
    assert!(request.prompt.contains("- example:"));
    assert!(!request.prompt.contains("- translation:"));
}

#[tokio::test]
async fn test_fill_fields_withPartialObject_shouldNotFail() {
    let mock = MockProvider::responding(r#"{"definition": "A place for money."}"#);
    let fields = LlmFieldFiller::new(Arc::new(mock))
        .fill_fields("bank", "NOUN", &DetailField::ALL)
        .await
        .unwrap();

    assert_eq!(fields.len(), 1);
}

#[tokio::test]
async fn test_fill_fields_withArrayResponse_shouldReturnShapeError() {
    let mock = MockProvider::responding(r#"["translation"]"#);
    let err = LlmFieldFiller::new(Arc::new(mock))
        .fill_fields("bank", "NOUN", &DetailField::ALL)
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Shape(_)));
}

#[tokio::test]
async fn test_fill_fields_withProse_shouldReturnParseError() {
    let mock = MockProvider::responding("I cannot help with that.");
    let err = LlmFieldFiller::new(Arc::new(mock))
        .fill_fields("bank", "NOUN", &DetailField::ALL)
        .await
        .unwrap_err();

    match err {
        UpstreamError::Parse { preview, .. } => assert_eq!(preview, "I cannot help with that."),
        other => panic!("expected parse error, got {:?}", other),
    }
}
