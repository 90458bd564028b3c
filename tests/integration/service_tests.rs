/*!
 * End-to-end tests of the request-level service flows
 */

use note_english::errors::{AppError, UpstreamError};
use note_english::providers::mock::{MockProvider, MockReply};
use note_english::translation::{TranslateMode, TranslateRequest};
use note_english::vocab::{DetailField, VocabDetailRequest, VocabOptions};

use crate::common::{fill_body, mock_providers, service_with};

#[tokio::test]
async fn test_translate_text_withParagraph_shouldAlignSentencesAndVocab() {
    let mock = MockProvider::echo_translations();
    let service = service_with(&mock);

    let response = service
        .translate_text(&TranslateRequest::new("The cat sat on the cat. Dogs bark loudly!"))
        .await
        .unwrap();

    assert_eq!(response.sentences.len(), 2);
    assert_eq!(mock.call_count(), 1);

    let first = &response.sentences[0];
    assert_eq!(first.id, 0);
    assert_eq!(first.original, "The cat sat on the cat.");
    assert_eq!(first.translation, "[0] The cat sat on the cat.");
    assert_eq!(first.vocab.iter().filter(|v| v.lemma == "cat").count(), 1);

    let second = &response.sentences[1];
    assert_eq!(second.id, 1);
    assert_eq!(second.translation, "[1] Dogs bark loudly!");
    assert!(second.vocab.iter().any(|v| v.lemma == "loudly" && v.pos == "ADV"));
}

#[tokio::test]
async fn test_translate_text_withWhitespaceOnly_shouldSkipProvider() {
    let mock = MockProvider::echo_translations();
    let service = service_with(&mock);

    let response = service.translate_text(&TranslateRequest::new("  \n\t ")).await.unwrap();

    assert!(response.sentences.is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_translate_text_withShortProviderAnswer_shouldPadTranslations() {
    let mock = mock_providers::translations(&["A", "B"]);
    let service = service_with(&mock);

    let response = service
        .translate_text(&TranslateRequest::new("One. Two. Three."))
        .await
        .unwrap();

    let translations: Vec<_> = response.sentences.iter().map(|s| s.translation.as_str()).collect();
    assert_eq!(translations, vec!["A", "B", ""]);
}

#[tokio::test]
async fn test_translate_text_withoutTargetLang_shouldUseConfiguredDefault() {
    let mock = MockProvider::echo_translations();
    let service = service_with(&mock);

    service.translate_text(&TranslateRequest::new("Hello.")).await.unwrap();
    assert!(mock.last_prompt().unwrap().contains("Chinese (zh-TW)"));

    let request = TranslateRequest {
        text: "Hello.".to_string(),
        target_lang: Some("ko".to_string()),
        mode: TranslateMode::Learner,
    };
    service.translate_text(&request).await.unwrap();
    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("Korean (ko)"));
    assert!(prompt.contains("language learners"));
}

#[tokio::test]
async fn test_translate_text_withMalformedAnswer_shouldFailWholeRequest() {
    let mock = MockProvider::responding("Sorry, I can't do that.");
    let service = service_with(&mock);

    let err = service
        .translate_text(&TranslateRequest::new("Hello. Bye."))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(UpstreamError::Parse { .. })));
}

#[test]
fn test_split_withAbbreviations_shouldCountSentences() {
    let service = service_with(&MockProvider::failing());
    let split = service.split("Dr. Smith is here. He is late.");

    assert_eq!(split.count, 2);
    assert_eq!(split.sentences, vec!["Dr. Smith is here.", "He is late."]);
}

#[tokio::test]
async fn test_vocab_detail_withRepeatedLookup_shouldHitCache() {
    let mock = mock_providers::dictionary("銀行", "A place that keeps money.", "I went to the bank.", "A2");
    let service = service_with(&mock);
    let request = VocabDetailRequest {
        lemma: "Bank".to_string(),
        pos: "NOUN".to_string(),
        options: VocabOptions::all(),
    };

    let first = service.vocab_detail(&request).await.unwrap();
    let second = service.vocab_detail(&request).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.lemma, "Bank");
    assert_eq!(first.level.as_deref(), Some("A2"));
    assert_eq!(mock.call_count(), 1);
    assert_eq!(service.cache().len(), 1);
}

#[tokio::test]
async fn test_vocab_detail_withEmptyLemma_shouldRejectInput() {
    let mock = mock_providers::dictionary("", "", "", "");
    let service = service_with(&mock);
    let request = VocabDetailRequest {
        lemma: "  ".to_string(),
        pos: "NOUN".to_string(),
        options: VocabOptions::all(),
    };

    let err = service.vocab_detail(&request).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_vocab_detail_withFailingThenWorkingProvider_shouldRetry() {
    let mock = mock_providers::scripted(vec![
        MockReply::Error("timeout".to_string()),
        MockReply::Text(fill_body("跑", "", "", "")),
    ]);
    let service = service_with(&mock);
    let request = VocabDetailRequest {
        lemma: "run".to_string(),
        pos: "VERB".to_string(),
        options: VocabOptions::only(&[DetailField::Translation]),
    };

    assert!(service.vocab_detail(&request).await.is_err());
    let detail = service.vocab_detail(&request).await.unwrap();
    assert_eq!(detail.translation.as_deref(), Some("跑"));
}
