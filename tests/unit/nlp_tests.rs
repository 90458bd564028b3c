/*!
 * Tests for sentence segmentation and vocabulary extraction
 */

use note_english::nlp::{normalize_text, RuleSegmenter, RuleVocabExtractor, TextSegmenter, VocabExtractor};

#[test]
fn test_segment_withMixedPunctuation_shouldSplitInOrder() {
    let sentences = RuleSegmenter::new().segment("I like apples. She is reading a book! Is it good?");
    assert_eq!(
        sentences,
        vec!["I like apples.", "She is reading a book!", "Is it good?"]
    );
}

#[test]
fn test_segment_withRepeatedSentences_shouldKeepDuplicates() {
    let sentences = RuleSegmenter::new().segment("Hello. Hello. Hello.");
    assert_eq!(sentences, vec!["Hello.", "Hello.", "Hello."]);
}

#[test]
fn test_segment_withWhitespaceOnly_shouldReturnNothing() {
    assert!(RuleSegmenter::new().segment("   \n\t  ").is_empty());
}

#[test]
fn test_normalize_text_withNbspAndNewlines_shouldCollapse() {
    assert_eq!(normalize_text("a\u{00a0}b\r\n\r\nc   d "), "a b c d");
}

#[test]
fn test_extract_withRepeatedNoun_shouldYieldSingleItem() {
    let items = RuleVocabExtractor::new().extract("The cat sat on the cat.");
    let cats: Vec<_> = items.iter().filter(|v| v.lemma == "cat").collect();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].pos, "NOUN");
}

#[test]
fn test_extract_withSentence_shouldOnlyReturnAllowedPos() {
    let allowed = ["NOUN", "VERB", "ADJ", "ADV", "ADP", "SCONJ"];
    let items = RuleVocabExtractor::new().extract("The old man slowly walked across the quiet street.");

    assert!(!items.is_empty());
    for item in &items {
        assert!(allowed.contains(&item.pos.as_str()), "unexpected POS {:?}", item);
        assert!(item.text.chars().all(char::is_alphabetic));
        assert_eq!(item.lemma, item.lemma.to_lowercase());
    }
    assert!(items.iter().any(|v| v.lemma == "walk" && v.pos == "VERB"));
    assert!(items.iter().any(|v| v.lemma == "street" && v.pos == "NOUN"));
}

#[test]
fn test_extract_withStopWordsOnly_shouldReturnNothing() {
    assert!(RuleVocabExtractor::new().extract("It is what it is.").is_empty());
}

#[test]
fn test_segment_withPronounI_shouldEndSentence() {
    let sentences = RuleSegmenter::new().segment("She agreed, and so did I. We left together.");
    assert_eq!(sentences, vec!["She agreed, and so did I.", "We left together."]);
}

#[test]
fn test_segment_withLetterAfterLowercaseWord_shouldEndSentence() {
    let sentences = RuleSegmenter::new().segment("Take vitamin C. It helps.");
    assert_eq!(sentences, vec!["Take vitamin C.", "It helps."]);
}

#[test]
fn test_segment_withInitialsInName_shouldKeepSentence() {
    let sentences = RuleSegmenter::new().segment("J. R. R. Tolkien wrote it. John F. Kennedy read it.");
    assert_eq!(sentences, vec!["J. R. R. Tolkien wrote it.", "John F. Kennedy read it."]);
}

#[test]
fn test_extract_withParticipleModifier_shouldTagPluralAsNoun() {
    let items = RuleVocabExtractor::new().extract("The running dogs were happily barking.");

    assert!(items.iter().any(|v| v.text == "dogs" && v.lemma == "dog" && v.pos == "NOUN"));
    assert!(items.iter().any(|v| v.lemma == "bark" && v.pos == "VERB"));
    assert!(!items.iter().any(|v| v.lemma == "dog" && v.pos == "VERB"));
}
