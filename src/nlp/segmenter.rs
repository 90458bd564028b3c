//! Rule-based sentence segmentation.

use std::collections::HashSet;
use once_cell::sync::Lazy;

use super::{TextSegmenter, normalize_text};

/// Lower-cased abbreviations (without the final period) that never end a sentence
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // titles
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "gen", "col", "capt", "lt", "sgt",
        // latin & references
        "e.g", "i.e", "etc", "vs", "cf", "al", "approx", "fig", "no", "vol", "pp", "ed",
        // organisations & places
        "inc", "ltd", "co", "corp", "dept", "univ", "u.s", "u.k", "u.s.a", "ave", "blvd", "rd",
        // months
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        // time
        "a.m", "p.m",
    ]
    .into_iter()
    .collect()
});

/// Splits after `.`, `!` and `?` when the next word does not start in lower case
#[derive(Debug, Default, Clone)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Split already-normalized text
    fn split_normalized(text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !is_terminator(chars[i]) {
                i += 1;
                continue;
            }

            let mark = i;
            let mut end = i + 1;
            while end < chars.len() && is_terminator(chars[end]) {
                end += 1;
            }
            while end < chars.len() && is_closer(chars[end]) {
                end += 1;
            }

            let at_boundary = end >= chars.len() || chars[end] == ' ';
            let next_starts_lower = chars
                .get(end + 1)
                .is_some_and(|c| c.is_lowercase());

            if at_boundary
                && !next_starts_lower
                && !(chars[mark] == '.' && end - mark == 1 && ends_with_abbreviation(&chars, start, mark))
            {
                push_sentence(&mut sentences, &chars[start..end]);
                start = end;
            }
            i = end;
        }

        push_sentence(&mut sentences, &chars[start..]);
        sentences
    }
}

impl TextSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return Vec::new();
        }
        Self::split_normalized(&normalized)
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

/// Whether the word right before the period at `mark` is an abbreviation or an initial
fn ends_with_abbreviation(chars: &[char], start: usize, mark: usize) -> bool {
    let begin = word_start(chars, start, mark);
    let word: String = chars[begin..mark].iter().collect();

    if word.is_empty() {
        return false;
    }
    if is_single_capital(&chars[begin..mark]) {
        return is_initial(chars, start, begin, mark);
    }

    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

/// A lone capital is an initial only inside a name: `J. R. Tolkien`, `John F. Kennedy`.
/// The pronoun `I` and letters such as `vitamin C.` end the sentence.
fn is_initial(chars: &[char], start: usize, letter: usize, mark: usize) -> bool {
    if chars[letter] == 'I' {
        return false;
    }

    let next = next_word(chars, mark + 1);
    if is_initial_token(next) {
        return true;
    }

    let mut prev_end = letter;
    while prev_end > start && chars[prev_end - 1].is_whitespace() {
        prev_end -= 1;
    }
    let prev = &chars[word_start(chars, start, prev_end)..prev_end];
    if is_initial_token(prev) {
        return true;
    }

    let capitalized = |w: &[char]| w.first().is_some_and(|c| c.is_uppercase());
    capitalized(prev) && capitalized(next)
}

/// Start of the word ending at `end`, not before `floor`
fn word_start(chars: &[char], floor: usize, end: usize) -> usize {
    let mut i = end;
    while i > floor && !chars[i - 1].is_whitespace() && !matches!(chars[i - 1], '(' | '"' | '“') {
        i -= 1;
    }
    i
}

/// The whitespace-delimited word starting after position `from`
fn next_word(chars: &[char], from: usize) -> &[char] {
    let begin = (from..chars.len()).find(|&i| !chars[i].is_whitespace()).unwrap_or(chars.len());
    let finish = (begin..chars.len()).find(|&i| chars[i].is_whitespace()).unwrap_or(chars.len());
    &chars[begin..finish]
}

fn is_single_capital(word: &[char]) -> bool {
    matches!(word, [c] if c.is_uppercase())
}

/// `R.` style token
fn is_initial_token(word: &[char]) -> bool {
    matches!(word, [c, '.'] if c.is_uppercase() && *c != 'I')
}

fn push_sentence(sentences: &mut Vec<String>, chars: &[char]) {
    let sentence: String = chars.iter().collect();
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}
