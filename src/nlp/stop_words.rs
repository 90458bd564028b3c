//! English stop words skipped during vocabulary extraction.
//!
//! Function words and very frequent adverbs carry little value on a
//! vocabulary card. Matching is done on the lower-cased surface form.

use std::collections::HashSet;
use once_cell::sync::Lazy;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles & determiners
        "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
        "all", "any", "both", "few", "many", "much", "more", "most", "several", "some", "such",
        "no", "none", "nor", "other", "another", "own", "same", "whatever", "whichever",
        // pronouns
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves",
        "you", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
        "she", "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
        "theirs", "themselves", "who", "whom", "whose", "what", "which",
        "anyone", "anything", "anybody", "everyone", "everything", "everybody", "someone",
        "something", "somebody", "nobody", "nothing", "noone",
        // be / have / do
        "am", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "having", "do", "does", "did", "doing", "done",
        // modals
        "can", "could", "may", "might", "must", "shall", "should", "will", "would", "cannot",
        // prepositions
        "about", "above", "across", "after", "against", "along", "amongst", "among", "around",
        "at", "before", "behind", "below", "beside", "besides", "between", "beyond", "by",
        "down", "during", "except", "for", "from", "in", "into", "of", "off", "on", "onto",
        "out", "over", "per", "since", "through", "throughout", "thru", "to", "toward",
        "towards", "under", "until", "up", "upon", "via", "with", "within", "without",
        // conjunctions
        "and", "but", "or", "so", "yet", "if", "because", "although", "though", "unless",
        "whereas", "whether", "while", "than", "as", "once", "whereby", "wherein", "whereupon",
        // wh-adverbs
        "when", "whenever", "where", "wherever", "why", "how", "however",
        // frequent adverbs
        "again", "almost", "alone", "already", "also", "always", "ever", "even", "just",
        "least", "less", "else", "elsewhere", "enough", "here", "hence", "indeed", "later",
        "maybe", "meanwhile", "moreover", "never", "nevertheless", "next", "not", "now",
        "nowhere", "often", "only", "perhaps", "quite", "rather", "really", "still", "then",
        "there", "thereafter", "thereby", "therefore", "thus", "together", "too", "very",
        "well", "somehow", "sometime", "sometimes", "somewhere", "anyhow", "anyway",
        "anywhere", "everywhere", "otherwise", "afterwards", "beforehand", "formerly",
        "latterly", "mostly",
        // numerals
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "fifteen", "twenty", "forty", "fifty", "hundred", "first", "last",
        // light verbs and misc
        "get", "give", "go", "make", "put", "say", "see", "seem", "seemed", "seeming", "seems",
        "show", "take", "call", "keep", "become", "became", "becomes", "becoming", "used",
        "using", "please", "various", "full", "further", "front", "back", "top", "bottom",
        "side", "part", "whole", "empty", "name", "former", "latter", "re", "ca", "yes",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` (any case) is a stop word
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}
