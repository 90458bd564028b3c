/*!
 * Lexicon and suffix based part-of-speech tagger with a rule lemmatizer.
 *
 * Tags follow the Universal Dependencies POS set. Closed word classes are
 * looked up in fixed lexicons; open classes are decided from a small set of
 * known forms, suffixes and the previous token. Lemmas are produced for
 * nouns, verbs and comparative adjectives; every other lemma is the
 * lower-cased surface form.
 */

use std::collections::{HashMap, HashSet};
use std::fmt;
use once_cell::sync::Lazy;

/// Universal POS tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Sconj,
    Verb,
    X,
}

impl PosTag {
    /// Upper-case UD tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Sconj => "SCONJ",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged token borrowing its surface text from the sentence
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedToken<'a> {
    pub text: &'a str,
    pub pos: PosTag,
    pub lemma: String,
}

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static DETERMINERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
        "some", "any", "no", "all", "both", "another", "such", "what", "which", "whatever",
        "my", "your", "his", "her", "its", "our", "their", "whose",
    ])
});

static PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "i", "me", "mine", "myself", "we", "us", "ours", "ourselves", "you", "yours", "yourself",
        "yourselves", "he", "him", "himself", "she", "hers", "herself", "it", "itself", "they",
        "them", "theirs", "themselves", "who", "whom", "someone", "something", "somebody",
        "anyone", "anything", "anybody", "everyone", "everything", "everybody", "nobody",
        "nothing", "none",
    ])
});

static SUBJECT_PRONOUNS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["i", "we", "you", "he", "she", "it", "they", "who"]));

static AUXILIARIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
        ("be", "be"), ("been", "be"), ("being", "be"),
        ("do", "do"), ("does", "do"), ("did", "do"),
        ("have", "have"), ("has", "have"), ("had", "have"),
        ("can", "can"), ("could", "could"), ("may", "may"), ("might", "might"),
        ("must", "must"), ("shall", "shall"), ("should", "should"), ("will", "will"),
        ("would", "would"),
    ]
    .into_iter()
    .collect()
});

/// Auxiliaries that only agree with a plural subject
static PLURAL_AUXILIARIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["are", "were", "have", "do"]));

static MODALS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&["can", "could", "may", "might", "must", "shall", "should", "will", "would", "do", "does", "did"])
});

static COORDINATORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["and", "but", "or", "nor", "yet", "so"]));

static ADPOSITIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "about", "above", "across", "after", "against", "along", "amid", "among", "amongst",
        "around", "at", "before", "behind", "below", "beneath", "beside", "besides", "between",
        "beyond", "by", "despite", "down", "during", "except", "for", "from", "in", "inside",
        "into", "near", "of", "off", "on", "onto", "opposite", "outside", "over", "past", "per",
        "regarding", "since", "through", "throughout", "toward", "towards", "under",
        "underneath", "unlike", "until", "upon", "via", "with", "within", "without",
    ])
});

static SUBORDINATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "although", "because", "if", "lest", "once", "than", "though", "unless", "whereas",
        "whether", "while", "whilst",
    ])
});

static INTERJECTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["oh", "ah", "wow", "hey", "hello", "hi", "yes", "no", "ok", "okay", "oops", "please"]));

static NUMBERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
        "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
        "eighty", "ninety", "hundred", "thousand", "million", "billion",
    ])
});

static ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "again", "almost", "already", "also", "always", "away", "here", "there", "now", "then",
        "never", "not", "often", "once", "soon", "still", "too", "very", "well", "yet", "just",
        "quite", "rather", "seldom", "sometimes", "today", "tomorrow", "tonight", "yesterday",
        "abroad", "ahead", "anyway", "indeed", "instead", "later", "maybe", "perhaps", "thus",
        "together", "everywhere", "somewhere", "nowhere", "hard", "fast", "late", "ever",
        "how", "when", "where", "why",
    ])
});

static ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "able", "afraid", "angry", "bad", "beautiful", "big", "black", "blue", "bright", "brave",
        "busy", "calm", "cheap", "clean", "clear", "clever", "close", "cold", "cool", "cute",
        "daily", "dark", "dead", "deep", "different", "difficult", "dirty", "dry", "early",
        "easy", "empty", "famous", "far", "fast", "fat", "fine", "free", "fresh", "friendly",
        "full", "funny", "gentle", "glad", "good", "great", "green", "happy", "hard", "healthy",
        "heavy", "high", "holy", "honest", "hot", "huge", "hungry", "important", "kind",
        "large", "late", "lazy", "likely", "little", "lonely", "long", "loud", "lovely", "low",
        "lucky", "main", "modern", "narrow", "nasty", "near", "new", "nice", "noisy", "old",
        "open", "orange", "patient", "perfect", "pink", "polite", "poor", "pretty", "proud",
        "purple", "quick", "quiet", "rare", "ready", "real", "recent", "red", "rich", "right",
        "rough", "round", "sad", "safe", "sharp", "short", "shy", "sick", "silly", "simple",
        "slow", "small", "smart", "soft", "sorry", "special", "strange", "strong", "stupid",
        "sure", "sweet", "tall", "thick", "thin", "tiny", "tired", "true", "ugly", "warm",
        "weak", "wet", "white", "whole", "wide", "wild", "wise", "wrong", "yellow", "young",
    ])
});

/// Words ending in -ly that are not adverbs
static LY_NON_ADVERBS: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    [
        ("family", PosTag::Noun), ("belly", PosTag::Noun), ("jelly", PosTag::Noun),
        ("lily", PosTag::Noun), ("ally", PosTag::Noun), ("rally", PosTag::Noun),
        ("bully", PosTag::Noun), ("assembly", PosTag::Noun), ("butterfly", PosTag::Noun),
        ("reply", PosTag::Verb), ("supply", PosTag::Verb), ("apply", PosTag::Verb),
        ("imply", PosTag::Verb), ("rely", PosTag::Verb), ("fly", PosTag::Verb),
        ("multiply", PosTag::Verb),
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("went", "go"), ("gone", "go"), ("goes", "go"), ("ran", "run"), ("sat", "sit"),
        ("saw", "see"), ("seen", "see"), ("ate", "eat"), ("eaten", "eat"), ("took", "take"),
        ("taken", "take"), ("gave", "give"), ("given", "give"), ("came", "come"),
        ("made", "make"), ("said", "say"), ("says", "say"), ("got", "get"), ("gotten", "get"),
        ("knew", "know"), ("known", "know"), ("thought", "think"), ("told", "tell"),
        ("found", "find"), ("left", "leave"), ("felt", "feel"), ("kept", "keep"),
        ("began", "begin"), ("begun", "begin"), ("brought", "bring"), ("bought", "buy"),
        ("built", "build"), ("caught", "catch"), ("chose", "choose"), ("chosen", "choose"),
        ("drank", "drink"), ("drunk", "drink"), ("drove", "drive"), ("driven", "drive"),
        ("fell", "fall"), ("fallen", "fall"), ("flew", "fly"), ("flown", "fly"),
        ("forgot", "forget"), ("forgotten", "forget"), ("grew", "grow"), ("grown", "grow"),
        ("heard", "hear"), ("held", "hold"), ("lost", "lose"), ("met", "meet"), ("paid", "pay"),
        ("rode", "ride"), ("ridden", "ride"), ("rose", "rise"), ("risen", "rise"),
        ("sang", "sing"), ("sung", "sing"), ("slept", "sleep"), ("spoke", "speak"),
        ("spoken", "speak"), ("spent", "spend"), ("stood", "stand"), ("swam", "swim"),
        ("taught", "teach"), ("threw", "throw"), ("thrown", "throw"),
        ("understood", "understand"), ("woke", "wake"), ("woken", "wake"), ("wore", "wear"),
        ("worn", "wear"), ("won", "win"), ("wrote", "write"), ("written", "write"),
        ("broke", "break"), ("broken", "break"), ("fought", "fight"), ("sent", "send"),
        ("sold", "sell"), ("hid", "hide"), ("hidden", "hide"), ("led", "lead"),
        ("meant", "mean"), ("sought", "seek"), ("shook", "shake"), ("shaken", "shake"),
        ("stole", "steal"), ("stolen", "steal"), ("struck", "strike"), ("became", "become"),
        ("forgave", "forgive"), ("forgiven", "forgive"), ("dying", "die"), ("lying", "lie"),
        ("tying", "tie"),
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"), ("men", "man"), ("women", "woman"), ("people", "person"),
        ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
        ("knives", "knife"), ("wives", "wife"), ("lives", "life"), ("leaves", "leaf"),
        ("wolves", "wolf"), ("halves", "half"), ("shelves", "shelf"), ("potatoes", "potato"),
        ("tomatoes", "tomato"), ("heroes", "hero"),
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_ADJECTIVES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
        ("farther", "far"), ("further", "far"), ("elder", "old"), ("eldest", "old"),
    ]
    .into_iter()
    .collect()
});

/// Regular verbs whose base form ends in a silent `e`
static E_FINAL_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "achieve", "agree", "arrive", "argue", "bake", "believe", "become", "care", "cause",
        "change", "chase", "choose", "close", "come", "compare", "complete", "continue", "create",
        "dance", "decide", "describe", "die", "drive", "excite", "explore", "face", "force",
        "give", "hate", "have", "hide", "hike", "hope", "imagine", "improve", "include",
        "joke", "judge", "leave", "like", "live", "lose", "love", "make", "manage", "measure",
        "move", "name", "note", "notice", "phone", "place", "practice", "prepare", "produce",
        "provide", "quote", "race", "raise", "rate", "realize", "receive", "reduce", "refuse",
        "remove", "replace", "ride", "rise", "rule", "save", "score", "serve", "shake",
        "share", "shine", "skate", "slide", "smile", "solve", "suppose", "take", "taste",
        "trade", "type", "use", "vote", "wake", "wave", "write",
    ])
});

/// Frequent regular verb bases, used for base-form detection
static VERB_BASES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut bases = set(&[
        "ask", "answer", "bring", "build", "buy", "call", "catch", "clean", "cook", "cry",
        "drink", "eat", "fall", "feel", "fight", "find", "finish", "fly", "follow", "forget",
        "grow", "happen", "hear", "help", "hold", "jump", "keep", "know", "laugh", "learn",
        "listen", "look", "meet", "need", "open", "pay", "play", "pull", "push", "read",
        "remember", "run", "sell", "send", "sing", "sit", "sleep", "speak", "spend", "stand",
        "start", "stay", "stop", "study", "swim", "talk", "teach", "tell", "think", "throw",
        "travel", "try", "understand", "visit", "wait", "walk", "want", "watch", "wear", "win",
        "wish", "work", "worry",
    ]);
    bases.extend(E_FINAL_VERBS.iter().copied());
    bases.extend(IRREGULAR_VERBS.values().copied());
    bases
});

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ance", "ence", "ship", "hood",
    "dom", "ery", "logy", "graphy",
];

const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "less", "ical", "ic", "ish", "ial",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Rule-based tagger
#[derive(Debug, Default, Clone)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a new tagger
    pub fn new() -> Self {
        Self
    }

    /// Tag a sequence of word tokens from one sentence
    pub fn tag<'a>(&self, tokens: &[&'a str]) -> Vec<TaggedToken<'a>> {
        let mut tagged: Vec<TaggedToken<'a>> = Vec::with_capacity(tokens.len());

        for (index, &text) in tokens.iter().enumerate() {
            let lower = text.to_lowercase();
            let prev = index.checked_sub(1).map(|i| (&tagged[i], tokens[i].to_lowercase()));
            let next = tokens.get(index + 1).map(|t| t.to_lowercase());
            let (pos, lemma) = Self::tag_word(text, &lower, index == 0, prev, next.as_deref());
            tagged.push(TaggedToken { text, pos, lemma });
        }

        tagged
    }

    fn tag_word(
        text: &str,
        lower: &str,
        sentence_start: bool,
        prev: Option<(&TaggedToken<'_>, String)>,
        next: Option<&str>,
    ) -> (PosTag, String) {
        let word = lower.to_string();
        let prev_pos = prev.as_ref().map(|(t, _)| t.pos);
        let prev_lower = prev.as_ref().map(|(_, l)| l.as_str());

        if !lower.chars().all(char::is_alphabetic) {
            let pos = if lower.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
                PosTag::Num
            } else {
                PosTag::X
            };
            return (pos, word);
        }

        // closed classes
        if lower == "to" {
            let before_verb = next.is_some_and(|n| VERB_BASES.contains(n));
            return (if before_verb { PosTag::Part } else { PosTag::Adp }, word);
        }
        if lower == "not" {
            return (PosTag::Part, word);
        }
        if let Some(lemma) = AUXILIARIES.get(lower) {
            let main_verb = matches!(*lemma, "have" | "do")
                && !next.is_some_and(|n| Self::looks_verbal(n) || lower == "do" && n == "not");
            let pos = if main_verb { PosTag::Verb } else { PosTag::Aux };
            return (pos, lemma.to_string());
        }
        if lower == "her" {
            let pos = if next.is_some_and(Self::starts_noun_phrase) { PosTag::Det } else { PosTag::Pron };
            return (pos, word);
        }
        if DETERMINERS.contains(lower) {
            return (PosTag::Det, word);
        }
        if PRONOUNS.contains(lower) {
            return (PosTag::Pron, word);
        }
        if COORDINATORS.contains(lower) {
            return (PosTag::Cconj, word);
        }
        if SUBORDINATORS.contains(lower) {
            return (PosTag::Sconj, word);
        }
        if ADPOSITIONS.contains(lower) {
            return (PosTag::Adp, word);
        }
        if NUMBERS.contains(lower) {
            return (PosTag::Num, word);
        }
        if INTERJECTIONS.contains(lower) && (sentence_start || prev_pos.is_none()) {
            return (PosTag::Intj, word);
        }

        let capitalized = text.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return (PosTag::Propn, text.to_string());
        }

        let after_determiner = matches!(prev_pos, Some(PosTag::Det) | Some(PosTag::Adj) | Some(PosTag::Num));
        let after_verb_trigger = prev_lower
            .is_some_and(|p| SUBJECT_PRONOUNS.contains(p) || MODALS.contains(p) || p == "to");

        // open classes with known forms
        if let Some(lemma) = IRREGULAR_NOUNS.get(lower) {
            return (PosTag::Noun, lemma.to_string());
        }
        if let Some(lemma) = IRREGULAR_ADJECTIVES.get(lower) {
            return (PosTag::Adj, lemma.to_string());
        }
        if let Some(lemma) = IRREGULAR_VERBS.get(lower) {
            if after_determiner {
                return (PosTag::Noun, word);
            }
            return (PosTag::Verb, lemma.to_string());
        }
        if ADVERBS.contains(lower) && !(after_determiner && !ADJECTIVES.contains(lower)) {
            return (PosTag::Adv, word);
        }
        if ADJECTIVES.contains(lower) {
            return (PosTag::Adj, word);
        }
        if let Some(pos) = LY_NON_ADVERBS.get(lower) {
            let lemma = match pos {
                PosTag::Verb => Self::verb_lemma(lower),
                _ => word,
            };
            return (*pos, lemma);
        }
        if VERB_BASES.contains(lower) {
            let pos = if after_determiner { PosTag::Noun } else { PosTag::Verb };
            return (pos, word);
        }

        // suffix rules
        if lower.len() > 4 && lower.ends_with("ly") {
            return (PosTag::Adv, word);
        }
        if let Some(stem) = Self::comparative_stem(lower) {
            return (PosTag::Adj, stem);
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            if after_determiner {
                // participle modifying the following noun: "the running dogs"
                let modifies_next = next.is_some_and(|n| Self::starts_noun_phrase(n) && !Self::looks_verbal(n));
                let pos = if modifies_next { PosTag::Adj } else { PosTag::Noun };
                return (pos, word);
            }
            return (PosTag::Verb, Self::verb_lemma(lower));
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            if after_determiner {
                return (PosTag::Adj, word);
            }
            return (PosTag::Verb, Self::verb_lemma(lower));
        }
        if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s) && lower.len() > s.len() + 2) {
            return (PosTag::Noun, Self::noun_lemma(lower));
        }
        if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s) && lower.len() > s.len() + 2) {
            return (PosTag::Adj, word);
        }
        if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s) && lower.len() > s.len() + 2) {
            return (PosTag::Verb, word);
        }

        if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
            let singular_subject = matches!(prev_lower, Some("he") | Some("she") | Some("it"))
                || matches!(prev_pos, Some(PosTag::Noun) | Some(PosTag::Propn));
            let plural_agreement = next.is_some_and(|n| PLURAL_AUXILIARIES.contains(n));
            if singular_subject && !after_determiner && !plural_agreement {
                return (PosTag::Verb, Self::verb_lemma(lower));
            }
            return (PosTag::Noun, Self::noun_lemma(lower));
        }

        if after_verb_trigger && !after_determiner {
            return (PosTag::Verb, word);
        }
        (PosTag::Noun, word)
    }

    fn looks_verbal(word: &str) -> bool {
        VERB_BASES.contains(word)
            || IRREGULAR_VERBS.contains_key(word)
            || word.ends_with("ed")
            || word.ends_with("ing")
            || word == "not"
    }

    fn starts_noun_phrase(word: &str) -> bool {
        !(PRONOUNS.contains(word)
            || DETERMINERS.contains(word)
            || ADPOSITIONS.contains(word)
            || COORDINATORS.contains(word)
            || SUBORDINATORS.contains(word)
            || AUXILIARIES.contains_key(word)
            || ADVERBS.contains(word) && !ADJECTIVES.contains(word))
    }

    /// Stem of a comparative/superlative whose base is a known adjective
    fn comparative_stem(word: &str) -> Option<String> {
        let stem = word
            .strip_suffix("est")
            .or_else(|| word.strip_suffix("er"))?;
        if stem.len() < 2 {
            return None;
        }

        let candidates = [
            stem.to_string(),
            format!("{}e", stem),
            stem.strip_suffix('i').map(|s| format!("{}y", s)).unwrap_or_default(),
            undouble(stem).unwrap_or_default(),
        ];
        candidates
            .into_iter()
            .find(|c| !c.is_empty() && ADJECTIVES.contains(c.as_str()))
    }

    /// Base form of an inflected regular verb
    pub fn verb_lemma(word: &str) -> String {
        if let Some(lemma) = IRREGULAR_VERBS.get(word) {
            return lemma.to_string();
        }
        if let Some(stem) = word.strip_suffix("ied") {
            return format!("{}y", stem);
        }
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        if let Some(stem) = word.strip_suffix("ing").or_else(|| word.strip_suffix("ed")) {
            return restore_base(stem);
        }
        if let Some(stem) = word.strip_suffix("es") {
            if ["ch", "sh", "ss", "x", "z", "o"].iter().any(|s| stem.ends_with(s)) {
                return stem.to_string();
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            if !stem.ends_with('s') {
                return stem.to_string();
            }
        }
        word.to_string()
    }

    /// Singular form of a regular plural noun
    pub fn noun_lemma(word: &str) -> String {
        if let Some(lemma) = IRREGULAR_NOUNS.get(word) {
            return lemma.to_string();
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() > 1 {
                return format!("{}y", stem);
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if ["ch", "sh", "ss", "x", "z"].iter().any(|s| stem.ends_with(s)) {
                return stem.to_string();
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
        word.to_string()
    }
}

/// Undo consonant doubling (`runn` -> `run`); `None` when the stem is not doubled
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !"aeiouslz".contains(last) {
        Some(stem[..stem.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

/// Base form from a stem left after removing `-ing` or `-ed`
fn restore_base(stem: &str) -> String {
    let with_e = format!("{}e", stem);
    if E_FINAL_VERBS.contains(with_e.as_str()) {
        return with_e;
    }
    if let Some(single) = undouble(stem) {
        return single;
    }
    stem.to_string()
}
