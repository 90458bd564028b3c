/*!
 * Vocabulary data model.
 *
 * Wire types (`VocabItem`, `VocabOptions`, `VocabDetailRequest`,
 * `VocabDetail`) plus the cache's own `VocabDetailKey` and
 * `CachedVocabEntry`.
 */

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// A candidate vocabulary token from one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    /// Surface form as it appears in the sentence
    pub text: String,
    /// Lower-cased dictionary form
    pub lemma: String,
    /// Universal POS tag
    pub pos: String,
}

/// The four generated detail fields of a vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
    Translation,
    Definition,
    Example,
    Level,
}

impl DetailField {
    /// Every field, in canonical order
    pub const ALL: [DetailField; 4] = [
        DetailField::Translation,
        DetailField::Definition,
        DetailField::Example,
        DetailField::Level,
    ];

    /// Canonical JSON key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Definition => "definition",
            Self::Example => "example",
            Self::Level => "level",
        }
    }

    /// Field for a canonical JSON key; `None` for anything else
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "translation" => Some(Self::Translation),
            "definition" => Some(Self::Definition),
            "example" => Some(Self::Example),
            "level" => Some(Self::Level),
            _ => None,
        }
    }
}

impl fmt::Display for DetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CEFR proficiency band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }
}

impl FromStr for CefrLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "B1" => Ok(Self::B1),
            "B2" => Ok(Self::B2),
            "C1" => Ok(Self::C1),
            "C2" => Ok(Self::C2),
            _ => Err(format!("Invalid CEFR level: {}", s)),
        }
    }
}

/// Which detail fields a caller wants returned
///
/// A flag also makes its field eligible to trigger a fill. `pos` is part of
/// the wire format but has no effect: the POS tag is always echoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabOptions {
    pub translation: bool,
    pub definition: bool,
    pub pos: bool,
    pub example: bool,
    pub level: bool,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            translation: false,
            definition: false,
            pos: true,
            example: false,
            level: false,
        }
    }
}

impl VocabOptions {
    /// Options requesting every detail field
    pub fn all() -> Self {
        Self {
            translation: true,
            definition: true,
            pos: true,
            example: true,
            level: true,
        }
    }

    /// Options requesting exactly the given fields
    pub fn only(fields: &[DetailField]) -> Self {
        let mut options = Self::default();
        for field in fields {
            match field {
                DetailField::Translation => options.translation = true,
                DetailField::Definition => options.definition = true,
                DetailField::Example => options.example = true,
                DetailField::Level => options.level = true,
            }
        }
        options
    }

    /// Whether `field` is requested
    pub fn wants(&self, field: DetailField) -> bool {
        match field {
            DetailField::Translation => self.translation,
            DetailField::Definition => self.definition,
            DetailField::Example => self.example,
            DetailField::Level => self.level,
        }
    }

    /// Requested fields in canonical order
    pub fn requested(&self) -> Vec<DetailField> {
        DetailField::ALL
            .into_iter()
            .filter(|f| self.wants(*f))
            .collect()
    }
}

/// Body of `POST /vocab/detail`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabDetailRequest {
    pub lemma: String,
    pub pos: String,
    #[serde(default)]
    pub options: VocabOptions,
}

/// Detail projection returned to callers; unrequested fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabDetail {
    pub lemma: String,
    pub pos: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Cache identity: lower-cased lemma and case-sensitive POS tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VocabDetailKey(String);

impl VocabDetailKey {
    /// Separator between lemma and POS
    pub const SEPARATOR: char = '|';

    pub fn new(lemma: &str, pos: &str) -> Self {
        Self(format!("{}{}{}", lemma.to_lowercase(), Self::SEPARATOR, pos))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VocabDetailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cached record per `VocabDetailKey`
///
/// A field counts as populated once it holds a non-empty string, and a
/// populated field is never replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CachedVocabEntry {
    pub lemma: String,
    pub pos: String,
    translation: Option<String>,
    definition: Option<String>,
    example: Option<String>,
    level: Option<String>,
}

impl CachedVocabEntry {
    /// Entry with lemma/pos preset and every field unset
    pub fn new(lemma: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            pos: pos.into(),
            ..Default::default()
        }
    }

    fn slot(&self, field: DetailField) -> &Option<String> {
        match field {
            DetailField::Translation => &self.translation,
            DetailField::Definition => &self.definition,
            DetailField::Example => &self.example,
            DetailField::Level => &self.level,
        }
    }

    fn slot_mut(&mut self, field: DetailField) -> &mut Option<String> {
        match field {
            DetailField::Translation => &mut self.translation,
            DetailField::Definition => &mut self.definition,
            DetailField::Example => &mut self.example,
            DetailField::Level => &mut self.level,
        }
    }

    pub fn get(&self, field: DetailField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn is_populated(&self, field: DetailField) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// Store `value` unless the field is already populated or `value` is
    /// empty; returns whether the entry changed
    pub fn fill(&mut self, field: DetailField, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.is_populated(field) {
            return false;
        }
        *self.slot_mut(field) = Some(value.to_string());
        true
    }

    /// Whether any requested field is still unpopulated
    pub fn needs_fill(&self, options: &VocabOptions) -> bool {
        DetailField::ALL
            .into_iter()
            .any(|f| options.wants(f) && !self.is_populated(f))
    }

    /// Requested fields only, labeled with the caller's lemma and POS
    pub fn project(&self, lemma: &str, pos: &str, options: &VocabOptions) -> VocabDetail {
        let pick = |field: DetailField| {
            if options.wants(field) {
                self.slot(field).clone()
            } else {
                None
            }
        };
        VocabDetail {
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            translation: pick(DetailField::Translation),
            definition: pick(DetailField::Definition),
            example: pick(DetailField::Example),
            level: pick(DetailField::Level),
        }
    }
}
