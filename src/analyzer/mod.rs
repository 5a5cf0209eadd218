mod lexicon;
mod rule;

pub use rule::RuleAnalyzer;

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

/// The NLP capability the extraction stages depend on. Nothing in the crate
/// holds a process-wide analyzer.
pub trait TextAnalyzer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
    fn entities(&self, text: &str) -> Result<Vec<Entity>>;
}

/// Serialized in the conventional uppercase form ("NOUN", "PROPN", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Adj,
    Adv,
    Num,
    Pron,
    Det,
    Adp,
    Cconj,
    Aux,
    Part,
    Punct,
    X,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// Entity categories. `Other` keeps labels from richer analyzers intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, EnumIter)]
#[serde(try_from = "String")]
pub enum EntityLabel {
    Org,
    Money,
    Other(String),
}

pub static ENTITY_LABELS: Lazy<String> = Lazy::new(|| {
    EntityLabel::iter()
        .filter(|l| !matches!(l, EntityLabel::Other(_)))
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
});

impl EntityLabel {
    pub fn list_labels() -> &'static str {
        &ENTITY_LABELS
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Org => write!(f, "ORG"),
            EntityLabel::Money => write!(f, "MONEY"),
            EntityLabel::Other(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for EntityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORG" => Ok(EntityLabel::Org),
            "MONEY" => Ok(EntityLabel::Money),
            _ => Ok(EntityLabel::Other(s.to_string())),
        }
    }
}

impl TryFrom<String> for EntityLabel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        EntityLabel::from_str(&s)
    }
}

impl Serialize for EntityLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Serialized as a `[text, label]` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Entity {
            text: text.into(),
            label,
        }
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.text)?;
        pair.serialize_element(&self.label)?;
        pair.end()
    }
}

/// A labeled byte-offset span, serialized as a `(start, end, label)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
}

impl Serialize for EntitySpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut triple = serializer.serialize_tuple(3)?;
        triple.serialize_element(&self.start)?;
        triple.serialize_element(&self.end)?;
        triple.serialize_element(&self.label)?;
        triple.end()
    }
}
