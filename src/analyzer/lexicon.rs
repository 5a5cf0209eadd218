use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::PosTag;

pub(crate) static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "this", "that", "these", "those", "and", "or", "but", "nor", "so",
        "yet", "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "over",
        "under", "between", "through", "during", "after", "before", "above", "below", "up",
        "down", "out", "off", "about", "as", "is", "am", "are", "was", "were", "be", "been",
        "being", "has", "have", "had", "having", "do", "does", "did", "will", "would", "shall",
        "should", "can", "could", "may", "might", "must", "i", "you", "he", "she", "it", "we",
        "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their",
        "not", "no", "than", "then", "there", "here", "when", "where", "which", "who", "whom",
        "what", "while", "if", "because", "until", "also", "such", "own", "same", "too", "very",
        "just", "per",
    ]
    .into_iter()
    .collect()
});

/// Checked before any shape heuristic.
pub(crate) static CLOSED_CLASS: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let mut tags = HashMap::new();
    for word in ["a", "an", "the", "this", "that", "these", "those"] {
        tags.insert(word, PosTag::Det);
    }
    for word in [
        "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "over", "under",
        "between", "through", "during", "after", "before", "above", "below", "about", "as",
    ] {
        tags.insert(word, PosTag::Adp);
    }
    for word in [
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
        "your", "his", "its", "our", "their", "who", "whom", "which", "what",
    ] {
        tags.insert(word, PosTag::Pron);
    }
    for word in ["and", "or", "but", "nor", "so", "yet"] {
        tags.insert(word, PosTag::Cconj);
    }
    for word in [
        "is", "am", "are", "was", "were", "be", "been", "being", "has", "have", "had", "having",
        "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must",
    ] {
        tags.insert(word, PosTag::Aux);
    }
    for word in ["not", "no"] {
        tags.insert(word, PosTag::Part);
    }
    tags
});

/// Irregular forms the suffix rules would mangle.
pub(crate) static IRREGULAR_LEMMAS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("is", "be"),
        ("am", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("having", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("said", "say"),
        ("says", "say"),
        ("made", "make"),
        ("went", "go"),
        ("gone", "go"),
        ("rose", "rise"),
        ("risen", "rise"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("held", "hold"),
        ("sold", "sell"),
        ("bought", "buy"),
        ("paid", "pay"),
        ("took", "take"),
        ("taken", "take"),
        ("declined", "decline"),
        ("declines", "decline"),
        ("declining", "decline"),
        ("increased", "increase"),
        ("increases", "increase"),
        ("increasing", "increase"),
        ("decreased", "decrease"),
        ("decreases", "decrease"),
        ("decreasing", "decrease"),
    ]
    .into_iter()
    .collect()
});

pub(crate) static ORG_GAZETTEER: &[&str] =
    &["TCS", "Infosys", "ICICI", "HDFC", "Reliance", "REC", "BSE"];
