use anyhow::{anyhow, Result};
use regex::Regex;

use super::lexicon::{CLOSED_CLASS, IRREGULAR_LEMMAS, ORG_GAZETTEER, STOP_WORDS};
use super::{Entity, EntityLabel, EntitySpan, PosTag, TextAnalyzer, Token};

// Tokens are words (apostrophe clitics attached), numbers with digit
// grouping, or single punctuation marks.
const TOKEN_PATTERN: &str = r"[A-Za-z]+(?:['’][A-Za-z]+)*|\d[\d,]*(?:\.\d+)?|[^\sA-Za-z0-9]";

// Currency amounts: the rupee shorthand plus symbol-prefixed figures, with
// an optional magnitude word.
const MONEY_PATTERN: &str =
    r"(?:\bRs\.?\s?|[$€₹]\s?)\d[\d,]*(?:\.\d+)?(?:\s(?:crore|lakh|million|billion|trillion|bn|mn))?";

// Capitalised name runs ending in a corporate suffix.
const ORG_SUFFIX_PATTERN: &str =
    r"\b(?:[A-Z][A-Za-z&]*\s+){1,4}(?:Inc|Corp|Corporation|Ltd|Limited|LLC|Plc|Group|Holdings|Bank)\b\.?";

pub struct RuleAnalyzer {
    token_re: Regex,
    money_re: Regex,
    gazetteer_re: Regex,
    org_suffix_re: Regex,
}

impl RuleAnalyzer {
    pub fn new() -> Result<Self> {
        let gazetteer = format!(r"\b(?:{})\b", ORG_GAZETTEER.join("|"));
        Ok(RuleAnalyzer {
            token_re: Regex::new(TOKEN_PATTERN)
                .map_err(|e| anyhow!("Failed to compile token pattern: {}", e))?,
            money_re: Regex::new(MONEY_PATTERN)
                .map_err(|e| anyhow!("Failed to compile money pattern: {}", e))?,
            gazetteer_re: Regex::new(&gazetteer)
                .map_err(|e| anyhow!("Failed to compile gazetteer pattern: {}", e))?,
            org_suffix_re: Regex::new(ORG_SUFFIX_PATTERN)
                .map_err(|e| anyhow!("Failed to compile organisation pattern: {}", e))?,
        })
    }

    /// Spans sorted by position; overlaps resolve to the earlier match,
    /// then the longer one.
    pub fn entity_spans(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        for m in self.money_re.find_iter(text) {
            spans.push(EntitySpan {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Money,
            });
        }
        for m in self.org_suffix_re.find_iter(text) {
            spans.push(EntitySpan {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Org,
            });
        }
        for m in self.gazetteer_re.find_iter(text) {
            spans.push(EntitySpan {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Org,
            });
        }
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut resolved: Vec<EntitySpan> = Vec::with_capacity(spans.len());
        for span in spans {
            match resolved.last() {
                Some(prev) if span.start < prev.end => continue,
                _ => resolved.push(span),
            }
        }
        resolved
    }
}

impl TextAnalyzer for RuleAnalyzer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;
        for m in self.token_re.find_iter(text) {
            let surface = m.as_str();
            let is_punct = !surface.chars().any(char::is_alphanumeric);
            let lower = surface.to_lowercase();
            let is_stop = STOP_WORDS.contains(lower.as_str());
            let pos = classify_pos(surface, &lower, is_punct, sentence_start);
            let lemma = match pos {
                PosTag::Punct | PosTag::Num | PosTag::Propn => surface.to_string(),
                _ => lemmatize(&lower),
            };
            tokens.push(Token {
                text: surface.to_string(),
                lemma,
                pos,
                is_stop,
                is_punct,
            });
            sentence_start = matches!(surface, "." | "!" | "?");
        }
        Ok(tokens)
    }

    fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        Ok(self
            .entity_spans(text)
            .into_iter()
            .map(|span| Entity {
                text: text[span.start..span.end].to_string(),
                label: span.label,
            })
            .collect())
    }
}

fn classify_pos(surface: &str, lower: &str, is_punct: bool, sentence_start: bool) -> PosTag {
    if is_punct {
        return PosTag::Punct;
    }
    if surface.chars().next().map_or(false, |c| c.is_ascii_digit()) {
        return PosTag::Num;
    }
    if let Some(tag) = CLOSED_CLASS.get(lower) {
        return *tag;
    }
    if ORG_GAZETTEER.contains(&surface) {
        return PosTag::Propn;
    }
    let capitalised = surface.chars().next().map_or(false, char::is_uppercase);
    if capitalised && !sentence_start {
        return PosTag::Propn;
    }
    if lower.ends_with("ly") {
        return PosTag::Adv;
    }
    if lower.ends_with("ing") || lower.ends_with("ed") {
        return PosTag::Verb;
    }
    if lower.ends_with("ous")
        || lower.ends_with("ive")
        || lower.ends_with("able")
        || lower.ends_with("al")
    {
        return PosTag::Adj;
    }
    PosTag::Noun
}

fn lemmatize(word: &str) -> String {
    let base = word
        .strip_suffix("'s")
        .or_else(|| word.strip_suffix("’s"))
        .unwrap_or(word);
    if let Some(lemma) = IRREGULAR_LEMMAS.get(base) {
        return (*lemma).to_string();
    }
    if base.len() > 4 {
        if let Some(stem) = base.strip_suffix("ies") {
            return format!("{}y", stem);
        }
    }
    if base.len() > 4
        && ["ches", "shes", "sses", "xes", "zes"]
            .iter()
            .any(|s| base.ends_with(s))
    {
        return base[..base.len() - 2].to_string();
    }
    if base.len() > 5 {
        if let Some(stem) = base.strip_suffix("ing") {
            return collapse_doubled(stem);
        }
    }
    if base.len() > 4 {
        if let Some(stem) = base.strip_suffix("ed") {
            return collapse_doubled(stem);
        }
    }
    if base.len() > 3
        && base.ends_with('s')
        && !base.ends_with("ss")
        && !base.ends_with("us")
        && !base.ends_with("is")
    {
        return base[..base.len() - 1].to_string();
    }
    base.to_string()
}

// "planning" ends up as "plan", while legitimate doubles (ll, ss, ee, oo,
// zz) survive.
fn collapse_doubled(stem: &str) -> String {
    let bytes = stem.as_bytes();
    if bytes.len() >= 2
        && bytes[bytes.len() - 1] == bytes[bytes.len() - 2]
        && bytes[bytes.len() - 1].is_ascii_alphabetic()
        && !matches!(bytes[bytes.len() - 1], b'l' | b's' | b'e' | b'o' | b'z')
    {
        return stem[..stem.len() - 1].to_string();
    }
    stem.to_string()
}
