use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analyzer::{PosTag, TextAnalyzer};

static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$€₹]").unwrap());

pub fn strip_currency(text: &str) -> String {
    CURRENCY_RE.replace_all(text, "").into_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedToken {
    pub token: String,
    pub lemma: String,
    pub pos: PosTag,
}

/// Keeps only content tokens: stop words and punctuation are dropped,
/// everything else carries its lemma and part-of-speech tag.
pub fn preprocess(analyzer: &dyn TextAnalyzer, text: &str) -> Result<Vec<ProcessedToken>> {
    let cleaned = strip_currency(text);
    let tokens = analyzer.tokenize(&cleaned)?;
    Ok(tokens
        .into_iter()
        .filter(|t| !t.is_stop && !t.is_punct)
        .map(|t| ProcessedToken {
            token: t.text,
            lemma: t.lemma,
            pos: t.pos,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::RuleAnalyzer;

    #[test]
    fn test_strip_currency_symbols() {
        assert_eq!(strip_currency("profit of ₹500 or $2"), "profit of 500 or 2");
        assert_eq!(strip_currency("no symbols here"), "no symbols here");
    }

    #[test]
    fn test_preprocess_drops_stop_words_and_punctuation() {
        let analyzer = RuleAnalyzer::new().unwrap();
        let processed = preprocess(&analyzer, "The profits of Infosys rose.").unwrap();
        let tokens: Vec<&str> = processed.iter().map(|p| p.token.as_str()).collect();
        assert_eq!(tokens, vec!["profits", "Infosys", "rose"]);
        assert_eq!(processed[0].lemma, "profit");
        assert_eq!(processed[2].lemma, "rise");
    }

    #[test]
    fn test_processed_token_wire_keys() {
        let token = ProcessedToken {
            token: "profits".to_string(),
            lemma: "profit".to_string(),
            pos: PosTag::Noun,
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["token"], "profits");
        assert_eq!(json["lemma"], "profit");
        assert_eq!(json["pos"], "NOUN");
    }
}
