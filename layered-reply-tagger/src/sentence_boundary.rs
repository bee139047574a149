//! Sentence boundary detection.
//!
//! A sentence ends after a run of `.`, `?` or `!` (plus any closing quotes
//! or brackets right behind it). A period glued to a known abbreviation
//! ("Dr.", "e.g.") does not end a sentence.

use std::collections::HashSet;
use std::ops::Range;

use crate::tokenize::RawToken;

/// Splits a token stream into sentences.
#[derive(Debug, Clone)]
pub struct SentenceBoundaryDetector {
    abbreviations: HashSet<String>,
}

impl SentenceBoundaryDetector {
    pub fn new() -> Self {
        let mut abbreviations = HashSet::new();

        // Common abbreviations that should NOT be treated as sentence boundaries
        let common_abbrevs = [
            "dr", "mr", "mrs", "ms", "prof", "sr", "jr",
            "inc", "ltd", "corp", "co",
            "e.g", "i.e", "vs", "etc", "approx",
            "u.s", "u.k", "p.m", "a.m",
            "st", "ave", "dept",
        ];

        for abbrev in &common_abbrevs {
            abbreviations.insert(abbrev.to_string());
        }

        SentenceBoundaryDetector { abbreviations }
    }

    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.abbreviations.insert(abbrev.to_lowercase());
        }
        self
    }

    fn is_sentence_ending_punctuation(text: &str) -> bool {
        matches!(text, "." | "?" | "!" | "\u{2026}")
    }

    fn is_closing_punctuation(text: &str) -> bool {
        matches!(text, "\"" | "'" | ")" | "]" | "\u{201d}" | "\u{2019}")
    }

    fn is_abbreviation(&self, text: &str) -> bool {
        let normalized = text.trim_end_matches('.').to_lowercase();
        self.abbreviations.contains(&normalized)
    }

    /// A period attached to the abbreviation right before it.
    fn closes_abbreviation(&self, tokens: &[RawToken], idx: usize) -> bool {
        if tokens[idx].text != "." || idx == 0 {
            return false;
        }
        let prev = &tokens[idx - 1];
        !prev.space_after && self.is_abbreviation(&prev.text)
    }

    /// Token ranges of the sentences in `tokens`, in order. Trailing tokens
    /// without final punctuation form a last sentence.
    pub(crate) fn split(&self, tokens: &[RawToken]) -> Vec<Range<usize>> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut idx = 0;

        while idx < tokens.len() {
            let text = tokens[idx].text.as_str();
            if !Self::is_sentence_ending_punctuation(text) || self.closes_abbreviation(tokens, idx) {
                idx += 1;
                continue;
            }

            let mut end = idx + 1;
            while end < tokens.len()
                && (Self::is_sentence_ending_punctuation(&tokens[end].text)
                    || Self::is_closing_punctuation(&tokens[end].text))
            {
                end += 1;
            }
            sentences.push(start..end);
            start = end;
            idx = end;
        }

        if start < tokens.len() {
            sentences.push(start..tokens.len());
        }
        sentences
    }
}

impl Default for SentenceBoundaryDetector {
    fn default() -> Self {
        Self::new()
    }
}
