//! Part-of-speech tagging.
//!
//! Every token first gets its out-of-context reading from the lexicon, then
//! a left-to-right pass settles it using the tags already assigned:
//!
//! ```text
//! Can  you  help  me  ?      help: base form governed by "Can" => VB
//! I    want tea   .          want: base form after a subject   => VBP
//! a    big  help  .          help: after a modifier            => NN
//! ```

use layered_reply::Pos;

use crate::lexicon::{closed_class, verb, Entry, VerbForm, VerbReading};
use crate::tokenize::{lexical_key, RawToken};

/// A token with its settled part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tagged {
    pub text: String,
    pub space_after: bool,
    pub pos: Pos,
    pub tag: &'static str,
    pub lemma: String,
}

impl Tagged {
    pub fn is_noun(&self) -> bool {
        self.tag.starts_with("NN")
    }

    pub fn is_wh(&self) -> bool {
        matches!(self.tag, "WDT" | "WP" | "WP$" | "WRB")
    }
}

#[derive(Debug, Clone, Copy)]
enum Reading {
    Punct(Pos, &'static str),
    Number,
    Closed(Entry),
    Verb(VerbReading),
    Open,
}

fn punctuation_tag(text: &str) -> (Pos, &'static str) {
    match text {
        "." | "?" | "!" | "\u{2026}" => (Pos::Punct, "."),
        "," => (Pos::Punct, ","),
        ":" | ";" | "-" | "--" | "\u{2013}" | "\u{2014}" => (Pos::Punct, ":"),
        "\"" | "\u{201c}" | "`" => (Pos::Punct, "``"),
        "\u{201d}" | "'" | "\u{2019}" => (Pos::Punct, "''"),
        "(" | "[" | "{" => (Pos::Punct, "-LRB-"),
        ")" | "]" | "}" => (Pos::Punct, "-RRB-"),
        "$" | "\u{20ac}" | "\u{a3}" => (Pos::Sym, "$"),
        "%" | "&" | "+" | "=" | "@" | "#" | "*" | "/" => (Pos::Sym, "SYM"),
        _ => (Pos::Punct, "NFP"),
    }
}

fn reading(text: &str, key: &str) -> Reading {
    if !text.chars().any(char::is_alphanumeric) {
        let (pos, tag) = punctuation_tag(text);
        return Reading::Punct(pos, tag);
    }
    if text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '/'))
    {
        return Reading::Number;
    }
    if let Some(entry) = closed_class(key) {
        return Reading::Closed(entry);
    }
    if let Some(verb) = verb(key) {
        return Reading::Verb(verb);
    }
    Reading::Open
}

/// Tags that make a following noun/verb ambiguous word a noun.
const NOMINAL_CONTEXT: &[&str] = &["DT", "PRP$", "WP$", "JJ", "IN", "CD", "POS"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish", "ical"];

/// Pronouns and adverbs after which "'s" is "is".
const COPULA_HOSTS: &[&str] = &["that", "there", "here", "what", "who", "where", "how", "it", "he", "she"];

struct Tagger<'a> {
    keys: &'a [String],
    readings: &'a [Reading],
    tagged: Vec<Tagged>,
}

pub(crate) fn tag_sentence(tokens: &[RawToken]) -> Vec<Tagged> {
    let keys: Vec<String> = tokens.iter().map(|token| lexical_key(&token.text)).collect();
    let readings: Vec<Reading> = tokens
        .iter()
        .zip(&keys)
        .map(|(token, key)| reading(&token.text, key))
        .collect();

    let mut tagger = Tagger {
        keys: &keys,
        readings: &readings,
        tagged: Vec::with_capacity(tokens.len()),
    };
    for (idx, token) in tokens.iter().enumerate() {
        let (pos, tag, lemma) = tagger.decide(idx, &token.text);
        tagger.tagged.push(Tagged {
            text: token.text.clone(),
            space_after: token.space_after,
            pos,
            tag,
            lemma,
        });
    }
    tagger.tagged
}

impl<'a> Tagger<'a> {
    fn prev(&self) -> Option<&Tagged> {
        self.tagged.last()
    }

    fn decide(&self, idx: usize, text: &str) -> (Pos, &'static str, String) {
        let key = self.keys[idx].as_str();
        match self.readings[idx] {
            Reading::Punct(pos, tag) => (pos, tag, text.to_string()),
            Reading::Number => (Pos::Num, "CD", key.to_string()),
            Reading::Closed(entry) => self.closed(idx, key, entry),
            Reading::Verb(reading) => self.verb(idx, key, reading),
            Reading::Open => self.open(idx, text, key),
        }
    }

    fn closed(&self, idx: usize, key: &str, entry: Entry) -> (Pos, &'static str, String) {
        let lemma = |default: &str| {
            entry
                .lemma
                .map_or_else(|| default.to_string(), str::to_string)
        };
        match key {
            "her" if !self.nominal_follows(idx) => (Pos::Pron, "PRP", "she".to_string()),
            "to" => match self.readings.get(idx + 1) {
                Some(Reading::Verb(next)) if next.form == VerbForm::Base => {
                    (Pos::Part, "TO", "to".to_string())
                }
                _ => (entry.pos, entry.tag, lemma(key)),
            },
            "'s" => match self.prev() {
                Some(prev) if prev.lemma == "let" => (Pos::Pron, "PRP", "we".to_string()),
                Some(prev) if prev.tag == "PRP" || COPULA_HOSTS.contains(&prev.lemma.as_str()) => {
                    (entry.pos, entry.tag, lemma(key))
                }
                _ => (Pos::Part, "POS", "'s".to_string()),
            },
            _ => (entry.pos, entry.tag, lemma(key)),
        }
    }

    /// Whether the next token can head or modify a noun phrase.
    fn nominal_follows(&self, idx: usize) -> bool {
        match self.readings.get(idx + 1) {
            Some(Reading::Open) | Some(Reading::Number) => true,
            Some(Reading::Verb(next)) => matches!(next.form, VerbForm::Base | VerbForm::Third),
            Some(Reading::Closed(entry)) => entry.pos == Pos::Adj,
            _ => false,
        }
    }

    fn verb(&self, idx: usize, key: &str, reading: VerbReading) -> (Pos, &'static str, String) {
        let prev = self.prev();

        if key == "like"
            && prev.map_or(false, |prev| {
                prev.pos == Pos::Verb || (prev.pos == Pos::Aux && prev.lemma == "be")
            })
        {
            return (Pos::Adp, "IN", key.to_string());
        }

        if let Some(prev) = prev {
            if NOMINAL_CONTEXT.contains(&prev.tag) {
                match reading.form {
                    VerbForm::Base => return (Pos::Noun, "NN", key.to_string()),
                    VerbForm::Third => return (Pos::Noun, "NNS", reading.lemma.to_string()),
                    VerbForm::Gerund if matches!(prev.tag, "DT" | "PRP$") => {
                        return (Pos::Noun, "NN", key.to_string())
                    }
                    VerbForm::Past | VerbForm::Participle | VerbForm::PastOrParticiple
                        if matches!(prev.tag, "DT" | "PRP$") =>
                    {
                        return (Pos::Adj, "JJ", key.to_string())
                    }
                    _ => {}
                }
            }
        }

        let auxiliary = match reading.lemma {
            "do" => self.verb_follows(idx),
            "have" => self.participle_follows(idx),
            _ => false,
        };
        if auxiliary {
            return (Pos::Aux, reading.form.tag(), reading.lemma.to_string());
        }

        let tag = match reading.form {
            VerbForm::Base if self.base_form_is_governed() => "VB",
            VerbForm::PastOrParticiple if self.after_perfect_or_passive() => "VBN",
            form => form.tag(),
        };
        (Pos::Verb, tag, reading.lemma.to_string())
    }

    /// A later verb that is not itself read as a noun.
    fn verb_follows(&self, idx: usize) -> bool {
        (idx + 1..self.readings.len()).any(|later| {
            matches!(self.readings[later], Reading::Verb(_))
                && !matches!(
                    self.readings[later - 1],
                    Reading::Closed(Entry { tag: "DT" | "PRP$", .. })
                )
        })
    }

    /// "have" followed, past adverbs and pronouns, by a participle.
    fn participle_follows(&self, idx: usize) -> bool {
        for reading in &self.readings[idx + 1..] {
            match reading {
                Reading::Closed(entry)
                    if matches!(entry.pos, Pos::Adv | Pos::Part) || entry.tag == "PRP" =>
                {
                    continue
                }
                Reading::Verb(next) => {
                    return matches!(next.form, VerbForm::Participle | VerbForm::PastOrParticiple)
                }
                _ => return false,
            }
        }
        false
    }

    /// Base form after a modal, "to" or auxiliary "do", or with no subject
    /// before it (an imperative).
    fn base_form_is_governed(&self) -> bool {
        let mut saw_subject = false;
        for prev in self.tagged.iter().rev() {
            match prev.tag {
                "MD" | "TO" => return true,
                _ if prev.pos == Pos::Aux && prev.lemma == "do" => return true,
                "RB" | "UH" => continue,
                "PRP" | "PRP$" | "DT" | "JJ" | "CD" | "NN" | "NNS" | "NNP" | "NNPS" => {
                    saw_subject = true
                }
                _ => return false,
            }
        }
        !saw_subject
    }

    fn after_perfect_or_passive(&self) -> bool {
        for prev in self.tagged.iter().rev() {
            match prev.tag {
                "RB" | "PRP" => continue,
                _ => return prev.pos == Pos::Aux && matches!(prev.lemma.as_str(), "have" | "be"),
            }
        }
        false
    }

    fn open(&self, idx: usize, text: &str, key: &str) -> (Pos, &'static str, String) {
        if idx > 0 && text.chars().next().map_or(false, char::is_uppercase) {
            return (Pos::Propn, "NNP", text.to_string());
        }
        if key.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|suffix| key.ends_with(suffix)) {
            return (Pos::Adj, "JJ", key.to_string());
        }
        if key.len() > 4 && key.ends_with("ly") {
            return (Pos::Adv, "RB", key.to_string());
        }
        match singular(key) {
            Some(lemma) => (Pos::Noun, "NNS", lemma),
            None => (Pos::Noun, "NN", key.to_string()),
        }
    }
}

/// Singular of a regular plural, `None` when `word` does not look plural.
fn singular(word: &str) -> Option<String> {
    if word.len() <= 3 || !word.ends_with('s') {
        return None;
    }
    if ["ss", "us", "is", "'s"].iter().any(|ending| word.ends_with(ending)) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return Some(format!("{}y", stem));
    }
    for ending in ["ches", "shes", "xes", "sses"] {
        if word.ends_with(ending) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    Some(word[..word.len() - 1].to_string())
}
