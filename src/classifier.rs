//! Sentence type classification.
//!
//! A sentence is tested against an ordered list of structural rules, each a
//! plain predicate over the token sequence. The first rule that matches
//! decides the [`Category`]; a sentence no rule accepts is
//! [`Category::Generic`].
//!
//! Every rule is anchored at the first token, which must carry the
//! sentence-start flag.
//!
//! ```text
//! Where  are  you  going  ?       wh-word             => WH_QUESTION
//! Can    you  help me     ?       modal-subject       => YES_NO_QUESTION
//! Please close the door   .       polite-base-verb    => INSTRUCTION
//! I      want a    new    phone . pronoun-desire      => WISH
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Pos, Sentence, Token};

/// Closed set of sentence categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    WhQuestion,
    YesNoQuestion,
    Instruction,
    Wish,
    Generic,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WhQuestion => "WH_QUESTION",
            Category::YesNoQuestion => "YES_NO_QUESTION",
            Category::Instruction => "INSTRUCTION",
            Category::Wish => "WISH",
            Category::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const WH_TAGS: &[&str] = &["WDT", "WP", "WP$", "WRB"];
const MODAL_TAG: &str = "MD";
const BASE_VERB_TAG: &str = "VB";
const PERSONAL_PRONOUN_TAG: &str = "PRP";
const SUBJECT_POS: &[Pos] = &[Pos::Pron, Pos::Propn, Pos::Det];
const POLITENESS_MARKERS: &[&str] = &["please", "kindly"];
const AFFECTION_LEMMAS: &[&str] = &["love", "like", "appreciate"];
const DESIRE_LEMMAS: &[&str] = &["want", "need", "require"];

/// A named structural pattern that selects a category.
#[derive(Clone, Copy)]
pub struct SentenceRule {
    pub name: &'static str,
    pub category: Category,
    matcher: fn(&[Token]) -> bool,
}

impl SentenceRule {
    pub const fn new(name: &'static str, category: Category, matcher: fn(&[Token]) -> bool) -> Self {
        Self {
            name,
            category,
            matcher,
        }
    }

    pub fn matches(&self, tokens: &[Token]) -> bool {
        (self.matcher)(tokens)
    }
}

impl fmt::Debug for SentenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SentenceRule({} => {})", self.name, self.category)
    }
}

/// The sentence-initial token, if it carries the sentence-start flag.
fn initial(tokens: &[Token]) -> Option<&Token> {
    tokens.first().filter(|token| token.is_sent_start())
}

fn wh_word(tokens: &[Token]) -> bool {
    initial(tokens).map_or(false, |first| first.has_tag(WH_TAGS))
}

fn modal_subject(tokens: &[Token]) -> bool {
    match (initial(tokens), tokens.get(1)) {
        (Some(first), Some(second)) => first.tag() == MODAL_TAG && second.has_pos(SUBJECT_POS),
        _ => false,
    }
}

fn verb_subject_verb(tokens: &[Token]) -> bool {
    match (initial(tokens), tokens.get(1), tokens.get(2)) {
        (Some(first), Some(second), Some(third)) => {
            first.pos() == Pos::Verb && second.has_pos(SUBJECT_POS) && third.pos() == Pos::Verb
        }
        _ => false,
    }
}

fn base_verb(tokens: &[Token]) -> bool {
    initial(tokens).map_or(false, |first| first.tag() == BASE_VERB_TAG)
}

fn polite_base_verb(tokens: &[Token]) -> bool {
    match (initial(tokens), tokens.get(1)) {
        (Some(first), Some(second)) => {
            POLITENESS_MARKERS.contains(&first.lower()) && second.tag() == BASE_VERB_TAG
        }
        _ => false,
    }
}

fn pronoun_modal_affection(tokens: &[Token]) -> bool {
    match (initial(tokens), tokens.get(1), tokens.get(2)) {
        (Some(first), Some(second), Some(third)) => {
            first.tag() == PERSONAL_PRONOUN_TAG
                && second.tag() == MODAL_TAG
                && third.pos() == Pos::Verb
                && third.has_lemma(AFFECTION_LEMMAS)
        }
        _ => false,
    }
}

fn pronoun_desire(tokens: &[Token]) -> bool {
    match (initial(tokens), tokens.get(1)) {
        (Some(first), Some(second)) => {
            first.tag() == PERSONAL_PRONOUN_TAG
                && second.pos() == Pos::Verb
                && second.has_lemma(DESIRE_LEMMAS)
        }
        _ => false,
    }
}

const STANDARD_RULES: &[SentenceRule] = &[
    SentenceRule::new("wh-word", Category::WhQuestion, wh_word),
    SentenceRule::new("modal-subject", Category::YesNoQuestion, modal_subject),
    SentenceRule::new("verb-subject-verb", Category::YesNoQuestion, verb_subject_verb),
    SentenceRule::new("base-verb", Category::Instruction, base_verb),
    SentenceRule::new("polite-base-verb", Category::Instruction, polite_base_verb),
    SentenceRule::new("pronoun-modal-affection", Category::Wish, pronoun_modal_affection),
    SentenceRule::new("pronoun-desire", Category::Wish, pronoun_desire),
];

/// Ranked rule set mapping sentences to categories.
#[derive(Debug, Clone)]
pub struct SentenceClassifier {
    rules: Vec<SentenceRule>,
}

impl SentenceClassifier {
    /// The standard precedence: wh-questions, yes/no questions,
    /// instructions, wishes.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Use a custom rule list. Earlier rules take precedence.
    pub fn with_rules(rules: Vec<SentenceRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SentenceRule] {
        &self.rules
    }

    /// The first rule accepting the sentence.
    pub fn matching_rule(&self, sentence: &Sentence) -> Option<&SentenceRule> {
        let tokens = sentence.tokens();
        self.rules.iter().find(|rule| {
            let matched = rule.matches(tokens);
            tracing::trace!(rule = rule.name, matched, "evaluated sentence rule");
            matched
        })
    }

    pub fn classify(&self, sentence: &Sentence) -> Category {
        self.matching_rule(sentence)
            .map_or(Category::Generic, |rule| rule.category)
    }
}

impl Default for SentenceClassifier {
    fn default() -> Self {
        Self::standard()
    }
}
