//! Dialogue turn orchestration.
//!
//! One turn runs annotate → (locate predicate, classify) → generate for each
//! sentence of the utterance, then joins the per-sentence replies with a
//! single space in sentence order. Nothing carries over between sentences
//! or between turns.

use rand::RngCore;
use serde::Serialize;
use std::fmt;

use crate::{
    root_predicate, Annotator, Category, Phrasebook, ReplyContext, ReplyResult, Sentence,
    SentenceClassifier,
};

/// Per-turn options supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Turn<'a> {
    /// Session label used to address every reply ("Ada, ...").
    pub label: Option<&'a str>,
    /// Day/time tag rendered as "[stamp] " before the combined reply.
    pub stamp: Option<&'a str>,
}

impl<'a> Turn<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_stamp(mut self, stamp: &'a str) -> Self {
        self.stamp = Some(stamp);
        self
    }
}

/// How one sentence was read, before any reply is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceAnalysis {
    pub text: String,
    pub category: Category,
    /// Name of the rule that decided the category; `None` for the fallback.
    pub rule: Option<&'static str>,
    pub predicate: Vec<usize>,
}

/// The reply to one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceReply {
    #[serde(flatten)]
    pub analysis: SentenceAnalysis,
    pub reply: String,
    /// The annotation the reply was generated from.
    #[serde(skip)]
    pub sentence: Sentence,
}

/// The reply to a whole utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReply {
    pub stamp: Option<String>,
    pub sentences: Vec<SentenceReply>,
}

impl TurnReply {
    /// The combined reply text.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TurnReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let replies: Vec<&str> = self
            .sentences
            .iter()
            .map(|sentence| sentence.reply.as_str())
            .collect();
        let joined = replies.join(" ");
        match &self.stamp {
            Some(stamp) if joined.is_empty() => write!(f, "[{}]", stamp),
            Some(stamp) => write!(f, "[{}] {}", stamp, joined),
            None => f.write_str(&joined),
        }
    }
}

/// Turns utterances into replies.
///
/// ```ignore
/// let responder = Responder::new(RuleTagger::new());
/// let mut rng = rand::thread_rng();
/// let reply = responder.respond("Please close the door.", &Turn::new(), &mut rng)?;
/// ```
#[derive(Debug, Clone)]
pub struct Responder<A> {
    annotator: A,
    classifier: SentenceClassifier,
    phrases: Phrasebook,
}

impl<A: Annotator> Responder<A> {
    /// Responder with the standard rules and the chat phrasebook.
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            classifier: SentenceClassifier::standard(),
            phrases: Phrasebook::default(),
        }
    }

    pub fn with_phrasebook(mut self, phrases: Phrasebook) -> Self {
        self.phrases = phrases;
        self
    }

    pub fn with_classifier(mut self, classifier: SentenceClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    pub fn phrasebook(&self) -> &Phrasebook {
        &self.phrases
    }

    /// Annotate and validate, failing the turn on bad annotation.
    fn sentences(&self, text: &str) -> ReplyResult<Vec<Sentence>> {
        let sentences = self.annotator.annotate(text).map_err(|e| {
            tracing::warn!(error = %e, "annotation failed");
            e
        })?;
        for sentence in &sentences {
            sentence.validate()?;
        }
        Ok(sentences)
    }

    fn analyze_sentence(&self, sentence: &Sentence) -> SentenceAnalysis {
        let predicate = root_predicate(sentence);
        let rule = self.classifier.matching_rule(sentence);
        let category = rule.map_or(Category::Generic, |rule| rule.category);
        tracing::debug!(
            sentence = sentence.text(),
            %category,
            rule = rule.map(|rule| rule.name),
            ?predicate,
            "classified sentence"
        );
        SentenceAnalysis {
            text: sentence.text().to_string(),
            category,
            rule: rule.map(|rule| rule.name),
            predicate,
        }
    }

    /// Classify every sentence of `text` without generating replies.
    pub fn analyze(&self, text: &str) -> ReplyResult<Vec<SentenceAnalysis>> {
        Ok(self
            .sentences(text)?
            .iter()
            .map(|sentence| self.analyze_sentence(sentence))
            .collect())
    }

    /// Reply to `text`, keeping the per-sentence breakdown.
    pub fn respond_detailed<R: RngCore>(
        &self,
        text: &str,
        turn: &Turn<'_>,
        rng: &mut R,
    ) -> ReplyResult<TurnReply> {
        let rng: &mut dyn RngCore = rng;
        let sentences = self
            .sentences(text)?
            .into_iter()
            .map(|sentence| {
                let analysis = self.analyze_sentence(&sentence);
                let ctx =
                    ReplyContext::new(&sentence, &analysis.predicate).with_label(turn.label);
                let reply = analysis
                    .category
                    .generator()
                    .generate(&ctx, &self.phrases, &mut *rng);
                SentenceReply {
                    analysis,
                    reply,
                    sentence,
                }
            })
            .collect();

        Ok(TurnReply {
            stamp: turn.stamp.map(str::to_string),
            sentences,
        })
    }

    /// Reply to `text`: one reply per sentence, space separated.
    pub fn respond<R: RngCore>(&self, text: &str, turn: &Turn<'_>, rng: &mut R) -> ReplyResult<String> {
        Ok(self.respond_detailed(text, turn, rng)?.text())
    }
}
