//! Reply generators, one per [`Category`].
//!
//! Generators hold no state. Wording is drawn from a [`Phrasebook`] through
//! an injected random source, so a fixed RNG gives a fixed reply.
//! Missing constituents are left out of a reply, never padded.

use rand::seq::SliceRandom;
use rand::RngCore;
use std::fmt;

use crate::{rewrite_perspective, Category, ChunkRole, Phrasebook, Sentence};

/// Everything a generator may look at for one sentence.
#[derive(Debug, Clone, Copy)]
pub struct ReplyContext<'a> {
    pub sentence: &'a Sentence,
    /// Root-predicate token positions, ascending.
    pub predicate: &'a [usize],
    /// Session label to address the reply to. Empty labels are ignored.
    pub label: Option<&'a str>,
}

impl<'a> ReplyContext<'a> {
    pub fn new(sentence: &'a Sentence, predicate: &'a [usize]) -> Self {
        Self {
            sentence,
            predicate,
            label: None,
        }
    }

    pub fn with_label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    /// Prefix `reply` with "<label>, " when a label is set.
    fn address(&self, reply: String) -> String {
        match self.label {
            Some(label) if !label.is_empty() => format!("{}, {}", label, reply),
            _ => reply,
        }
    }
}

/// Produces the reply text for one sentence.
pub trait ReplyGenerator: fmt::Debug + Send + Sync {
    fn generate(&self, ctx: &ReplyContext<'_>, phrases: &Phrasebook, rng: &mut dyn RngCore)
        -> String;
}

fn pick<'p>(options: &'p [String], rng: &mut dyn RngCore) -> &'p str {
    options.choose(rng).map_or("", String::as_str)
}

/// "I don't know where I going, but I'll try to find out."
///
/// Builds a skeleton from the wh-word, the first subject chunk, the
/// predicate and the first object chunk, flips its perspective and wraps it
/// in a hedge and a deferral.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhQuestionReply;

impl WhQuestionReply {
    fn skeleton(sentence: &Sentence, predicate: &[usize]) -> String {
        let tokens = sentence.tokens();
        let mut parts = Vec::new();

        if let Some(wh_word) = tokens.first() {
            parts.push(wh_word.lower().to_string());
        }
        if let Some(subject) = sentence.first_chunk(ChunkRole::Subject) {
            parts.push(sentence.chunk_text(subject));
        }
        // A bare "Why?" is its own root and is quoted twice.
        let verbs: Vec<&str> = predicate
            .iter()
            .filter_map(|&idx| tokens.get(idx))
            .map(|token| token.lower())
            .collect();
        if !verbs.is_empty() {
            parts.push(verbs.join(" "));
        }
        if let Some(object) = sentence.first_chunk(ChunkRole::Object) {
            parts.push(sentence.chunk_text(object));
        }

        parts.join(" ")
    }
}

impl ReplyGenerator for WhQuestionReply {
    fn generate(
        &self,
        ctx: &ReplyContext<'_>,
        phrases: &Phrasebook,
        rng: &mut dyn RngCore,
    ) -> String {
        let skeleton = Self::skeleton(ctx.sentence, ctx.predicate);
        let rewritten = rewrite_perspective(&skeleton);
        let hedge = pick(&phrases.hedges, rng);
        let deferral = pick(&phrases.deferrals, rng);
        ctx.address(format!("{}{}{}", hedge, rewritten, deferral))
    }
}

/// One canned answer, whatever the question.
#[derive(Debug, Clone, Copy, Default)]
pub struct YesNoReply;

impl ReplyGenerator for YesNoReply {
    fn generate(
        &self,
        ctx: &ReplyContext<'_>,
        phrases: &Phrasebook,
        rng: &mut dyn RngCore,
    ) -> String {
        ctx.address(pick(&phrases.yes_no_answers, rng).to_string())
    }
}

/// "Understood: you want a new phone."
#[derive(Debug, Clone, Copy, Default)]
pub struct WishReply;

impl ReplyGenerator for WishReply {
    fn generate(
        &self,
        ctx: &ReplyContext<'_>,
        phrases: &Phrasebook,
        rng: &mut dyn RngCore,
    ) -> String {
        let rewritten = rewrite_perspective(ctx.sentence.text());
        let acknowledgment = pick(&phrases.acknowledgments, rng);
        ctx.address(format!("{}{}", acknowledgment, rewritten))
    }
}

/// Like [`WishReply`], followed by an optional collaborative suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionReply;

impl ReplyGenerator for InstructionReply {
    fn generate(
        &self,
        ctx: &ReplyContext<'_>,
        phrases: &Phrasebook,
        rng: &mut dyn RngCore,
    ) -> String {
        let rewritten = rewrite_perspective(ctx.sentence.text());
        let acknowledgment = pick(&phrases.acknowledgments, rng);
        let suffix = pick(&phrases.instruction_suffixes, rng);
        ctx.address(format!("{}{}{}", acknowledgment, rewritten, suffix))
    }
}

/// The sentence itself, perspective flipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoReply;

impl ReplyGenerator for EchoReply {
    fn generate(
        &self,
        ctx: &ReplyContext<'_>,
        _phrases: &Phrasebook,
        _rng: &mut dyn RngCore,
    ) -> String {
        ctx.address(rewrite_perspective(ctx.sentence.text()).into_owned())
    }
}

impl Category {
    /// The generator responsible for this category.
    pub fn generator(&self) -> &'static dyn ReplyGenerator {
        match self {
            Category::WhQuestion => &WhQuestionReply,
            Category::YesNoQuestion => &YesNoReply,
            Category::Instruction => &InstructionReply,
            Category::Wish => &WishReply,
            Category::Generic => &EchoReply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NounChunk, Pos, Token};

    fn what_do_you_want() -> Sentence {
        Sentence::new(
            vec![
                Token::new("What", Pos::Pron, "WP", "dobj"),
                Token::new("do", Pos::Aux, "VBP", "aux"),
                Token::new("you", Pos::Pron, "PRP", "nsubj"),
                Token::new("want", Pos::Verb, "VB", "ROOT").with_space_after(false),
                Token::new("?", Pos::Punct, ".", "punct"),
            ],
            vec![NounChunk::new(2, 2, 2, ChunkRole::Subject)],
        )
    }

    #[test]
    fn skeleton_orders_constituents() {
        assert_eq!(
            WhQuestionReply::skeleton(&what_do_you_want(), &[3]),
            "what you want"
        );
    }

    #[test]
    fn skeleton_without_predicate() {
        assert_eq!(WhQuestionReply::skeleton(&what_do_you_want(), &[]), "what you");
    }

    #[test]
    fn skeleton_ignores_out_of_range_predicate() {
        assert_eq!(
            WhQuestionReply::skeleton(&what_do_you_want(), &[42]),
            "what you"
        );
    }

    #[test]
    fn skeleton_repeats_wh_root() {
        let why = Sentence::new(
            vec![
                Token::new("Why", Pos::Sconj, "WRB", "ROOT").with_space_after(false),
                Token::new("?", Pos::Punct, ".", "punct"),
            ],
            vec![],
        );
        assert_eq!(WhQuestionReply::skeleton(&why, &[0]), "why why");
    }

    #[test]
    fn empty_label_is_not_an_address() {
        let sentence = what_do_you_want();
        let ctx = ReplyContext::new(&sentence, &[]).with_label(Some(""));
        assert_eq!(ctx.address("Yes.".into()), "Yes.");
        let ctx = ctx.with_label(Some("Ada"));
        assert_eq!(ctx.address("Yes.".into()), "Ada, Yes.");
    }

    #[test]
    fn empty_phrase_list_contributes_nothing() {
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        assert_eq!(pick(&[], &mut rng), "");
    }
}
