#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Built-in annotator for `layered-reply`.
//!
//! [`RuleTagger`] needs no model files: it tokenizes on Unicode word
//! boundaries, splits sentences on terminal punctuation, tags words from
//! closed-class lists and a verb lexicon, and derives dependency labels and
//! noun chunks from word order. Its output follows spaCy's English label
//! conventions so it can stand in for pre-computed annotations.
//!
//! ```text
//! Where  are  you  going  ?
//! ╰───╯advmod
//!        ╰─╯aux
//!             ╰─╯nsubj
//!                  ╰───╯ROOT
//!                         ╰punct
//! ```

mod lexicon;
mod parse;
mod pos;
mod sentence_boundary;
mod tokenize;

pub use sentence_boundary::SentenceBoundaryDetector;

use layered_reply::{AnnotationError, Annotator, Sentence, Token};

use parse::{parse, Parse};
use pos::tag_sentence;
use tokenize::{tokenize, RawToken};

/// Deterministic rule-based [`Annotator`].
#[derive(Debug, Clone, Default)]
pub struct RuleTagger {
    boundaries: SentenceBoundaryDetector,
}

impl RuleTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra abbreviations whose trailing period does not end a sentence.
    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        self.boundaries = self.boundaries.with_custom_abbreviations(abbreviations);
        self
    }

    fn annotate_sentence(&self, raw: &[RawToken]) -> Sentence {
        let tagged = tag_sentence(raw);
        let Parse { deps, chunks } = parse(&tagged);
        let tokens = tagged
            .into_iter()
            .zip(deps)
            .map(|(token, dep)| {
                Token::new(token.text, token.pos, token.tag, dep)
                    .with_lemma(token.lemma)
                    .with_space_after(token.space_after)
            })
            .collect();
        Sentence::new(tokens, chunks)
    }
}

impl Annotator for RuleTagger {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>, AnnotationError> {
        let tokens = tokenize(text);
        let sentences: Vec<Sentence> = self
            .boundaries
            .split(&tokens)
            .into_iter()
            .map(|range| self.annotate_sentence(&tokens[range]))
            .collect();
        tracing::debug!(
            tokens = tokens.len(),
            sentences = sentences.len(),
            "tagged utterance"
        );
        Ok(sentences)
    }
}
