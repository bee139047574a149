#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Rule-based conversational replies from sentence annotations.
//!
//! Each sentence of an utterance goes through the same pipeline:
//!
//! 1. an [`Annotator`] splits the text into annotated [`Sentence`]s
//! 2. [`root_predicate`] finds the main predicate
//! 3. the [`SentenceClassifier`] picks one [`Category`] from ranked rules
//! 4. the category's [`ReplyGenerator`] builds the reply, flipping
//!    first/second person with [`rewrite_perspective`]
//!
//! [`Responder`] runs the pipeline and joins the per-sentence replies.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_reply::{Responder, Turn};
//! use layered_reply_tagger::RuleTagger;
//!
//! let responder = Responder::new(RuleTagger::new());
//! let reply = responder.respond("I want a new phone.", &Turn::new(), &mut rand::thread_rng())?;
//! assert!(reply.ends_with("you want a new phone."));
//! ```
//!
//! The responder does not understand what it is told: it matches sentence
//! shapes and rewrites surface text, and it keeps no memory between turns.

mod annotation;
mod annotator;
mod classifier;
mod display;
mod errors;
mod generators;
mod perspective;
mod phrasebook;
mod predicate;
mod responder;

pub use annotation::{ChunkRole, NounChunk, Pos, Sentence, Token, ROOT_DEP};
pub use annotator::{AnnotatedDocument, Annotator, PreAnnotated};
pub use classifier::{Category, SentenceClassifier, SentenceRule};
pub use display::SentenceDisplay;
pub use errors::{AnnotationError, ConfigError, ReplyError, ReplyResult};
pub use generators::{
    EchoReply, InstructionReply, ReplyContext, ReplyGenerator, WhQuestionReply, WishReply,
    YesNoReply,
};
pub use perspective::{rewrite_perspective, PERSPECTIVE_PAIRS};
pub use phrasebook::{PhraseOverrides, Phrasebook, Profile, ReplyConfig};
pub use predicate::root_predicate;
pub use responder::{Responder, SentenceAnalysis, SentenceReply, Turn, TurnReply};

#[cfg(test)]
mod tests {
    mod classifier;
    mod display;
    mod perspective;
    mod responder;
    mod support;
}
