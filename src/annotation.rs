//! Annotated sentence model.
//!
//! These are the structures an [`Annotator`](crate::Annotator) hands to the
//! responder: tokens carrying coarse part-of-speech, fine-grained tag,
//! dependency label and lemma, plus the noun chunks found in the sentence.
//! Once built they are never mutated.
//!
//! ```text
//! Where  are  you  going  ?
//!                  ╰───╯ROOT
//!             ╰─╯nsubj
//! ```

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::AnnotationError;

/// Universal coarse part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl Pos {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency label carried by the grammatical root of a sentence.
pub const ROOT_DEP: &str = "ROOT";

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    text: String,
    lower: String,
    pos: Pos,
    tag: String,
    dep: String,
    lemma: String,
    is_sent_start: bool,
    index: usize,
    space_after: bool,
}

impl Token {
    /// Create a token. The lemma defaults to the lowercased text and the
    /// token is assumed to be followed by whitespace.
    pub fn new(
        text: impl Into<String>,
        pos: Pos,
        tag: impl Into<String>,
        dep: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            lemma: lower.clone(),
            lower,
            text,
            pos,
            tag: tag.into(),
            dep: dep.into(),
            is_sent_start: false,
            index: 0,
            space_after: true,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    pub fn with_space_after(mut self, space_after: bool) -> Self {
        self.space_after = space_after;
        self
    }

    pub fn with_sent_start(mut self, is_sent_start: bool) -> Self {
        self.is_sent_start = is_sent_start;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Fine-grained (Penn Treebank style) tag, e.g. `WRB` or `VBP`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Dependency role label, e.g. `nsubj` or [`ROOT_DEP`].
    pub fn dep(&self) -> &str {
        &self.dep
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn is_sent_start(&self) -> bool {
        self.is_sent_start
    }

    /// Position of the token within its sentence.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn space_after(&self) -> bool {
        self.space_after
    }

    pub fn has_tag(&self, tags: &[&str]) -> bool {
        tags.contains(&self.tag.as_str())
    }

    pub fn has_pos(&self, pos: &[Pos]) -> bool {
        pos.contains(&self.pos)
    }

    pub fn has_lemma(&self, lemmas: &[&str]) -> bool {
        lemmas.contains(&self.lemma.as_str())
    }

    pub fn is_root(&self) -> bool {
        self.dep == ROOT_DEP
    }
}

/// Grammatical role of a noun chunk, read off its root's dependency label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkRole {
    Subject,
    Object,
    Other,
}

impl ChunkRole {
    pub fn from_dep(dep: &str) -> Self {
        match dep {
            "nsubj" => ChunkRole::Subject,
            "dobj" => ChunkRole::Object,
            _ => ChunkRole::Other,
        }
    }
}

/// A noun phrase span within a sentence.
///
/// Both indices are inclusive and refer to token positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NounChunk {
    pub start_idx: usize,
    pub end_idx: usize,
    pub root_idx: usize,
    pub role: ChunkRole,
}

impl NounChunk {
    pub fn new(start_idx: usize, end_idx: usize, root_idx: usize, role: ChunkRole) -> Self {
        Self {
            start_idx,
            end_idx,
            root_idx,
            role,
        }
    }
}

/// One annotated sentence: its surface text, tokens and noun chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SentenceRecord")]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
    chunks: Vec<NounChunk>,
}

impl Sentence {
    /// Build a sentence from tokens alone. Indexes are assigned in order,
    /// the first token is marked sentence-initial and the text is rebuilt
    /// from the tokens and their trailing whitespace.
    pub fn new(tokens: Vec<Token>, chunks: Vec<NounChunk>) -> Self {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| Token {
                index,
                is_sent_start: index == 0,
                ..token
            })
            .collect();
        let text = join_tokens(&tokens);
        Self {
            text,
            tokens,
            chunks,
        }
    }

    /// Build a sentence keeping the supplied text and sentence-start flags.
    pub fn from_parts(text: impl Into<String>, tokens: Vec<Token>, chunks: Vec<NounChunk>) -> Self {
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| Token { index, ..token })
            .collect();
        Self {
            text: text.into(),
            tokens,
            chunks,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn chunks(&self) -> &[NounChunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Surface text of the inclusive token range, with the original spacing.
    pub fn span_text(&self, start_idx: usize, end_idx: usize) -> String {
        match self.tokens.get(start_idx..=end_idx) {
            Some(tokens) => join_tokens(tokens),
            None => String::new(),
        }
    }

    pub fn chunk_text(&self, chunk: &NounChunk) -> String {
        self.span_text(chunk.start_idx, chunk.end_idx)
    }

    /// The first chunk, in sentence order, carrying `role`.
    pub fn first_chunk(&self, role: ChunkRole) -> Option<&NounChunk> {
        self.chunks.iter().find(|chunk| chunk.role == role)
    }

    /// Check that every chunk lies inside the sentence and contains its root.
    pub fn validate(&self) -> Result<(), AnnotationError> {
        for chunk in &self.chunks {
            if chunk.start_idx > chunk.end_idx || chunk.end_idx >= self.tokens.len() {
                return Err(AnnotationError::Malformed {
                    message: format!(
                        "chunk {}..={} outside sentence of {} tokens: {:?}",
                        chunk.start_idx,
                        chunk.end_idx,
                        self.tokens.len(),
                        self.text
                    ),
                });
            }
            if chunk.root_idx < chunk.start_idx || chunk.root_idx > chunk.end_idx {
                return Err(AnnotationError::Malformed {
                    message: format!(
                        "chunk root {} outside chunk {}..={}: {:?}",
                        chunk.root_idx, chunk.start_idx, chunk.end_idx, self.text
                    ),
                });
            }
        }
        Ok(())
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    let mut text = String::new();
    for token in tokens {
        text.push_str(&token.text);
        if token.space_after {
            text.push(' ');
        }
    }
    text.truncate(text.trim_end().len());
    text
}

/// Serialized form of a sentence, as written by external annotation tools.
#[derive(Debug, Deserialize)]
struct SentenceRecord {
    #[serde(default)]
    text: Option<String>,
    tokens: Vec<TokenRecord>,
    #[serde(default)]
    chunks: Vec<ChunkRecord>,
}

#[derive(Debug, Deserialize)]
struct TokenRecord {
    text: String,
    pos: Pos,
    tag: String,
    dep: String,
    #[serde(default)]
    lemma: Option<String>,
    #[serde(default, alias = "is_sent_start")]
    sent_start: Option<bool>,
    #[serde(default = "default_space_after")]
    space_after: bool,
}

fn default_space_after() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct ChunkRecord {
    start_idx: usize,
    end_idx: usize,
    #[serde(default)]
    root_idx: Option<usize>,
    #[serde(default)]
    role: Option<ChunkRole>,
}

impl TryFrom<SentenceRecord> for Sentence {
    type Error = AnnotationError;

    fn try_from(record: SentenceRecord) -> Result<Self, Self::Error> {
        let tokens: Vec<Token> = record
            .tokens
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let mut token = Token::new(raw.text, raw.pos, raw.tag, raw.dep)
                    .with_space_after(raw.space_after)
                    .with_sent_start(raw.sent_start.unwrap_or(index == 0));
                if let Some(lemma) = raw.lemma {
                    token = token.with_lemma(lemma);
                }
                token
            })
            .collect();

        let chunks = record
            .chunks
            .into_iter()
            .map(|raw| {
                let root_idx = raw.root_idx.unwrap_or(raw.end_idx);
                let role = raw.role.unwrap_or_else(|| {
                    tokens
                        .get(root_idx)
                        .map_or(ChunkRole::Other, |root| ChunkRole::from_dep(root.dep()))
                });
                NounChunk::new(raw.start_idx, raw.end_idx, root_idx, role)
            })
            .collect();

        let sentence = match record.text {
            Some(text) => Sentence::from_parts(text, tokens, chunks),
            None => {
                let text = join_tokens(&tokens);
                Sentence::from_parts(text, tokens, chunks)
            }
        };
        sentence.validate()?;
        Ok(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_are_you_going() -> Sentence {
        Sentence::new(
            vec![
                Token::new("Where", Pos::Adv, "WRB", "advmod"),
                Token::new("are", Pos::Aux, "VBP", "aux").with_lemma("be"),
                Token::new("you", Pos::Pron, "PRP", "nsubj"),
                Token::new("going", Pos::Verb, "VBG", "ROOT")
                    .with_lemma("go")
                    .with_space_after(false),
                Token::new("?", Pos::Punct, ".", "punct"),
            ],
            vec![NounChunk::new(2, 2, 2, ChunkRole::Subject)],
        )
    }

    #[test]
    fn new_rebuilds_text_and_indexes() {
        let sentence = where_are_you_going();
        assert_eq!(sentence.text(), "Where are you going?");
        assert!(sentence.tokens()[0].is_sent_start());
        assert!(!sentence.tokens()[1].is_sent_start());
        assert_eq!(sentence.tokens()[3].index(), 3);
        assert_eq!(sentence.tokens()[0].lower(), "where");
    }

    #[test]
    fn span_text_keeps_original_spacing() {
        let sentence = where_are_you_going();
        assert_eq!(sentence.span_text(2, 4), "you going?");
        assert_eq!(sentence.span_text(3, 9), "");
    }

    #[test]
    fn first_chunk_by_role() {
        let sentence = where_are_you_going();
        let subject = sentence.first_chunk(ChunkRole::Subject).unwrap();
        assert_eq!(sentence.chunk_text(subject), "you");
        assert!(sentence.first_chunk(ChunkRole::Object).is_none());
    }

    #[test]
    fn chunk_role_from_dep() {
        assert_eq!(ChunkRole::from_dep("nsubj"), ChunkRole::Subject);
        assert_eq!(ChunkRole::from_dep("dobj"), ChunkRole::Object);
        assert_eq!(ChunkRole::from_dep("pobj"), ChunkRole::Other);
        assert_eq!(ChunkRole::from_dep("nsubjpass"), ChunkRole::Other);
    }

    #[test]
    fn validate_rejects_chunk_outside_sentence() {
        let sentence = Sentence::new(
            vec![Token::new("Hi", Pos::Intj, "UH", "ROOT")],
            vec![NounChunk::new(0, 3, 3, ChunkRole::Other)],
        );
        assert!(matches!(
            sentence.validate(),
            Err(AnnotationError::Malformed { .. })
        ));
    }

    #[test]
    fn deserialize_fills_defaults() {
        let sentence: Sentence = ron::from_str(
            r#"(
                tokens: [
                    (text: "I", pos: PRON, tag: "PRP", dep: "nsubj"),
                    (text: "want", pos: VERB, tag: "VBP", dep: "ROOT"),
                    (text: "tea", pos: NOUN, tag: "NN", dep: "dobj", space_after: false),
                    (text: ".", pos: PUNCT, tag: ".", dep: "punct"),
                ],
                chunks: [
                    (start_idx: 0, end_idx: 0),
                    (start_idx: 2, end_idx: 2),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(sentence.text(), "I want tea.");
        assert!(sentence.tokens()[0].is_sent_start());
        assert_eq!(sentence.tokens()[1].lemma(), "want");
        assert_eq!(sentence.chunks()[0].role, ChunkRole::Subject);
        assert_eq!(sentence.chunks()[1].role, ChunkRole::Object);
    }

    #[test]
    fn deserialize_rejects_bad_chunk_root() {
        let result: Result<Sentence, _> = ron::from_str(
            r#"(
                tokens: [(text: "Hello", pos: INTJ, tag: "UH", dep: "ROOT")],
                chunks: [(start_idx: 0, end_idx: 0, root_idx: Some(4))],
            )"#,
        );
        assert!(result.is_err());
    }
}
