//! The annotation interface and a provider backed by pre-computed output.
//!
//! The responder never tokenizes or tags text itself. Anything that can turn
//! an utterance into [`Sentence`]s implements [`Annotator`]; the built-in
//! rule tagger lives in its own crate, and [`PreAnnotated`] replays
//! annotations exported from an external tagger.

use ron::extensions::Extensions;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{AnnotationError, Sentence};

/// Splits text into annotated sentences.
///
/// Implementations must be deterministic: the same text always yields the
/// same annotation, so classification is reproducible.
pub trait Annotator {
    /// Annotate `text`. Empty or whitespace-only input yields no sentences.
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>, AnnotationError>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>, AnnotationError> {
        (**self).annotate(text)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>, AnnotationError> {
        (**self).annotate(text)
    }
}

/// One utterance and its annotation, as stored in a pre-annotated file.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatedDocument {
    pub text: String,
    pub sentences: Vec<Sentence>,
}

/// Annotator that looks utterances up in a table of stored annotations.
///
/// ```ignore
/// let annotator = PreAnnotated::load(Path::new("fixtures/dialogue.ron"))?;
/// let sentences = annotator.annotate("Where are you going?")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PreAnnotated {
    documents: HashMap<String, Vec<Sentence>>,
}

impl PreAnnotated {
    pub fn new(documents: Vec<AnnotatedDocument>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (doc.text.trim().to_string(), doc.sentences))
            .collect();
        Self { documents }
    }

    /// Parse a RON list of documents. `Some(..)` may be omitted around
    /// optional fields.
    pub fn from_ron_str(source: &str) -> Result<Self, AnnotationError> {
        let documents: Vec<AnnotatedDocument> = ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(source)
            .map_err(|e| AnnotationError::Malformed {
                message: e.to_string(),
            })?;
        Ok(Self::new(documents))
    }

    /// Parse a JSON array of documents.
    pub fn from_json_str(source: &str) -> Result<Self, AnnotationError> {
        let documents: Vec<AnnotatedDocument> =
            serde_json::from_str(source).map_err(|e| AnnotationError::Malformed {
                message: e.to_string(),
            })?;
        Ok(Self::new(documents))
    }

    /// Load a RON file, or a JSON file when the extension is `.json`.
    pub fn load(path: &Path) -> Result<Self, AnnotationError> {
        let content = fs::read_to_string(path).map_err(|e| AnnotationError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let parsed = if path.extension().map_or(false, |e| e == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_ron_str(&content)
        };

        parsed.map_err(|e| AnnotationError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Annotator for PreAnnotated {
    fn annotate(&self, text: &str) -> Result<Vec<Sentence>, AnnotationError> {
        let key = text.trim();
        if key.is_empty() {
            return Ok(Vec::new());
        }
        self.documents
            .get(key)
            .cloned()
            .ok_or_else(|| AnnotationError::Unsupported {
                text: key.to_string(),
            })
    }
}
