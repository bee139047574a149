//! Error types for annotation, configuration and reply generation.
//!
//! A failed annotation is terminal for the turn that produced it, never for
//! the session. Missing constituents and unmatched sentence shapes are not
//! errors at all.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by an [`Annotator`](crate::Annotator).
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The provider has no annotation for this input.
    #[error("no annotation available for input: {text:?}")]
    Unsupported { text: String },

    /// The annotation is structurally invalid.
    #[error("malformed annotation: {message}")]
    Malformed { message: String },

    /// Pre-computed annotations could not be read or parsed.
    #[error("failed to load annotations: {path}: {message}")]
    Load { path: String, message: String },
}

/// Errors raised while loading a [`ReplyConfig`](crate::ReplyConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A phrase list ended up empty after overrides were applied.
    #[error("phrase list `{field}` must not be empty")]
    EmptyPhraseList { field: &'static str },
}

/// Errors raised while computing a reply for one turn.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}

/// Result type for reply operations.
pub type ReplyResult<T> = Result<T, ReplyError>;
