//! Point-of-view rewriting between first and second person.
//!
//! Every whole-word occurrence of an expression in [`PERSPECTIVE_PAIRS`] is
//! replaced by its counterpart in a single left-to-right pass, so a
//! replacement is never rewritten again. Longer expressions are tried first
//! so "you are" is not consumed by the single word "you".
//!
//! Matching is case sensitive and replacements are written exactly as they
//! appear in the table.
//!
//! "me" becomes "you", but "you" becomes "I": rewriting twice does not bring
//! "me" back.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

/// Expression → replacement.
pub const PERSPECTIVE_PAIRS: &[(&str, &str)] = &[
    ("I am", "you are"),
    ("I was", "you were"),
    ("I'm", "you're"),
    ("I'd", "you'd"),
    ("I've", "you've"),
    ("I'll", "you'll"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you're", "I'm"),
    ("you'd", "I'd"),
    ("you've", "I've"),
    ("you'll", "I'll"),
    ("I", "you"),
    ("my", "your"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "I"),
    ("me", "you"),
];

static REPLACEMENTS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PERSPECTIVE_PAIRS.iter().copied().collect());

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut expressions: Vec<&str> = PERSPECTIVE_PAIRS.iter().map(|(from, _)| *from).collect();
    // Alternation is leftmost-first: the longest expression must come first.
    expressions.sort_by_key(|expression| std::cmp::Reverse(expression.len()));
    let alternation = expressions
        .iter()
        .map(|expression| regex::escape(expression))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("Invalid perspective regex")
});

/// Rewrite first/second person expressions in `text`.
///
/// Text without any table expression is returned borrowed and untouched.
pub fn rewrite_perspective(text: &str) -> Cow<'_, str> {
    let rewritten = PATTERN.replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        REPLACEMENTS.get(matched).copied().unwrap_or(matched).to_string()
    });
    if let Cow::Owned(ref owned) = rewritten {
        tracing::trace!(from = text, to = owned.as_str(), "rewrote perspective");
    }
    rewritten
}
