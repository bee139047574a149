//! Text rendering of an annotated sentence.
//!
//! Tokens are printed on one line, each included span underneath:
//!
//! ```text
//! Please  close  the  door  .
//!         ╰───╯ROOT
//!                ╰───────╯Object
//!         ╰───╯predicate
//! ```

use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

use crate::Sentence;

/// Inclusive token range.
type TokenRange = (usize, usize);

struct IncludedSpan {
    range: TokenRange,
    label: String,
}

pub struct SentenceDisplay<'a> {
    sentence: &'a Sentence,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in self.sentence.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token.text());
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for span in self.include_spans.iter() {
            let (start_char_idx, end_char_idx) = match (
                token_idx_to_start_display_char_idx.get(span.range.0),
                token_idx_to_end_display_char_idx.get(span.range.1),
            ) {
                (Some(&start), Some(&end)) if start < end => (start, end),
                _ => continue,
            };

            f.write_char('\n')?;
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&span.label)?;
        }

        Ok(())
    }
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(sentence: &'a Sentence) -> Self {
        SentenceDisplay {
            sentence,
            include_spans: Vec::new(),
        }
    }

    fn push(&mut self, range: TokenRange, label: String) {
        self.include_spans.push(IncludedSpan { range, label });
    }

    /// One span per token labelled `POS[TAG]`.
    pub fn include_tags(&mut self) {
        for token in self.sentence.tokens() {
            let label = format!("{}[{}]", token.pos(), token.tag());
            self.push((token.index(), token.index()), label);
        }
    }

    /// One span per token labelled with its dependency role.
    pub fn include_deps(&mut self) {
        for token in self.sentence.tokens() {
            self.push((token.index(), token.index()), token.dep().to_string());
        }
    }

    /// One span per noun chunk labelled with its role.
    pub fn include_chunks(&mut self) {
        for chunk in self.sentence.chunks() {
            self.push((chunk.start_idx, chunk.end_idx), format!("{:?}", chunk.role));
        }
    }

    /// One span per predicate position.
    pub fn include_predicate(&mut self, positions: &[usize]) {
        for &idx in positions {
            self.push((idx, idx), "predicate".to_string());
        }
    }

    /// Takes self
    pub fn with_tags(mut self) -> Self {
        self.include_tags();
        self
    }

    /// Takes self
    pub fn with_deps(mut self) -> Self {
        self.include_deps();
        self
    }

    /// Takes self
    pub fn with_chunks(mut self) -> Self {
        self.include_chunks();
        self
    }

    /// Takes self
    pub fn with_predicate(mut self, positions: &[usize]) -> Self {
        self.include_predicate(positions);
        self
    }
}
