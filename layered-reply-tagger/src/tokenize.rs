//! Word tokenization.
//!
//! Text is cut on Unicode word boundaries, whitespace is dropped (but
//! remembered as `space_after`), and English clitics are split off the
//! host word:
//!
//! ```text
//! I'm    → I  'm
//! don't  → do n't
//! can't  → ca n't
//! ```

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawToken {
    pub text: String,
    pub space_after: bool,
}

/// Clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'m", "'s", "'d"];

pub(crate) fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens: Vec<RawToken> = Vec::new();
    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            if let Some(last) = tokens.last_mut() {
                last.space_after = true;
            }
            continue;
        }
        let (host, clitic) = split_clitic(segment);
        for piece in std::iter::once(host).chain(clitic) {
            tokens.push(RawToken {
                text: piece.to_string(),
                space_after: false,
            });
        }
    }
    tokens
}

/// Split a trailing clitic off `word`, accepting straight and typographic
/// apostrophes.
fn split_clitic(word: &str) -> (&str, Option<&str>) {
    for clitic in CLITICS {
        let typographic = clitic.replace('\'', "\u{2019}");
        for form in [*clitic, typographic.as_str()] {
            if word.len() <= form.len() {
                continue;
            }
            let split = word.len() - form.len();
            let matches = word
                .get(split..)
                .map_or(false, |tail| tail.eq_ignore_ascii_case(form));
            if matches {
                return (&word[..split], Some(&word[split..]));
            }
        }
    }
    (word, None)
}

/// Lookup key for the lexicon: lowercase, apostrophes folded.
pub(crate) fn lexical_key(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|token| token.text).collect()
    }

    #[test]
    fn words_and_punctuation() {
        assert_eq!(texts("Where are you going?"), ["Where", "are", "you", "going", "?"]);
        assert_eq!(texts("  Hi,  there!  "), ["Hi", ",", "there", "!"]);
    }

    #[test]
    fn clitics() {
        assert_eq!(texts("I'm sure you'll like it"), ["I", "'m", "sure", "you", "'ll", "like", "it"]);
        assert_eq!(texts("I don't know"), ["I", "do", "n't", "know"]);
        assert_eq!(texts("can't won't"), ["ca", "n't", "wo", "n't"]);
        assert_eq!(texts("I\u{2019}ve"), ["I", "\u{2019}ve"]);
        assert_eq!(texts("John's"), ["John", "'s"]);
    }

    #[test]
    fn spacing_is_recorded() {
        let tokens = tokenize("I'm here.");
        let spaces: Vec<bool> = tokens.iter().map(|token| token.space_after).collect();
        assert_eq!(spaces, [false, true, false, false]);
    }

    #[test]
    fn keys_fold_apostrophes() {
        assert_eq!(lexical_key("\u{2019}Ll"), "'ll");
        assert_eq!(lexical_key("Where"), "where");
    }

    #[test]
    fn blank_input() {
        assert!(tokenize(" \n\t").is_empty());
    }
}
