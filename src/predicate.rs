//! Root-predicate location.

use crate::Sentence;

/// Token positions of the sentence's main predicate, in ascending order.
///
/// These are the tokens labelled as the dependency root. A sentence without
/// a root yields an empty list.
pub fn root_predicate(sentence: &Sentence) -> Vec<usize> {
    let mut positions: Vec<usize> = sentence
        .tokens()
        .iter()
        .filter(|token| token.is_root())
        .map(|token| token.index())
        .collect();
    positions.sort_unstable();
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pos, Token};

    #[test]
    fn finds_the_root_verb() {
        let sentence = Sentence::new(
            vec![
                Token::new("Please", Pos::Intj, "UH", "intj"),
                Token::new("close", Pos::Verb, "VB", "ROOT"),
                Token::new("the", Pos::Det, "DT", "det"),
                Token::new("door", Pos::Noun, "NN", "dobj"),
            ],
            vec![],
        );
        assert_eq!(root_predicate(&sentence), vec![1]);
    }

    #[test]
    fn no_root_is_empty() {
        let sentence = Sentence::new(vec![Token::new("Hmm", Pos::Intj, "UH", "intj")], vec![]);
        assert!(root_predicate(&sentence).is_empty());
    }

    #[test]
    fn several_roots_come_back_sorted() {
        let sentence = Sentence::new(
            vec![
                Token::new("Run", Pos::Verb, "VB", "ROOT"),
                Token::new(",", Pos::Punct, ",", "punct"),
                Token::new("hide", Pos::Verb, "VB", "ROOT"),
            ],
            vec![],
        );
        assert_eq!(root_predicate(&sentence), vec![0, 2]);
    }
}
