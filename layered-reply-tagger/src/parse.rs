//! Shallow dependency labels and noun chunks.
//!
//! There is no tree: every token gets the label it would carry under the
//! sentence root, which is all the responder needs. Subject and object are
//! read off the positions of noun chunks relative to the root.

use layered_reply::{ChunkRole, NounChunk, Pos, ROOT_DEP};

use crate::pos::Tagged;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parse {
    pub deps: Vec<&'static str>,
    pub chunks: Vec<NounChunk>,
}

/// Verbs whose adjective complement is `acomp` rather than `amod`.
const LINKING_VERBS: &[&str] = &["feel", "look", "seem", "become", "get", "sound", "stay"];

fn is_chunk_modifier(token: &Tagged) -> bool {
    matches!(token.tag, "DT" | "PRP$" | "CD" | "JJ" | "JJR" | "JJS" | "POS")
}

/// The main verb, else the first auxiliary, else the first word.
fn find_root(tokens: &[Tagged]) -> Option<usize> {
    tokens
        .iter()
        .position(|token| token.pos == Pos::Verb)
        .or_else(|| tokens.iter().position(|token| token.pos == Pos::Aux))
        .or_else(|| tokens.iter().position(|token| token.pos != Pos::Punct))
}

/// Inclusive spans of `modifier* noun+` runs and lone personal pronouns.
fn find_chunks(tokens: &[Tagged]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    while start < tokens.len() {
        let mut idx = start;
        while idx < tokens.len() && is_chunk_modifier(&tokens[idx]) {
            idx += 1;
        }
        let head_start = idx;
        while idx < tokens.len() && tokens[idx].is_noun() {
            idx += 1;
        }

        if idx > head_start {
            spans.push((start, idx - 1));
            start = idx;
        } else if tokens[start].tag == "PRP" {
            spans.push((start, start));
            start += 1;
        } else {
            start += 1;
        }
    }
    spans
}

fn modifier_dep(token: &Tagged) -> &'static str {
    match token.tag {
        "DT" => "det",
        "PRP$" => "poss",
        "CD" => "nummod",
        "JJ" | "JJR" | "JJS" => "amod",
        "POS" => "case",
        _ if token.is_noun() => "compound",
        _ => "dep",
    }
}

/// Wh-pronouns take whichever core slot is still free.
fn wh_dep(
    tag: &str,
    copular: bool,
    verbal: bool,
    has_subject: bool,
    has_object: bool,
) -> &'static str {
    match tag {
        "WRB" => "advmod",
        "WDT" | "WP$" => "det",
        _ if !has_subject && copular => "attr",
        _ if !has_subject => "nsubj",
        _ if verbal && !has_object => "dobj",
        _ => "attr",
    }
}

/// Label every token and collect the noun chunks of one sentence.
pub(crate) fn parse(tokens: &[Tagged]) -> Parse {
    let mut deps = vec!["dep"; tokens.len()];
    let root = match find_root(tokens) {
        Some(root) => root,
        None => {
            return Parse {
                deps: vec!["punct"; tokens.len()],
                chunks: Vec::new(),
            }
        }
    };
    deps[root] = ROOT_DEP;

    let verbal = tokens[root].pos == Pos::Verb;
    let copular = tokens[root].pos == Pos::Aux && tokens[root].lemma == "be";

    let spans = find_chunks(tokens);
    let mut labels: Vec<&'static str> = vec![""; spans.len()];

    for (k, &(start, end)) in spans.iter().enumerate() {
        if (start..=end).contains(&root) {
            labels[k] = ROOT_DEP;
            continue;
        }
        match start.checked_sub(1).map(|prev| &tokens[prev]) {
            Some(prev) if prev.pos == Pos::Adp => labels[k] = "pobj",
            Some(prev) if prev.pos == Pos::Cconj => labels[k] = "conj",
            _ => {}
        }
    }

    let subject = (0..spans.len())
        .rev()
        .find(|&k| spans[k].1 < root && labels[k].is_empty());
    if let Some(k) = subject {
        labels[k] = "nsubj";
    }

    let after_root: Vec<usize> = (0..spans.len())
        .filter(|&k| spans[k].0 > root && labels[k].is_empty())
        .collect();
    let mut after_root = after_root.into_iter().peekable();
    if copular {
        // "What is your name?": the subject follows an inverted copula.
        if subject.is_none() {
            if let Some(k) = after_root.next() {
                labels[k] = "nsubj";
            }
        }
        for k in after_root {
            labels[k] = "attr";
        }
    } else if verbal {
        if let Some(k) = after_root.next() {
            let (start, end) = spans[k];
            let adjacent = after_root.peek().copied().filter(|&n| spans[n].0 == end + 1);
            match adjacent {
                Some(n) if start == end && tokens[start].tag == "PRP" => {
                    labels[k] = "dative";
                    labels[n] = "dobj";
                    after_root.next();
                }
                _ => labels[k] = "dobj",
            }
        }
        for k in after_root {
            labels[k] = "npadvmod";
        }
    }

    let has_subject = labels.contains(&"nsubj");
    let has_object = labels.contains(&"dobj");
    let mut in_chunk = vec![false; tokens.len()];
    let mut chunks = Vec::with_capacity(spans.len());

    for (k, &(start, end)) in spans.iter().enumerate() {
        let label = if labels[k].is_empty() { "npadvmod" } else { labels[k] };
        for idx in start..end {
            deps[idx] = modifier_dep(&tokens[idx]);
        }
        if end != root {
            deps[end] = label;
        }
        in_chunk[start..=end].iter_mut().for_each(|flag| *flag = true);
        chunks.push(NounChunk::new(start, end, end, ChunkRole::from_dep(label)));
    }

    for (idx, token) in tokens.iter().enumerate() {
        if idx == root || in_chunk[idx] {
            continue;
        }
        let prev = idx.checked_sub(1).map(|prev| &tokens[prev]);
        if token.is_wh() {
            deps[idx] = wh_dep(token.tag, copular, verbal, has_subject, has_object);
            continue;
        }
        deps[idx] = match token.tag {
            "TO" => "aux",
            "POS" => "case",
            "PRP$" => "poss",
            _ => match token.pos {
                Pos::Aux => "aux",
                Pos::Part => "neg",
                Pos::Verb => match prev.map(|prev| (prev.tag, prev.pos)) {
                    Some(("TO", _)) => "xcomp",
                    Some((_, Pos::Cconj)) => "conj",
                    Some((_, Pos::Adp)) => "pcomp",
                    _ => "ccomp",
                },
                Pos::Adp => "prep",
                Pos::Sconj => "mark",
                Pos::Cconj => "cc",
                Pos::Adv => "advmod",
                Pos::Intj => "intj",
                Pos::Punct => "punct",
                Pos::Adj if copular || LINKING_VERBS.contains(&tokens[root].lemma.as_str()) => {
                    "acomp"
                }
                Pos::Adj => "amod",
                Pos::Num => "nummod",
                Pos::Det => "det",
                _ => "dep",
            },
        };
    }

    Parse { deps, chunks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::tag_sentence;
    use crate::tokenize::tokenize;

    fn deps(text: &str) -> Vec<String> {
        let tagged = tag_sentence(&tokenize(text));
        let parse = parse(&tagged);
        tagged
            .iter()
            .zip(parse.deps)
            .map(|(token, dep)| format!("{}/{}", token.text, dep))
            .collect()
    }

    #[test]
    fn wh_object_and_subject() {
        assert_eq!(
            deps("What do you want?"),
            ["What/dobj", "do/aux", "you/nsubj", "want/ROOT", "?/punct"]
        );
        assert_eq!(
            deps("Who wrote the letter?"),
            ["Who/nsubj", "wrote/ROOT", "the/det", "letter/dobj", "?/punct"]
        );
    }

    #[test]
    fn wh_determiners_and_adverbs() {
        assert_eq!(
            deps("Whose car is it?"),
            ["Whose/det", "car/nsubj", "is/ROOT", "it/attr", "?/punct"]
        );
        assert_eq!(
            deps("Where did you go?"),
            ["Where/advmod", "did/aux", "you/nsubj", "go/ROOT", "?/punct"]
        );
    }

    #[test]
    fn inverted_copula() {
        assert_eq!(
            deps("What is your name?"),
            ["What/attr", "is/ROOT", "your/poss", "name/nsubj", "?/punct"]
        );
    }

    #[test]
    fn dative_and_object() {
        assert_eq!(
            deps("Give me the book"),
            ["Give/ROOT", "me/dative", "the/det", "book/dobj"]
        );
    }

    #[test]
    fn infinitive_and_negation() {
        assert_eq!(
            deps("I don't want to go"),
            ["I/nsubj", "do/aux", "n't/neg", "want/ROOT", "to/aux", "go/xcomp"]
        );
    }

    #[test]
    fn verbless_sentence() {
        assert_eq!(deps("Hello!"), ["Hello/ROOT", "!/punct"]);
        assert_eq!(deps("Coffee, please."), ["Coffee/ROOT", ",/punct", "please/intj", "./punct"]);
        assert_eq!(deps("?!"), ["?/punct", "!/punct"]);
    }

    #[test]
    fn chunk_spans() {
        let tagged = tag_sentence(&tokenize("My old friend and I want two new phones"));
        let parse = parse(&tagged);
        let spans: Vec<(usize, usize, ChunkRole)> = parse
            .chunks
            .iter()
            .map(|chunk| (chunk.start_idx, chunk.end_idx, chunk.role))
            .collect();
        assert_eq!(
            spans,
            [
                (0, 2, ChunkRole::Subject),
                (4, 4, ChunkRole::Other),
                (6, 8, ChunkRole::Object),
            ]
        );
    }
}
