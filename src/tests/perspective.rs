use crate::{rewrite_perspective, PERSPECTIVE_PAIRS};

#[test]
fn test_sentences() {
    assert_eq!(
        rewrite_perspective("I am sure my plan works"),
        "you are sure your plan works"
    );
    assert_eq!(
        rewrite_perspective("you're right, I'll fix your bike"),
        "I'm right, you'll fix my bike"
    );
    assert_eq!(rewrite_perspective("Tell me about your day."), "Tell you about my day.");
    assert_eq!(rewrite_perspective("where you going"), "where I going");
}

#[test]
fn test_replacements_are_not_rewritten_again() {
    // "I" → "you" must not then be turned back into "I".
    assert_eq!(rewrite_perspective("I like you"), "you like I");
}

#[test]
fn test_whole_words_only() {
    assert_eq!(rewrite_perspective("Iris knows yourself"), "Iris knows yourself");
    assert_eq!(rewrite_perspective("meme mystery"), "meme mystery");
}

#[test]
fn test_rewriting_twice() {
    for (from, to) in PERSPECTIVE_PAIRS {
        let twice = rewrite_perspective(&rewrite_perspective(from)).into_owned();
        match *from {
            // One-way entries.
            "me" => assert_eq!(twice, "I"),
            "yours" => assert_eq!(twice, "mine"),
            _ => assert_eq!(twice, *from, "{:?} -> {:?} -> {:?}", from, to, twice),
        }
    }
}
