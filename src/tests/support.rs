use std::path::Path;

use crate::{PreAnnotated, Responder, Sentence};
use rand::rngs::mock::StepRng;

/// Annotations for the scripted dialogue in `fixtures/dialogue.ron`.
pub(super) fn dialogue() -> PreAnnotated {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/dialogue.ron");
    PreAnnotated::load(&path).unwrap()
}

pub(super) fn sentence(text: &str) -> Sentence {
    use crate::Annotator;

    let mut sentences = dialogue().annotate(text).unwrap();
    assert_eq!(sentences.len(), 1, "{:?} is not a single sentence", text);
    sentences.remove(0)
}

pub(super) fn responder() -> Responder<PreAnnotated> {
    Responder::new(dialogue())
}

/// Always selects the first phrase of every list.
pub(super) fn first_choice() -> StepRng {
    StepRng::new(0, 0)
}
