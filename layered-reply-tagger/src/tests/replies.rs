use crate::RuleTagger;
use layered_reply::{Category, Phrasebook, Responder, Turn};
use rand::rngs::mock::StepRng;

fn reply(text: &str) -> String {
    Responder::new(RuleTagger::new())
        .respond(text, &Turn::new(), &mut StepRng::new(0, 0))
        .unwrap()
}

fn category(text: &str) -> Category {
    let analysis = Responder::new(RuleTagger::new()).analyze(text).unwrap();
    assert_eq!(analysis.len(), 1);
    analysis[0].category
}

#[test]
fn test_categories() {
    assert_eq!(category("Where are you going?"), Category::WhQuestion);
    assert_eq!(category("Can you help me?"), Category::YesNoQuestion);
    assert_eq!(category("Please close the door."), Category::Instruction);
    assert_eq!(category("Tell me about your day."), Category::Instruction);
    assert_eq!(category("I want a new phone."), Category::Wish);
    assert_eq!(category("I would love a cup of tea."), Category::Wish);
    assert_eq!(category("The sky is blue."), Category::Generic);
}

#[test]
fn test_auxiliary_do_question_is_generic() {
    // "Do" is an auxiliary, not a main verb.
    assert_eq!(category("Do you like jazz?"), Category::Generic);
    assert_eq!(reply("Do you like jazz?"), "Do I like jazz?");
}

#[test]
fn test_wh_question_replies() {
    assert_eq!(
        reply("Where are you going?"),
        "I don't know where I going, but I'll try to find out."
    );
    assert_eq!(
        reply("What is your name?"),
        "I don't know what my name is, but I'll try to find out."
    );
    assert_eq!(
        reply("What do you want?"),
        "I don't know what I want, but I'll try to find out."
    );
    assert_eq!(
        reply("Who wrote the letter?"),
        "I don't know who wrote the letter, but I'll try to find out."
    );
    assert_eq!(reply("Why?"), "I don't know why why, but I'll try to find out.");
}

#[test]
fn test_lowercase_input() {
    assert_eq!(
        reply("where are you going"),
        "I don't know where I going, but I'll try to find out."
    );
}

#[test]
fn test_other_replies() {
    assert_eq!(reply("Can you help me?"), "Yes.");
    assert_eq!(reply("Please close the door."), "Understood: Please close the door.");
    assert_eq!(reply("Tell me about your day."), "Understood: Tell you about my day.");
    assert_eq!(reply("I want a new phone."), "Understood: you want a new phone.");
    assert_eq!(
        reply("I need help with my homework."),
        "Understood: you need help with your homework."
    );
    assert_eq!(reply("The sky is blue."), "The sky is blue.");
}

#[test]
fn test_multi_sentence() {
    assert_eq!(
        reply("I want a new phone. Where are you going?"),
        "Understood: you want a new phone. I don't know where I going, but I'll try to find out."
    );
}

#[test]
fn test_diary_session_turn() {
    let responder = Responder::new(RuleTagger::new()).with_phrasebook(Phrasebook::diary());
    let turn = Turn::new().with_label("Ada").with_stamp("Friday, 21:15");
    let reply = responder
        .respond("Where are you going?", &turn, &mut StepRng::new(0, 0))
        .unwrap();
    assert_eq!(
        reply,
        "[Friday, 21:15] Ada, I don't know where I going, but keep reflecting on it."
    );
}

#[test]
fn test_empty_utterance() {
    assert_eq!(reply(""), "");
}
