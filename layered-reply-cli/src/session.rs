//! The read-reply loop behind both profiles.

use anyhow::Result;
use layered_reply::{Annotator, Profile, Responder, SentenceDisplay, Turn, TurnReply};
use rand::RngCore;
use std::io::{BufRead, Write};

/// Used when the diary user answers the name prompt with a blank line.
const DEFAULT_NAME: &str = "friend";

/// How each turn is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Plain,
    /// Annotation display and category before the reply.
    Explain,
    /// The detailed turn as one line of JSON.
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub profile: Profile,
    pub name: Option<String>,
    pub timestamp: bool,
    pub output: Output,
}

/// "exit" or "quit", any case.
pub fn is_exit(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Local day name and time, e.g. "Monday, 09:30".
pub fn local_stamp() -> String {
    chrono::Local::now().format("%A, %H:%M").to_string()
}

fn greeting(profile: Profile, label: Option<&str>) -> String {
    match (profile, label) {
        (Profile::Diary, Some(name)) => format!(
            "Hello {}! Let's reflect on your day. Type 'exit' to quit.",
            name
        ),
        _ => "Chatbot is ready! Type 'exit' to quit.".to_string(),
    }
}

fn prompt(profile: Profile, label: Option<&str>) -> String {
    match (profile, label) {
        (Profile::Diary, Some(name)) => format!("{}: ", name),
        _ => "You: ".to_string(),
    }
}

fn farewell(profile: Profile, label: Option<&str>) -> String {
    match (profile, label) {
        (Profile::Diary, Some(name)) => format!("Goodbye {}! Have a great day!", name),
        _ => "Goodbye!".to_string(),
    }
}

fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub struct Session<A, R> {
    responder: Responder<A>,
    rng: R,
    options: SessionOptions,
    clock: fn() -> String,
}

impl<A: Annotator, R: RngCore> Session<A, R> {
    pub fn new(responder: Responder<A>, rng: R, options: SessionOptions) -> Self {
        Self {
            responder,
            rng,
            options,
            clock: local_stamp,
        }
    }

    /// Replace the source of reply timestamps.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    /// The diary profile always has a label; chat only when named.
    fn label<I: BufRead, O: Write>(&self, input: &mut I, out: &mut O) -> Result<Option<String>> {
        match (self.options.profile, &self.options.name) {
            (_, Some(name)) => Ok(Some(name.clone())),
            (Profile::Chat, None) => Ok(None),
            (Profile::Diary, None) => {
                write!(out, "Welcome, What's your name? ")?;
                out.flush()?;
                Ok(read_line(input)?.map(|line| match line.trim() {
                    "" => DEFAULT_NAME.to_string(),
                    name => name.to_string(),
                }))
            }
        }
    }

    /// Run until "exit", "quit" or end of input.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut out: O) -> Result<()> {
        let profile = self.options.profile;
        let label = match (profile, self.label(&mut input, &mut out)?) {
            (Profile::Diary, None) => {
                writeln!(out)?;
                return Ok(());
            }
            (_, label) => label,
        };
        let label = label.as_deref();

        writeln!(out, "{}", greeting(profile, label))?;
        let prompt = prompt(profile, label);
        let mut turns = 0usize;

        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;
            let line = match read_line(&mut input)? {
                Some(line) => line,
                None => {
                    writeln!(out)?;
                    break;
                }
            };
            let text = line.trim();
            if is_exit(text) {
                break;
            }
            if text.is_empty() {
                continue;
            }

            let stamp = self.options.timestamp.then(self.clock);
            let mut turn = Turn::new();
            if let Some(label) = label {
                turn = turn.with_label(label);
            }
            if let Some(stamp) = stamp.as_deref() {
                turn = turn.with_stamp(stamp);
            }

            turns += 1;
            match self.responder.respond_detailed(text, &turn, &mut self.rng) {
                Ok(reply) => self.print_reply(&reply, &mut out)?,
                Err(e) => eprintln!("error: {}", e),
            }
        }

        tracing::debug!(turns, "session ended");
        writeln!(out, "{}", farewell(profile, label))?;
        Ok(())
    }

    fn print_reply<O: Write>(&self, reply: &TurnReply, out: &mut O) -> Result<()> {
        match self.options.output {
            Output::Plain => writeln!(out, "Bot: {}", reply)?,
            Output::Json => writeln!(out, "{}", serde_json::to_string(reply)?)?,
            Output::Explain => {
                explain(reply, out)?;
                writeln!(out, "Bot: {}", reply)?;
            }
        }
        Ok(())
    }
}

/// Each sentence's annotation and category, as read for this turn.
fn explain<O: Write>(reply: &TurnReply, out: &mut O) -> Result<()> {
    for sentence_reply in &reply.sentences {
        let analysis = &sentence_reply.analysis;
        let display = SentenceDisplay::new(&sentence_reply.sentence)
            .with_tags()
            .with_deps()
            .with_chunks()
            .with_predicate(&analysis.predicate);
        writeln!(out, "{}", display)?;
        writeln!(
            out,
            "=> {} ({})",
            analysis.category,
            analysis.rule.unwrap_or("no rule matched")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_reply::{Phrasebook, PreAnnotated};
    use layered_reply_tagger::RuleTagger;
    use rand::rngs::mock::StepRng;

    fn friday() -> String {
        "Friday, 21:15".to_string()
    }

    fn transcript<A: Annotator>(responder: Responder<A>, options: SessionOptions, input: &str) -> String {
        let mut out = Vec::new();
        Session::new(responder, StepRng::new(0, 0), options)
            .with_clock(friday)
            .run(input.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn chat(input: &str) -> String {
        transcript(Responder::new(RuleTagger::new()), SessionOptions::default(), input)
    }

    #[test]
    fn exit_words() {
        assert!(is_exit("exit"));
        assert!(is_exit("  QUIT \n"));
        assert!(is_exit("Exit"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit(""));
    }

    #[test]
    fn chat_session() {
        assert_eq!(
            chat("Can you help me?\n\n   \nExit\nnever read\n"),
            "Chatbot is ready! Type 'exit' to quit.\n\
             You: Bot: Yes.\n\
             You: You: You: Goodbye!\n"
        );
    }

    #[test]
    fn end_of_input_ends_session() {
        assert_eq!(
            chat("The sky is blue."),
            "Chatbot is ready! Type 'exit' to quit.\n\
             You: Bot: The sky is blue.\n\
             You: \n\
             Goodbye!\n"
        );
    }

    #[test]
    fn diary_session_asks_for_name() {
        let responder = Responder::new(RuleTagger::new()).with_phrasebook(Phrasebook::diary());
        let options = SessionOptions {
            profile: Profile::Diary,
            timestamp: true,
            ..SessionOptions::default()
        };
        assert_eq!(
            transcript(responder, options, "Ada\nI want a new phone.\nquit\n"),
            "Welcome, What's your name? Hello Ada! Let's reflect on your day. Type 'exit' to quit.\n\
             Ada: Bot: [Friday, 21:15] Ada, Understood: you want a new phone.\n\
             Ada: Goodbye Ada! Have a great day!\n"
        );
    }

    #[test]
    fn diary_blank_name() {
        let options = SessionOptions {
            profile: Profile::Diary,
            ..SessionOptions::default()
        };
        let transcript = transcript(Responder::new(RuleTagger::new()), options, "\nexit\n");
        assert!(transcript.contains("Hello friend!"));
        assert!(transcript.ends_with("friend: Goodbye friend! Have a great day!\n"));
    }

    #[test]
    fn diary_without_any_input() {
        let options = SessionOptions {
            profile: Profile::Diary,
            ..SessionOptions::default()
        };
        assert_eq!(
            transcript(Responder::new(RuleTagger::new()), options, ""),
            "Welcome, What's your name? \n"
        );
    }

    #[test]
    fn named_chat_addresses_replies() {
        let options = SessionOptions {
            name: Some("Ada".to_string()),
            ..SessionOptions::default()
        };
        assert_eq!(
            transcript(Responder::new(RuleTagger::new()), options, "The sky is blue.\nexit\n"),
            "Chatbot is ready! Type 'exit' to quit.\n\
             You: Bot: Ada, The sky is blue.\n\
             You: Goodbye!\n"
        );
    }

    #[test]
    fn json_output() {
        let options = SessionOptions {
            output: Output::Json,
            ..SessionOptions::default()
        };
        let transcript = transcript(Responder::new(RuleTagger::new()), options, "Can you help me?\nexit\n");
        let line = transcript.lines().nth(1).unwrap();
        insta::assert_snapshot!(line, @r###"You: {"stamp":null,"sentences":[{"text":"Can you help me?","category":"YES_NO_QUESTION","rule":"modal-subject","predicate":[2],"reply":"Yes."}]}"###);
    }

    #[test]
    fn explain_output() {
        let options = SessionOptions {
            output: Output::Explain,
            ..SessionOptions::default()
        };
        let transcript = transcript(Responder::new(RuleTagger::new()), options, "Why?\nexit\n");
        assert!(transcript.contains("You: Why  ?\n"));
        assert!(transcript.contains("╰─╯ROOT\n"));
        assert!(transcript.contains("=> WH_QUESTION (wh-word)\n"));
        assert!(transcript.contains("Bot: I don't know why why, but I'll try to find out.\n"));
    }

    #[test]
    fn failed_turn_keeps_session_alive() {
        let transcript = transcript(
            Responder::new(PreAnnotated::default()),
            SessionOptions::default(),
            "Hello there.\nexit\n",
        );
        assert_eq!(
            transcript,
            "Chatbot is ready! Type 'exit' to quit.\nYou: You: Goodbye!\n"
        );
    }
}
