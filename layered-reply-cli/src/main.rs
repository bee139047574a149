//! `layered-reply`: talk to the responder from a terminal.
//!
//! ```text
//! $ layered-reply --profile diary --name Ada
//! Hello Ada! Let's reflect on your day. Type 'exit' to quit.
//! Ada: I want a new phone.
//! Bot: [Friday, 21:15] Ada, Understood: you want a new phone.
//! ```

mod session;

use anyhow::{Context, Result};
use clap::Parser;
use layered_reply::{Annotator, PreAnnotated, Profile, ReplyConfig, Responder};
use layered_reply_tagger::RuleTagger;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use session::{Output, Session, SessionOptions};

#[derive(Debug, Parser)]
#[command(name = "layered-reply")]
#[command(about = "Rule-based chat and diary companion", long_about = None)]
#[command(version)]
struct Args {
    /// Reply flavour: chat or diary (overrides the config file)
    #[arg(short, long)]
    profile: Option<Profile>,

    /// Your name; the diary profile asks for it when missing
    #[arg(short, long)]
    name: Option<String>,

    /// Prefix replies with the day and time (always on for diary)
    #[arg(short, long)]
    timestamp: bool,

    /// TOML file with a profile and phrase overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pre-computed annotations (RON, or JSON by extension) instead of the built-in tagger
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Seed for reproducible wording
    #[arg(long)]
    seed: Option<u64>,

    /// Show how each sentence was read before replying
    #[arg(long, conflicts_with = "json")]
    explain: bool,

    /// Print each turn as a JSON line
    #[arg(long)]
    json: bool,

    /// Log classification details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn output(&self) -> Output {
        if self.json {
            Output::Json
        } else if self.explain {
            Output::Explain
        } else {
            Output::Plain
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => ReplyConfig::load(path)?,
        None => ReplyConfig::default(),
    };
    if let Some(profile) = args.profile {
        config.profile = profile;
    }
    let phrases = config.phrasebook().context("invalid phrase configuration")?;

    let annotator: Box<dyn Annotator> = match &args.annotations {
        Some(path) => Box::new(PreAnnotated::load(path)?),
        None => Box::new(RuleTagger::new()),
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::debug!(
        profile = %config.profile,
        seed = ?args.seed,
        pre_annotated = args.annotations.is_some(),
        "starting session"
    );

    let options = SessionOptions {
        profile: config.profile,
        name: args.name.clone(),
        timestamp: args.timestamp || config.profile == Profile::Diary,
        output: args.output(),
    };
    let responder = Responder::new(annotator).with_phrasebook(phrases);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(responder, rng, options).run(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags() {
        let args = Args::try_parse_from([
            "layered-reply",
            "--profile",
            "Diary",
            "-n",
            "Ada",
            "--seed",
            "7",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.profile, Some(Profile::Diary));
        assert_eq!(args.name.as_deref(), Some("Ada"));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output(), Output::Json);
    }

    #[test]
    fn unknown_profile_is_rejected() {
        assert!(Args::try_parse_from(["layered-reply", "--profile", "pirate"]).is_err());
    }

    #[test]
    fn explain_conflicts_with_json() {
        assert!(Args::try_parse_from(["layered-reply", "--explain", "--json"]).is_err());
        let args = Args::try_parse_from(["layered-reply", "--explain"]).unwrap();
        assert_eq!(args.output(), Output::Explain);
    }
}
