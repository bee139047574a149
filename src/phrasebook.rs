//! Reply filler phrases and their TOML configuration.
//!
//! The generators never hard-code wording; every hedge, deferral and
//! acknowledgment is drawn from a [`Phrasebook`]. Two presets reproduce the
//! chat and diary flavours of the bot, and a TOML file can replace any list.
//!
//! ```toml
//! profile = "diary"
//!
//! [phrases]
//! deferrals = [", but sleep on it."]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::ConfigError;

/// Named phrase presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// General purpose assistant.
    Chat,
    /// Reflective diary companion.
    Diary,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Chat
    }
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Chat => "chat",
            Profile::Diary => "diary",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(Profile::Chat),
            "diary" => Ok(Profile::Diary),
            other => Err(format!("unknown profile `{}` (expected chat or diary)", other)),
        }
    }
}

const HEDGES: &[&str] = &["I don't know ", "I can't say "];
const ACKNOWLEDGMENTS: &[&str] = &["Understood: ", "Got it: "];
const YES_NO_ANSWERS: &[&str] = &["Yes.", "No.", "Maybe.", "I'm not sure."];

const CHAT_DEFERRALS: &[&str] = &[
    ", but I'll try to find out.",
    ". Perhaps check back with me later.",
    ". I’ll try to figure it out for you.",
];
const CHAT_SUFFIXES: &[&str] = &["", " I'll see what I can do."];

const DIARY_DEFERRALS: &[&str] = &[
    ", but keep reflecting on it.",
    ". Perhaps write more about it later.",
    ". Let's think about it together.",
];
const DIARY_SUFFIXES: &[&str] = &["", " Let's work on that together."];

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|phrase| phrase.to_string()).collect()
}

/// Every phrase list the reply generators draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrasebook {
    /// Opens a wh-question reply ("I don't know ").
    pub hedges: Vec<String>,
    /// Closes a wh-question reply.
    pub deferrals: Vec<String>,
    /// Opens wish and instruction replies ("Understood: ").
    pub acknowledgments: Vec<String>,
    /// Closes instruction replies; the empty string means no suffix.
    pub instruction_suffixes: Vec<String>,
    /// Canned answers to yes/no questions.
    pub yes_no_answers: Vec<String>,
}

impl Phrasebook {
    pub fn for_profile(profile: Profile) -> Self {
        let (deferrals, suffixes) = match profile {
            Profile::Chat => (CHAT_DEFERRALS, CHAT_SUFFIXES),
            Profile::Diary => (DIARY_DEFERRALS, DIARY_SUFFIXES),
        };
        Self {
            hedges: owned(HEDGES),
            deferrals: owned(deferrals),
            acknowledgments: owned(ACKNOWLEDGMENTS),
            instruction_suffixes: owned(suffixes),
            yes_no_answers: owned(YES_NO_ANSWERS),
        }
    }

    pub fn chat() -> Self {
        Self::for_profile(Profile::Chat)
    }

    pub fn diary() -> Self {
        Self::for_profile(Profile::Diary)
    }

    /// Ensure no list is empty.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let lists: [(&'static str, &Vec<String>); 5] = [
            ("hedges", &self.hedges),
            ("deferrals", &self.deferrals),
            ("acknowledgments", &self.acknowledgments),
            ("instruction_suffixes", &self.instruction_suffixes),
            ("yes_no_answers", &self.yes_no_answers),
        ];
        if let Some(&(field, _)) = lists.iter().find(|(_, list)| list.is_empty()) {
            return Err(ConfigError::EmptyPhraseList { field });
        }
        Ok(self)
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self::chat()
    }
}

/// Optional replacements for individual phrase lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhraseOverrides {
    #[serde(default)]
    pub hedges: Option<Vec<String>>,
    #[serde(default)]
    pub deferrals: Option<Vec<String>>,
    #[serde(default)]
    pub acknowledgments: Option<Vec<String>>,
    #[serde(default)]
    pub instruction_suffixes: Option<Vec<String>>,
    #[serde(default)]
    pub yes_no_answers: Option<Vec<String>>,
}

/// Reply configuration as read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplyConfig {
    /// Preset the overrides are applied on top of.
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub phrases: PhraseOverrides,
}

impl ReplyConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), profile = %config.profile, "loaded reply config");
        Ok(config)
    }

    /// The profile preset with every override applied, validated.
    pub fn phrasebook(&self) -> Result<Phrasebook, ConfigError> {
        let mut phrases = Phrasebook::for_profile(self.profile);
        let overrides = self.phrases.clone();
        if let Some(hedges) = overrides.hedges {
            phrases.hedges = hedges;
        }
        if let Some(deferrals) = overrides.deferrals {
            phrases.deferrals = deferrals;
        }
        if let Some(acknowledgments) = overrides.acknowledgments {
            phrases.acknowledgments = acknowledgments;
        }
        if let Some(suffixes) = overrides.instruction_suffixes {
            phrases.instruction_suffixes = suffixes;
        }
        if let Some(answers) = overrides.yes_no_answers {
            phrases.yes_no_answers = answers;
        }
        phrases.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn profiles_differ_only_in_closing_phrases() {
        let chat = Phrasebook::chat();
        let diary = Phrasebook::diary();
        assert_eq!(chat.hedges, diary.hedges);
        assert_eq!(chat.acknowledgments, diary.acknowledgments);
        assert_eq!(chat.yes_no_answers, diary.yes_no_answers);
        assert_ne!(chat.deferrals, diary.deferrals);
        assert_eq!(diary.instruction_suffixes[1], " Let's work on that together.");
    }

    #[test]
    fn profile_from_str() {
        assert_eq!("Diary".parse::<Profile>(), Ok(Profile::Diary));
        assert_eq!(" chat ".parse::<Profile>(), Ok(Profile::Chat));
        assert!("formal".parse::<Profile>().is_err());
    }

    #[test]
    fn empty_config_is_chat_preset() {
        let config = ReplyConfig::from_toml_str("").unwrap();
        assert_eq!(config.phrasebook().unwrap(), Phrasebook::chat());
    }

    #[test]
    fn overrides_replace_lists() {
        let config = ReplyConfig::from_toml_str(
            r#"
            profile = "diary"

            [phrases]
            hedges = ["Who knows "]
            "#,
        )
        .unwrap();
        let phrases = config.phrasebook().unwrap();
        assert_eq!(phrases.hedges, vec!["Who knows ".to_string()]);
        assert_eq!(phrases.deferrals, Phrasebook::diary().deferrals);
    }

    #[test]
    fn empty_override_is_rejected() {
        let config = ReplyConfig::from_toml_str("[phrases]\nyes_no_answers = []\n").unwrap();
        assert!(matches!(
            config.phrasebook(),
            Err(ConfigError::EmptyPhraseList {
                field: "yes_no_answers"
            })
        ));
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        assert!(matches!(
            ReplyConfig::from_toml_str("personality = \"grumpy\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "profile = \"diary\"").unwrap();
        let config = ReplyConfig::load(file.path()).unwrap();
        assert_eq!(config.profile, Profile::Diary);
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            ReplyConfig::load(Path::new("no/such/reply.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
