//! Closed-class word lists and the verb lexicon.
//!
//! Keys are lowercase with typographic apostrophes folded to `'`.

use layered_reply::Pos;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fixed reading of a closed-class word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub pos: Pos,
    pub tag: &'static str,
    pub lemma: Option<&'static str>,
}

const WH_WORDS: &[(&str, Pos, &str)] = &[
    ("what", Pos::Pron, "WP"),
    ("who", Pos::Pron, "WP"),
    ("whom", Pos::Pron, "WP"),
    ("whose", Pos::Det, "WP$"),
    ("which", Pos::Det, "WDT"),
    ("where", Pos::Adv, "WRB"),
    ("when", Pos::Adv, "WRB"),
    ("why", Pos::Adv, "WRB"),
    ("how", Pos::Adv, "WRB"),
];

/// Personal pronoun and its lemma.
const PERSONAL_PRONOUNS: &[(&str, &str)] = &[
    ("i", "I"),
    ("me", "I"),
    ("you", "you"),
    ("he", "he"),
    ("him", "he"),
    ("she", "she"),
    ("it", "it"),
    ("we", "we"),
    ("us", "we"),
    ("they", "they"),
    ("them", "they"),
    ("myself", "myself"),
    ("yourself", "yourself"),
    ("himself", "himself"),
    ("herself", "herself"),
    ("itself", "itself"),
    ("ourselves", "ourselves"),
    ("yourselves", "yourselves"),
    ("themselves", "themselves"),
    ("mine", "mine"),
    ("yours", "yours"),
    ("hers", "hers"),
    ("ours", "ours"),
    ("theirs", "theirs"),
    ("someone", "someone"),
    ("something", "something"),
    ("anyone", "anyone"),
    ("anything", "anything"),
    ("everyone", "everyone"),
    ("everything", "everything"),
    ("nothing", "nothing"),
];

/// "her" is listed here; the tagger turns it into a personal pronoun when
/// nothing nominal follows.
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "every", "each", "no",
    "all", "both", "another", "either", "neither",
];

/// Modal and its lemma.
const MODALS: &[(&str, &str)] = &[
    ("can", "can"),
    ("could", "could"),
    ("will", "will"),
    ("would", "would"),
    ("shall", "shall"),
    ("should", "should"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
    ("ca", "can"),
    ("wo", "will"),
    ("'ll", "will"),
    ("'d", "would"),
];

const BE_FORMS: &[(&str, &str)] = &[
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("'m", "VBP"),
    ("'re", "VBP"),
    ("'s", "VBZ"),
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "during", "except", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "outside", "over",
    "past", "since", "through", "throughout", "till", "to", "toward", "towards", "under",
    "until", "up", "upon", "with", "within", "without",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor"];

const SUBORDINATORS: &[&str] = &[
    "if", "because", "although", "though", "while", "whether", "unless", "than",
];

const ADVERBS: &[&str] = &[
    "very", "really", "just", "also", "too", "always", "never", "often", "sometimes", "usually",
    "now", "then", "here", "there", "today", "tomorrow", "yesterday", "tonight", "soon",
    "already", "still", "again", "maybe", "perhaps", "quite", "rather", "so", "only", "even",
    "ever", "almost", "later", "well", "back", "away", "together", "kindly", "else", "once",
];

const INTERJECTIONS: &[&str] = &[
    "please", "hello", "hi", "hey", "oh", "wow", "yes", "yeah", "thanks", "bye", "goodbye",
    "hmm", "ah", "oops", "sorry",
];

const ADJECTIVES: &[&str] = &[
    "new", "old", "good", "bad", "great", "big", "small", "little", "long", "short", "happy",
    "sad", "blue", "red", "green", "black", "white", "yellow", "hot", "cold", "warm", "nice",
    "tired", "hungry", "busy", "ready", "sure", "fine", "ok", "okay", "late", "early", "free",
    "easy", "hard", "important", "boring", "funny", "quiet", "loud", "right", "wrong", "best",
    "better", "worse", "worst", "favorite", "favourite", "sick", "angry", "afraid", "glad",
    "alone", "other", "next", "last", "first", "own", "same", "different", "whole", "full",
    "empty", "many", "much", "few", "more", "most", "several", "interesting", "lovely",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "hundred", "thousand",
];

static CLOSED_CLASS: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    let mut entries = HashMap::new();
    let mut insert = |word: &'static str, pos: Pos, tag: &'static str, lemma: Option<&'static str>| {
        entries.entry(word).or_insert(Entry { pos, tag, lemma });
    };

    for &(word, pos, tag) in WH_WORDS {
        insert(word, pos, tag, None);
    }
    for &(word, lemma) in PERSONAL_PRONOUNS {
        insert(word, Pos::Pron, "PRP", Some(lemma));
    }
    for &word in POSSESSIVES {
        insert(word, Pos::Pron, "PRP$", None);
    }
    for &word in DETERMINERS {
        insert(word, Pos::Det, "DT", None);
    }
    for &(word, lemma) in MODALS {
        insert(word, Pos::Aux, "MD", Some(lemma));
    }
    for &(word, tag) in BE_FORMS {
        insert(word, Pos::Aux, tag, Some("be"));
    }
    insert("not", Pos::Part, "RB", Some("not"));
    insert("n't", Pos::Part, "RB", Some("not"));
    for &word in PREPOSITIONS {
        insert(word, Pos::Adp, "IN", None);
    }
    for &word in COORDINATORS {
        insert(word, Pos::Cconj, "CC", None);
    }
    for &word in SUBORDINATORS {
        insert(word, Pos::Sconj, "IN", None);
    }
    for &word in ADVERBS {
        insert(word, Pos::Adv, "RB", None);
    }
    for &word in INTERJECTIONS {
        insert(word, Pos::Intj, "UH", None);
    }
    for &word in ADJECTIVES {
        insert(word, Pos::Adj, "JJ", None);
    }
    for &word in NUMBER_WORDS {
        insert(word, Pos::Num, "CD", None);
    }
    entries
});

pub(crate) fn closed_class(key: &str) -> Option<Entry> {
    CLOSED_CLASS.get(key).copied()
}

/// Inflected shape of a verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerbForm {
    Base,
    Third,
    Past,
    Participle,
    /// Regular "-ed" forms and irregulars whose past and participle agree.
    PastOrParticiple,
    Gerund,
}

impl VerbForm {
    /// Penn tag of the form when nothing in context decides otherwise.
    pub fn tag(self) -> &'static str {
        match self {
            VerbForm::Base => "VBP",
            VerbForm::Third => "VBZ",
            VerbForm::Past | VerbForm::PastOrParticiple => "VBD",
            VerbForm::Participle => "VBN",
            VerbForm::Gerund => "VBG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VerbReading {
    pub lemma: &'static str,
    pub form: VerbForm,
}

const REGULAR_VERBS: &[&str] = &[
    "want", "need", "require", "love", "like", "appreciate", "help", "close", "open", "show",
    "look", "watch", "listen", "cook", "play", "work", "study", "learn", "call", "ask", "answer",
    "talk", "try", "start", "finish", "end", "move", "turn", "walk", "travel", "visit", "stay",
    "live", "arrive", "use", "fix", "clean", "wash", "paint", "dance", "rest", "relax", "enjoy",
    "hate", "prefer", "hope", "wish", "remember", "believe", "explain", "describe", "change",
    "check", "book", "order", "wait", "miss", "happen", "seem", "reflect", "share", "decide",
    "agree", "improve", "create", "remind", "mind", "care", "imagine", "guess", "wonder",
    "worry", "smile", "laugh", "cry", "jump", "climb", "carry", "hurry", "marry", "save",
    "plan", "stop", "drop", "shop", "chat", "hug", "jog", "skip", "grab", "step", "thank",
    "pick", "follow", "join", "add", "count", "print", "type", "search", "suggest",
    "recommend", "exercise",
];

/// Regular verbs that double their final consonant before "-ed"/"-ing".
const DOUBLED: &[&str] = &[
    "plan", "stop", "drop", "shop", "chat", "hug", "jog", "skip", "grab", "step",
];

/// base, past, past participle
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("do", "did", "done"),
    ("have", "had", "had"),
    ("go", "went", "gone"),
    ("come", "came", "come"),
    ("see", "saw", "seen"),
    ("eat", "ate", "eaten"),
    ("take", "took", "taken"),
    ("give", "gave", "given"),
    ("write", "wrote", "written"),
    ("make", "made", "made"),
    ("get", "got", "gotten"),
    ("know", "knew", "known"),
    ("think", "thought", "thought"),
    ("tell", "told", "told"),
    ("say", "said", "said"),
    ("find", "found", "found"),
    ("feel", "felt", "felt"),
    ("leave", "left", "left"),
    ("bring", "brought", "brought"),
    ("buy", "bought", "bought"),
    ("teach", "taught", "taught"),
    ("catch", "caught", "caught"),
    ("keep", "kept", "kept"),
    ("sleep", "slept", "slept"),
    ("meet", "met", "met"),
    ("read", "read", "read"),
    ("run", "ran", "run"),
    ("sit", "sat", "sat"),
    ("stand", "stood", "stood"),
    ("understand", "understood", "understood"),
    ("begin", "began", "begun"),
    ("drink", "drank", "drunk"),
    ("sing", "sang", "sung"),
    ("swim", "swam", "swum"),
    ("speak", "spoke", "spoken"),
    ("break", "broke", "broken"),
    ("choose", "chose", "chosen"),
    ("forget", "forgot", "forgotten"),
    ("drive", "drove", "driven"),
    ("ride", "rode", "ridden"),
    ("fly", "flew", "flown"),
    ("grow", "grew", "grown"),
    ("draw", "drew", "drawn"),
    ("throw", "threw", "thrown"),
    ("wear", "wore", "worn"),
    ("win", "won", "won"),
    ("lose", "lost", "lost"),
    ("send", "sent", "sent"),
    ("spend", "spent", "spent"),
    ("build", "built", "built"),
    ("pay", "paid", "paid"),
    ("hear", "heard", "heard"),
    ("hold", "held", "held"),
    ("sell", "sold", "sold"),
    ("put", "put", "put"),
    ("set", "set", "set"),
    ("let", "let", "let"),
    ("cut", "cut", "cut"),
    ("hit", "hit", "hit"),
    ("hurt", "hurt", "hurt"),
    ("cost", "cost", "cost"),
    ("shut", "shut", "shut"),
    ("become", "became", "become"),
    ("fall", "fell", "fallen"),
    ("forgive", "forgave", "forgiven"),
    ("hide", "hid", "hidden"),
    ("lead", "led", "led"),
    ("mean", "meant", "meant"),
    ("feed", "fed", "fed"),
    ("fight", "fought", "fought"),
    ("seek", "sought", "sought"),
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Ends in "y" after a consonant ("carry", not "play").
fn consonant_y(base: &str) -> bool {
    let mut chars = base.chars().rev();
    matches!((chars.next(), chars.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

fn without_last(base: &str, count: usize) -> &str {
    &base[..base.len() - count]
}

fn third_person(base: &str) -> String {
    match base {
        "have" => "has".to_string(),
        "do" | "go" => format!("{}es", base),
        _ if base.ends_with(|c: char| matches!(c, 's' | 'x' | 'z'))
            || base.ends_with("ch")
            || base.ends_with("sh") =>
        {
            format!("{}es", base)
        }
        _ if consonant_y(base) => format!("{}ies", without_last(base, 1)),
        _ => format!("{}s", base),
    }
}

fn doubled_final(base: &str) -> Option<char> {
    if DOUBLED.contains(&base) {
        base.chars().last()
    } else {
        None
    }
}

fn regular_past(base: &str) -> String {
    if base.ends_with('e') {
        format!("{}d", base)
    } else if consonant_y(base) {
        format!("{}ied", without_last(base, 1))
    } else if let Some(last) = doubled_final(base) {
        format!("{}{}ed", base, last)
    } else {
        format!("{}ed", base)
    }
}

fn gerund(base: &str) -> String {
    if base.ends_with("ie") {
        format!("{}ying", without_last(base, 2))
    } else if base.ends_with('e') && !(base.ends_with("ee") || base.ends_with("ye") || base.ends_with("oe")) {
        format!("{}ing", without_last(base, 1))
    } else if let Some(last) = doubled_final(base) {
        format!("{}{}ing", base, last)
    } else {
        format!("{}ing", base)
    }
}

static VERBS: Lazy<HashMap<String, VerbReading>> = Lazy::new(|| {
    let mut verbs = HashMap::new();
    let mut insert = |form: String, lemma: &'static str, shape: VerbForm| {
        verbs
            .entry(form)
            .or_insert(VerbReading { lemma, form: shape });
    };

    // Base forms first so "put" or "read" keep their base reading.
    for &(base, _, _) in IRREGULAR_VERBS {
        insert(base.to_string(), base, VerbForm::Base);
    }
    for &base in REGULAR_VERBS {
        insert(base.to_string(), base, VerbForm::Base);
    }

    for &(base, past, participle) in IRREGULAR_VERBS {
        insert(third_person(base), base, VerbForm::Third);
        insert(gerund(base), base, VerbForm::Gerund);
        if past == participle {
            insert(past.to_string(), base, VerbForm::PastOrParticiple);
        } else {
            insert(past.to_string(), base, VerbForm::Past);
            insert(participle.to_string(), base, VerbForm::Participle);
        }
    }
    for &base in REGULAR_VERBS {
        insert(third_person(base), base, VerbForm::Third);
        insert(gerund(base), base, VerbForm::Gerund);
        insert(regular_past(base), base, VerbForm::PastOrParticiple);
    }
    verbs
});

pub(crate) fn verb(key: &str) -> Option<VerbReading> {
    VERBS.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflections() {
        assert_eq!(third_person("watch"), "watches");
        assert_eq!(third_person("carry"), "carries");
        assert_eq!(third_person("play"), "plays");
        assert_eq!(regular_past("love"), "loved");
        assert_eq!(regular_past("stop"), "stopped");
        assert_eq!(regular_past("study"), "studied");
        assert_eq!(gerund("make"), "making");
        assert_eq!(gerund("see"), "seeing");
        assert_eq!(gerund("plan"), "planning");
    }

    #[test]
    fn verb_lookup() {
        assert_eq!(
            verb("going"),
            Some(VerbReading {
                lemma: "go",
                form: VerbForm::Gerund
            })
        );
        assert_eq!(verb("wrote").map(|v| v.form), Some(VerbForm::Past));
        assert_eq!(verb("told").map(|v| v.form), Some(VerbForm::PastOrParticiple));
        assert_eq!(verb("read").map(|v| v.form), Some(VerbForm::Base));
        assert_eq!(verb("needs").map(|v| v.lemma), Some("need"));
        assert_eq!(verb("door"), None);
    }

    #[test]
    fn closed_class_lookup() {
        assert_eq!(closed_class("me").and_then(|e| e.lemma), Some("I"));
        assert_eq!(closed_class("'ll").map(|e| e.tag), Some("MD"));
        assert_eq!(closed_class("where").map(|e| e.tag), Some("WRB"));
        assert_eq!(closed_class("door"), None);
    }
}
