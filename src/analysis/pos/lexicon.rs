//! Rule-based English part-of-speech tagger.
//!
//! Tagging happens in two passes. The first pass assigns every token an
//! initial tag from, in order:
//!
//! 1. punctuation and symbol rules
//! 2. number rules (`42`, `3.14`, `twenty`)
//! 3. contraction clitics (`n't`, `'s`, `'ll` …)
//! 4. the built-in lexicon of closed-class words, auxiliaries, irregular
//!    verb forms, common adjectives and common base-form verbs
//! 5. capitalisation (a capitalised word inside a sentence is a proper noun)
//! 6. suffix heuristics (`-ing`, `-ly`, `-ous`, `-tion`, plural `-s` …)
//!
//! The second pass applies transformation rules that look at the
//! neighbouring tags, in the manner of a Brill tagger: a base verb after a
//! determiner becomes a noun, a plural noun whose base is a known verb
//! becomes `VBZ` after a subject, a past tense after an auxiliary becomes a
//! past participle, and so on.
//!
//! The tagger is deterministic and has no training data. Its accuracy is
//! adequate for feature extraction on ordinary English prose.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::pos::{LexiconTagger, PosTag, PosTagger};
//!
//! let tokens: Vec<String> = ["The", "dog", "barks", "."].iter().map(|s| s.to_string()).collect();
//! let tags = LexiconTagger::new().tag(&tokens).unwrap();
//!
//! assert_eq!(tags, vec![PosTag::DT, PosTag::NN, PosTag::VBZ, PosTag::Period]);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::{PosTag, PosTagger};
use crate::error::Result;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "all", "both", "either", "neither",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "upon", "about", "above",
    "across", "after", "against", "along", "among", "around", "before", "behind", "below",
    "beneath", "beside", "between", "beyond", "during", "except", "inside", "near", "off", "out",
    "outside", "over", "past", "since", "through", "throughout", "toward", "towards", "under",
    "underneath", "until", "unto", "within", "without", "via", "per", "like", "than", "because",
    "although", "though", "while", "whereas", "if", "unless", "whether", "as",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "plus", "&"];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs",
];

const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "its", "our", "their"];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought", "ca", "wo",
];

const ADVERBS: &[&str] = &[
    "not", "never", "also", "very", "too", "so", "just", "only", "even", "still", "already",
    "always", "often", "sometimes", "usually", "rarely", "quite", "rather", "almost", "soon",
    "now", "then", "here", "yet", "again", "ever", "perhaps", "maybe", "however", "therefore",
    "thus", "indeed", "really", "certainly", "probably", "away", "together", "else", "ago",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "hello", "hi", "uh", "um", "yes", "okay", "ok", "alas", "oops",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

/// Forms of be, have and do with their fixed tags.
const AUXILIARIES: &[(&str, PosTag)] = &[
    ("be", PosTag::VB),
    ("am", PosTag::VBP),
    ("are", PosTag::VBP),
    ("is", PosTag::VBZ),
    ("was", PosTag::VBD),
    ("were", PosTag::VBD),
    ("been", PosTag::VBN),
    ("being", PosTag::VBG),
    ("have", PosTag::VBP),
    ("has", PosTag::VBZ),
    ("had", PosTag::VBD),
    ("having", PosTag::VBG),
    ("do", PosTag::VBP),
    ("does", PosTag::VBZ),
    ("did", PosTag::VBD),
    ("done", PosTag::VBN),
    ("doing", PosTag::VBG),
];

const WH_WORDS: &[(&str, PosTag)] = &[
    ("which", PosTag::WDT),
    ("whatever", PosTag::WDT),
    ("whichever", PosTag::WDT),
    ("who", PosTag::WP),
    ("whom", PosTag::WP),
    ("what", PosTag::WP),
    ("whoever", PosTag::WP),
    ("whose", PosTag::WpDollar),
    ("when", PosTag::WRB),
    ("where", PosTag::WRB),
    ("why", PosTag::WRB),
    ("how", PosTag::WRB),
    ("whenever", PosTag::WRB),
    ("wherever", PosTag::WRB),
];

const SINGLE_TAGS: &[(&str, PosTag)] = &[
    ("to", PosTag::TO),
    ("there", PosTag::EX),
    ("more", PosTag::RBR),
    ("less", PosTag::RBR),
    ("most", PosTag::RBS),
    ("least", PosTag::RBS),
    ("such", PosTag::PDT),
    ("half", PosTag::PDT),
];

const IRREGULAR_PAST: &[&str] = &[
    "went", "came", "saw", "took", "gave", "made", "said", "got", "found", "knew", "thought",
    "told", "became", "left", "felt", "brought", "began", "kept", "held", "wrote", "stood",
    "heard", "meant", "met", "ran", "paid", "sat", "spoke", "led", "grew", "lost", "fell", "sent",
    "built", "understood", "drew", "broke", "spent", "rose", "drove", "bought", "wore", "chose",
    "ate", "drank", "flew", "forgot", "threw", "sang", "swam", "won", "caught", "taught",
    "fought", "slept", "sold", "struck", "hid", "rode", "stole", "woke",
];

const IRREGULAR_PARTICIPLES: &[&str] = &[
    "gone", "seen", "taken", "given", "known", "written", "shown", "begun", "broken", "chosen",
    "driven", "eaten", "fallen", "flown", "forgotten", "grown", "hidden", "ridden", "risen",
    "spoken", "stolen", "sworn", "thrown", "woken", "worn", "drawn",
];

const COMPARATIVES: &[&str] = &[
    "better", "worse", "bigger", "smaller", "larger", "greater", "higher", "lower", "older",
    "younger", "faster", "slower", "longer", "shorter", "easier", "harder", "stronger",
    "weaker", "richer", "poorer", "deeper", "wider", "earlier", "later", "newer", "simpler",
];

const SUPERLATIVES: &[&str] = &["best", "worst"];

const ADJECTIVES: &[&str] = &[
    "quick", "brown", "lazy", "good", "new", "old", "great", "big", "small", "large", "long",
    "short", "high", "low", "little", "own", "other", "same", "different", "important", "bad",
    "early", "young", "late", "hard", "easy", "strong", "real", "sure", "free", "full", "whole",
    "clear", "certain", "happy", "sad", "red", "blue", "green", "black", "white", "yellow",
    "dark", "bright", "hot", "cold", "warm", "cool", "deep", "wide", "simple", "true", "false",
    "fine", "nice", "beautiful", "open", "public", "private", "major", "local", "social",
    "political", "human", "national", "natural", "available", "possible", "recent", "special",
    "common", "general", "rich", "poor", "heavy", "light", "empty", "quiet", "loud", "safe",
    "slow", "fast", "clean", "dirty", "fresh", "ready", "main", "huge", "tiny", "many", "much",
    "few", "several", "next", "last", "first",
];

/// Common verbs in their base form.
const BASE_VERBS: &[&str] = &[
    "jump", "run", "walk", "go", "come", "see", "take", "make", "get", "give", "know", "think",
    "say", "tell", "find", "want", "use", "work", "call", "try", "ask", "need", "feel", "become",
    "leave", "put", "mean", "keep", "let", "begin", "seem", "help", "talk", "turn", "start",
    "show", "hear", "play", "move", "live", "believe", "hold", "bring", "happen", "write",
    "provide", "sit", "stand", "lose", "pay", "meet", "include", "continue", "set", "learn",
    "change", "lead", "understand", "watch", "follow", "stop", "create", "speak", "read",
    "allow", "add", "spend", "grow", "win", "offer", "remember", "love", "consider", "appear",
    "buy", "wait", "serve", "die", "send", "expect", "build", "stay", "fall", "cut", "reach",
    "kill", "remain", "suggest", "raise", "pass", "sell", "require", "report", "decide", "pull",
    "eat", "sleep", "swim", "fly", "drive", "bark", "chase", "climb", "cook", "dance", "drink",
    "sing", "smile", "study", "travel", "visit", "wash", "look", "like", "hope",
    "explain", "produce", "return", "describe", "measure", "compute", "extract", "split",
];

/// Words after which a past tense form is read as a past participle.
const PERFECT_OR_PASSIVE: &[&str] = &[
    "have", "has", "had", "having", "'ve", "be", "am", "is", "are", "was", "were", "been",
    "being", "'re", "'m", "get", "got", "gets",
];

/// Words whose following `'s` is "is" or "has" rather than a possessive.
const CONTRACTING: &[&str] = &["that", "this", "here", "there", "what", "who", "where", "how"];

/// Words that license an existential "there".
const BE_FORMS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "'s", "'re", "seem", "seems", "seemed", "exist",
    "exists", "existed", "remain", "remains", "remained", "appear", "appears", "appeared",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "al", "ic", "less", "ish", "ary",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ist", "er", "or",
    "hood", "dom", "age", "ure",
];

/// Words ending in -est that are not superlatives.
const EST_EXCEPTIONS: &[&str] = &[
    "test", "rest", "best", "interest", "forest", "guest", "west", "nest", "chest", "contest",
    "request", "harvest", "honest", "modest", "protest", "digest", "suggest", "invest",
    "arrest", "latest",
];

static LEXICON: LazyLock<HashMap<&'static str, PosTag>> = LazyLock::new(|| {
    let mut lexicon = HashMap::new();
    let groups: &[(&[&str], PosTag)] = &[
        (DETERMINERS, PosTag::DT),
        (PREPOSITIONS, PosTag::IN),
        (CONJUNCTIONS, PosTag::CC),
        (PRONOUNS, PosTag::PRP),
        (POSSESSIVE_PRONOUNS, PosTag::PrpDollar),
        (MODALS, PosTag::MD),
        (ADVERBS, PosTag::RB),
        (INTERJECTIONS, PosTag::UH),
        (NUMBER_WORDS, PosTag::CD),
    ];

    // The first group to claim a word wins.
    for (words, tag) in groups {
        for word in *words {
            lexicon.entry(*word).or_insert(*tag);
        }
    }
    for (word, tag) in AUXILIARIES.iter().chain(WH_WORDS).chain(SINGLE_TAGS) {
        lexicon.entry(*word).or_insert(*tag);
    }

    let open_classes: &[(&[&str], PosTag)] = &[
        (IRREGULAR_PAST, PosTag::VBD),
        (IRREGULAR_PARTICIPLES, PosTag::VBN),
        (COMPARATIVES, PosTag::JJR),
        (SUPERLATIVES, PosTag::JJS),
        (ADJECTIVES, PosTag::JJ),
        (BASE_VERBS, PosTag::VB),
    ];
    for (words, tag) in open_classes {
        for word in *words {
            lexicon.entry(*word).or_insert(*tag);
        }
    }
    lexicon
});

static VERBS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BASE_VERBS.iter().copied().collect());

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+(?:[.,:/]\d+)*(?:s|%)?$").expect("Number pattern should be valid")
});

/// Rule-based part-of-speech tagger backed by a built-in English lexicon.
#[derive(Clone, Debug, Default)]
pub struct LexiconTagger {
    /// Caller supplied entries, consulted before the built-in lexicon
    overrides: HashMap<String, PosTag>,
}

impl LexiconTagger {
    /// Create a tagger with the built-in lexicon only.
    pub fn new() -> Self {
        LexiconTagger::default()
    }

    /// Add lexicon entries that take precedence over the built-in ones.
    /// Words are matched case-insensitively.
    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PosTag)>,
        S: AsRef<str>,
    {
        self.overrides.extend(
            entries
                .into_iter()
                .map(|(word, tag)| (word.as_ref().to_lowercase(), tag)),
        );
        self
    }

    fn lookup(&self, lower: &str) -> Option<PosTag> {
        self.overrides
            .get(lower)
            .copied()
            .or_else(|| LEXICON.get(lower).copied())
    }

    fn initial_tag(&self, token: &str, sentence_start: bool, open_quote: &mut bool) -> PosTag {
        if let Some(tag) = punctuation_tag(token, open_quote) {
            return tag;
        }
        if NUMBER.is_match(token) {
            return PosTag::CD;
        }

        let lower = token.to_lowercase().replace('’', "'");
        if let Some(tag) = clitic_tag(&lower) {
            return tag;
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        let proper = capitalized && !sentence_start && lower != "i";

        match self.lookup(&lower) {
            Some(tag) if !(proper && is_open_class(tag)) => tag,
            _ if proper => PosTag::NNP,
            _ => suffix_tag(&lower),
        }
    }

    fn apply_context(&self, tokens: &[String], tags: &mut [PosTag]) {
        let lower: Vec<String> = tokens
            .iter()
            .map(|t| t.to_lowercase().replace('’', "'"))
            .collect();

        for i in 0..tags.len() {
            let prev = i.checked_sub(1).map(|p| tags[p]);
            let next = tags.get(i + 1).copied();
            let word = lower[i].as_str();
            // The closest preceding tag, skipping adverbs ("will not go").
            let governor = (0..i).rev().find(|&p| tags[p] != PosTag::RB);

            let tag = match (tags[i], word) {
                (PosTag::POS, "'s")
                    if prev.is_some_and(|p| {
                        matches!(p, PosTag::PRP | PosTag::EX | PosTag::WP | PosTag::WDT | PosTag::WRB)
                    }) || i.checked_sub(1).is_some_and(|p| CONTRACTING.contains(&lower[p].as_str())) =>
                {
                    PosTag::VBZ
                }
                (PosTag::EX, _)
                    if !(next == Some(PosTag::MD)
                        || lower.get(i + 1).is_some_and(|w| BE_FORMS.contains(&w.as_str()))) =>
                {
                    PosTag::RB
                }
                (PosTag::DT, "that") => match next {
                    Some(n) if n.is_verb() || n == PosTag::MD => PosTag::WDT,
                    Some(PosTag::DT | PosTag::PRP | PosTag::NNP | PosTag::EX) => PosTag::IN,
                    _ => PosTag::DT,
                },
                (PosTag::PRP, "her") if next.is_some_and(|n| n.is_noun() || n.is_adjective()) => {
                    PosTag::PrpDollar
                }
                (tag, _)
                    if governor.is_some_and(|g| matches!(tags[g], PosTag::TO | PosTag::MD))
                        && (tag == PosTag::VBP || (tag.is_noun() && VERBS.contains(word))) =>
                {
                    PosTag::VB
                }
                (PosTag::VB, _) => match prev {
                    Some(p) if takes_noun(p) => PosTag::NN,
                    Some(p) if is_subject(p) || matches!(p, PosTag::NNS | PosTag::NNPS) => {
                        PosTag::VBP
                    }
                    _ => PosTag::VB,
                },
                (PosTag::NNS, _)
                    if prev.is_some_and(is_subject) && verb_base(word).is_some() =>
                {
                    PosTag::VBZ
                }
                (PosTag::VBD, _)
                    if governor.is_some_and(|g| PERFECT_OR_PASSIVE.contains(&lower[g].as_str())) =>
                {
                    PosTag::VBN
                }
                (PosTag::VBD | PosTag::VBN, _)
                    if prev.is_some_and(|p| matches!(p, PosTag::DT | PosTag::PrpDollar)) =>
                {
                    PosTag::JJ
                }
                (tag, _) => tag,
            };
            tags[i] = tag;
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<PosTag>> {
        let mut open_quote = false;
        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());

        for token in tokens {
            let sentence_start = tags.last().is_none_or(|t| {
                matches!(t, PosTag::Period | PosTag::OpenQuote | PosTag::Colon)
            });
            tags.push(self.initial_tag(token, sentence_start, &mut open_quote));
        }

        self.apply_context(tokens, &mut tags);
        Ok(tags)
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

fn punctuation_tag(token: &str, open_quote: &mut bool) -> Option<PosTag> {
    let tag = match token {
        "." | "!" | "?" => PosTag::Period,
        "," => PosTag::Comma,
        ":" | ";" | "-" | "--" | "---" | "..." => PosTag::Colon,
        "(" | "[" | "{" => PosTag::LeftBracket,
        ")" | "]" | "}" => PosTag::RightBracket,
        "``" | "“" | "‘" => PosTag::OpenQuote,
        "''" | "”" | "'" | "’" => PosTag::CloseQuote,
        "\"" => {
            *open_quote = !*open_quote;
            if *open_quote {
                PosTag::OpenQuote
            } else {
                PosTag::CloseQuote
            }
        }
        "#" => PosTag::Pound,
        "$" | "€" | "£" | "¥" => PosTag::Dollar,
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_alphanumeric() => PosTag::SYM,
                _ => return None,
            }
        }
    };
    Some(tag)
}

fn clitic_tag(lower: &str) -> Option<PosTag> {
    match lower {
        "'s" => Some(PosTag::POS),
        "'re" | "'ve" | "'m" => Some(PosTag::VBP),
        "'ll" | "'d" => Some(PosTag::MD),
        "n't" => Some(PosTag::RB),
        _ => None,
    }
}

fn suffix_tag(lower: &str) -> PosTag {
    let len = lower.chars().count();
    let ends = |suffixes: &[&str]| suffixes.iter().any(|s| lower.ends_with(s));

    if lower.contains('-') && lower.chars().any(char::is_alphabetic) {
        PosTag::JJ
    } else if len > 4 && lower.ends_with("ing") {
        PosTag::VBG
    } else if len > 3 && lower.ends_with("ed") {
        PosTag::VBD
    } else if len > 3 && lower.ends_with("ly") {
        PosTag::RB
    } else if len > 5 && lower.ends_with("est") && !EST_EXCEPTIONS.contains(&lower) {
        PosTag::JJS
    } else if len > 4 && ends(ADJECTIVE_SUFFIXES) {
        PosTag::JJ
    } else if len > 4 && ends(NOUN_SUFFIXES) {
        PosTag::NN
    } else if len > 3 && lower.ends_with('s') && !ends(&["ss", "us", "is"]) {
        PosTag::NNS
    } else {
        PosTag::NN
    }
}

/// The base form of a known verb written with a third person `-s`.
fn verb_base(lower: &str) -> Option<String> {
    let candidates = [
        lower.strip_suffix("ies").map(|s| format!("{s}y")),
        lower.strip_suffix("es").map(str::to_string),
        lower.strip_suffix('s').map(str::to_string),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|base| VERBS.contains(base.as_str()))
}

fn is_open_class(tag: PosTag) -> bool {
    tag.is_noun() || tag.is_verb() || tag.is_adjective()
}

/// Tags that can be the subject of a finite verb.
fn is_subject(tag: PosTag) -> bool {
    matches!(
        tag,
        PosTag::NN | PosTag::NNP | PosTag::PRP | PosTag::WP | PosTag::WDT | PosTag::EX
    )
}

/// Tags after which a base verb form is read as a noun.
fn takes_noun(tag: PosTag) -> bool {
    matches!(
        tag,
        PosTag::DT
            | PosTag::PrpDollar
            | PosTag::JJ
            | PosTag::JJR
            | PosTag::JJS
            | PosTag::POS
            | PosTag::IN
            | PosTag::CD
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(text: &str) -> Vec<PosTag> {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        LexiconTagger::new().tag(&tokens).unwrap()
    }

    #[test]
    fn test_pangram() {
        use PosTag::*;
        assert_eq!(
            tag("The quick brown fox jumps over the lazy dog ."),
            vec![DT, JJ, JJ, NN, VBZ, IN, DT, JJ, NN, Period]
        );
    }

    #[test]
    fn test_punctuation_and_numbers() {
        use PosTag::*;
        assert_eq!(
            tag("( 3.14 , $ 1,000 # 5 % ) ; \" yes \""),
            vec![
                LeftBracket, CD, Comma, Dollar, CD, Pound, CD, SYM, RightBracket, Colon,
                OpenQuote, UH, CloseQuote
            ]
        );
        assert_eq!(tag("twenty cats"), vec![CD, NNS]);
    }

    #[test]
    fn test_clitics() {
        use PosTag::*;
        assert_eq!(tag("it 's John 's"), vec![PRP, VBZ, NNP, POS]);
        assert_eq!(tag("I do n't know"), vec![PRP, VBP, RB, VB]);
        assert_eq!(tag("we 'll see"), vec![PRP, MD, VB]);
    }

    #[test]
    fn test_modal_and_infinitive() {
        use PosTag::*;
        assert_eq!(tag("She will not go"), vec![PRP, MD, RB, VB]);
        assert_eq!(tag("I want to play"), vec![PRP, VBP, TO, VB]);
    }

    #[test]
    fn test_base_verb_as_noun() {
        use PosTag::*;
        assert_eq!(tag("They took a walk"), vec![PRP, VBD, DT, NN]);
        assert_eq!(tag("Dogs run"), vec![NNS, VBP]);
    }

    #[test]
    fn test_participles() {
        use PosTag::*;
        assert_eq!(tag("The window was broken"), vec![DT, NN, VBD, VBN]);
        assert_eq!(tag("He has visited Paris"), vec![PRP, VBZ, VBN, NNP]);
        assert_eq!(tag("the broken window"), vec![DT, JJ, NN]);
    }

    #[test]
    fn test_existential_there() {
        use PosTag::*;
        assert_eq!(tag("There is a cat"), vec![EX, VBZ, DT, NN]);
        assert_eq!(tag("Put it there"), vec![VB, PRP, RB]);
    }

    #[test]
    fn test_suffix_rules() {
        use PosTag::*;
        assert_eq!(
            tag("quickly dangerous happiness running largest well-known"),
            vec![RB, JJ, NN, VBG, JJS, JJ]
        );
    }

    #[test]
    fn test_proper_nouns() {
        use PosTag::*;
        assert_eq!(tag("I met Alice in Paris"), vec![PRP, VBD, NNP, IN, NNP]);
    }

    #[test]
    fn test_overrides() {
        let tokens = vec!["Rust".to_string(), "rocks".to_string()];
        let tagger = LexiconTagger::new().with_entries([("rocks", PosTag::VBZ)]);
        assert_eq!(tagger.tag(&tokens).unwrap(), vec![PosTag::NN, PosTag::VBZ]);
    }

    #[test]
    fn test_one_tag_per_token() {
        let tokens: Vec<String> = "a b c d e".split(' ').map(str::to_string).collect();
        assert_eq!(LexiconTagger::new().tag(&tokens).unwrap().len(), tokens.len());
        assert!(LexiconTagger::new().tag(&[]).unwrap().is_empty());
    }
}
