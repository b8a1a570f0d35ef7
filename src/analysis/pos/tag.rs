//! The Penn Treebank part-of-speech tag set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextError};

/// A Penn Treebank part-of-speech tag.
///
/// The 36 word tags plus the punctuation and symbol tags used by the
/// Treebank. Tags serialize as their Treebank spelling (`NN`, `PRP$`, `-LRB-`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[allow(clippy::upper_case_acronyms)]
pub enum PosTag {
    /// Coordinating conjunction
    CC,
    /// Cardinal number
    CD,
    /// Determiner
    DT,
    /// Existential there
    EX,
    /// Foreign word
    FW,
    /// Preposition or subordinating conjunction
    IN,
    /// Adjective
    JJ,
    /// Adjective, comparative
    JJR,
    /// Adjective, superlative
    JJS,
    /// List item marker
    LS,
    /// Modal
    MD,
    /// Noun, singular or mass
    NN,
    /// Noun, plural
    NNS,
    /// Proper noun, singular
    NNP,
    /// Proper noun, plural
    NNPS,
    /// Predeterminer
    PDT,
    /// Possessive ending
    POS,
    /// Personal pronoun
    PRP,
    /// Possessive pronoun (`PRP$`)
    PrpDollar,
    /// Adverb
    RB,
    /// Adverb, comparative
    RBR,
    /// Adverb, superlative
    RBS,
    /// Particle
    RP,
    /// Symbol
    SYM,
    /// to
    TO,
    /// Interjection
    UH,
    /// Verb, base form
    VB,
    /// Verb, past tense
    VBD,
    /// Verb, gerund or present participle
    VBG,
    /// Verb, past participle
    VBN,
    /// Verb, non-3rd person singular present
    VBP,
    /// Verb, 3rd person singular present
    VBZ,
    /// Wh-determiner
    WDT,
    /// Wh-pronoun
    WP,
    /// Possessive wh-pronoun (`WP$`)
    WpDollar,
    /// Wh-adverb
    WRB,
    /// `#`
    Pound,
    /// `$`
    Dollar,
    /// Sentence-final punctuation (`.`)
    Period,
    /// `,`
    Comma,
    /// Mid-sentence punctuation (`:`)
    Colon,
    /// `-LRB-`
    LeftBracket,
    /// `-RRB-`
    RightBracket,
    /// Opening quotation mark (` `` `)
    OpenQuote,
    /// Closing quotation mark (`''`)
    CloseQuote,
}

const ALL_TAGS: &[PosTag] = &[
    PosTag::CC,
    PosTag::CD,
    PosTag::DT,
    PosTag::EX,
    PosTag::FW,
    PosTag::IN,
    PosTag::JJ,
    PosTag::JJR,
    PosTag::JJS,
    PosTag::LS,
    PosTag::MD,
    PosTag::NN,
    PosTag::NNS,
    PosTag::NNP,
    PosTag::NNPS,
    PosTag::PDT,
    PosTag::POS,
    PosTag::PRP,
    PosTag::PrpDollar,
    PosTag::RB,
    PosTag::RBR,
    PosTag::RBS,
    PosTag::RP,
    PosTag::SYM,
    PosTag::TO,
    PosTag::UH,
    PosTag::VB,
    PosTag::VBD,
    PosTag::VBG,
    PosTag::VBN,
    PosTag::VBP,
    PosTag::VBZ,
    PosTag::WDT,
    PosTag::WP,
    PosTag::WpDollar,
    PosTag::WRB,
    PosTag::Pound,
    PosTag::Dollar,
    PosTag::Period,
    PosTag::Comma,
    PosTag::Colon,
    PosTag::LeftBracket,
    PosTag::RightBracket,
    PosTag::OpenQuote,
    PosTag::CloseQuote,
];

impl PosTag {
    /// Every tag, in Treebank order.
    pub fn all() -> &'static [PosTag] {
        ALL_TAGS
    }

    /// The Treebank spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::CC => "CC",
            PosTag::CD => "CD",
            PosTag::DT => "DT",
            PosTag::EX => "EX",
            PosTag::FW => "FW",
            PosTag::IN => "IN",
            PosTag::JJ => "JJ",
            PosTag::JJR => "JJR",
            PosTag::JJS => "JJS",
            PosTag::LS => "LS",
            PosTag::MD => "MD",
            PosTag::NN => "NN",
            PosTag::NNS => "NNS",
            PosTag::NNP => "NNP",
            PosTag::NNPS => "NNPS",
            PosTag::PDT => "PDT",
            PosTag::POS => "POS",
            PosTag::PRP => "PRP",
            PosTag::PrpDollar => "PRP$",
            PosTag::RB => "RB",
            PosTag::RBR => "RBR",
            PosTag::RBS => "RBS",
            PosTag::RP => "RP",
            PosTag::SYM => "SYM",
            PosTag::TO => "TO",
            PosTag::UH => "UH",
            PosTag::VB => "VB",
            PosTag::VBD => "VBD",
            PosTag::VBG => "VBG",
            PosTag::VBN => "VBN",
            PosTag::VBP => "VBP",
            PosTag::VBZ => "VBZ",
            PosTag::WDT => "WDT",
            PosTag::WP => "WP",
            PosTag::WpDollar => "WP$",
            PosTag::WRB => "WRB",
            PosTag::Pound => "#",
            PosTag::Dollar => "$",
            PosTag::Period => ".",
            PosTag::Comma => ",",
            PosTag::Colon => ":",
            PosTag::LeftBracket => "-LRB-",
            PosTag::RightBracket => "-RRB-",
            PosTag::OpenQuote => "``",
            PosTag::CloseQuote => "''",
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::NN | PosTag::NNS | PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_proper_noun(&self) -> bool {
        matches!(self, PosTag::NNP | PosTag::NNPS)
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VB | PosTag::VBD | PosTag::VBG | PosTag::VBN | PosTag::VBP | PosTag::VBZ
        )
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::JJ | PosTag::JJR | PosTag::JJS)
    }

    pub fn is_adverb(&self) -> bool {
        matches!(self, PosTag::RB | PosTag::RBR | PosTag::RBS | PosTag::WRB)
    }

    pub fn is_pronoun(&self) -> bool {
        matches!(
            self,
            PosTag::PRP | PosTag::PrpDollar | PosTag::WP | PosTag::WpDollar
        )
    }

    /// Whether this is one of the punctuation tags.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            PosTag::Period
                | PosTag::Comma
                | PosTag::Colon
                | PosTag::LeftBracket
                | PosTag::RightBracket
                | PosTag::OpenQuote
                | PosTag::CloseQuote
        )
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        ALL_TAGS
            .iter()
            .find(|tag| tag.as_str() == s)
            .copied()
            .ok_or_else(|| TextError::analysis(format!("unknown POS tag: {s}")))
    }
}

impl TryFrom<String> for PosTag {
    type Error = TextError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<PosTag> for &'static str {
    fn from(tag: PosTag) -> Self {
        tag.as_str()
    }
}
