//! Sentence splitting.
//!
//! [`SimpleSentenceSplitter`] uses the Unicode sentence boundary rules
//! (UAX #29), then re-joins pieces that were cut right after a well known
//! abbreviation such as `Mr.` or `e.g.`.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::sentence::{SentenceSplitter, SimpleSentenceSplitter};
//!
//! let splitter = SimpleSentenceSplitter::shared();
//! let sentences = splitter.split("Mr. Smith went home. He slept!");
//! assert_eq!(sentences, vec!["Mr. Smith went home.", "He slept!"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use unicode_segmentation::UnicodeSegmentation;

/// Lowercased abbreviations after which a full stop does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "capt.", "col.", "gen.",
    "gov.", "lt.", "sgt.", "rep.", "sen.", "rev.", "hon.", "messrs.", "vs.", "etc.", "e.g.",
    "i.e.", "cf.", "al.", "approx.", "dept.", "est.", "fig.", "inc.", "ltd.", "co.", "corp.",
    "no.", "vol.", "pp.", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.", "aug.", "sep.",
    "sept.", "oct.", "nov.", "dec.", "u.s.", "u.k.", "a.m.", "p.m.",
];

static SHARED: LazyLock<Arc<SimpleSentenceSplitter>> =
    LazyLock::new(|| Arc::new(SimpleSentenceSplitter::new()));

/// Trait for splitting text into an ordered sequence of sentences.
pub trait SentenceSplitter: Send + Sync {
    /// Split the text into sentences, in their original order.
    fn split(&self, text: &str) -> Vec<String>;

    /// Get the name of this splitter.
    fn name(&self) -> &'static str;
}

/// Rule based sentence splitter built on Unicode sentence boundaries.
#[derive(Clone, Debug)]
pub struct SimpleSentenceSplitter {
    abbreviations: HashSet<String>,
}

impl SimpleSentenceSplitter {
    /// Create a new splitter with the built-in English abbreviation list.
    pub fn new() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }

    /// Create a splitter with a custom abbreviation list (entries end with a full stop).
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SimpleSentenceSplitter {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The process-wide instance, built on first use.
    pub fn shared() -> Arc<SimpleSentenceSplitter> {
        Arc::clone(&SHARED)
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        sentence
            .split_whitespace()
            .last()
            .is_some_and(|word| self.abbreviations.contains(&word.to_lowercase()))
    }
}

impl Default for SimpleSentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter for SimpleSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();
        let mut joinable = false;

        for piece in text.split_sentence_bounds() {
            let piece = piece.trim();
            if piece.is_empty() {
                // A paragraph break always ends the current sentence.
                joinable = false;
                continue;
            }

            match sentences.last_mut() {
                Some(last) if joinable && self.ends_with_abbreviation(last) => {
                    last.push(' ');
                    last.push_str(piece);
                }
                _ => sentences.push(piece.to_string()),
            }
            joinable = true;
        }

        sentences
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
