//! Rule based English tokenizer.
//!
//! The tokenizer works in two passes. A regular expression first extracts
//! candidate tokens:
//!
//! - `...` and runs of dashes (`--`) as single tokens
//! - numbers with inner separators (`3.14`, `1,000`)
//! - words, which may contain inner hyphens and apostrophes (`well-known`, `o'clock`)
//! - any other non-space character as a token of its own
//!
//! A second pass splits English contractions the way the Penn Treebank does:
//! `don't` becomes `do` + `n't` and `she'll` becomes `she` + `'ll`.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, TextError};

/// The default token pattern.
pub const DEFAULT_PATTERN: &str =
    r"\.\.\.|-{2,}|\d+(?:[.,]\d+)+|[\p{L}\p{M}\p{N}_]+(?:['’\-][\p{L}\p{M}\p{N}_]+)*|\S";

/// Clitics split off the end of a word, lowercased and without the apostrophe.
const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

static SHARED: LazyLock<Arc<SimpleTokenizer>> = LazyLock::new(|| {
    Arc::new(SimpleTokenizer::new().expect("Default token pattern should be valid"))
});

/// A regex-based tokenizer that keeps punctuation and splits contractions.
#[derive(Clone, Debug)]
pub struct SimpleTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to split English contractions
    split_contractions: bool,
}

impl SimpleTokenizer {
    /// Create a new tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TextError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(SimpleTokenizer {
            pattern: Arc::new(regex),
            split_contractions: true,
        })
    }

    /// The process-wide instance, built on first use.
    pub fn shared() -> Arc<SimpleTokenizer> {
        Arc::clone(&SHARED)
    }

    /// Set whether contractions are split into two tokens.
    pub fn split_contractions(mut self, split: bool) -> Self {
        self.split_contractions = split;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Byte index at which a contraction should be split, if the word is one.
    fn contraction_split(word: &str) -> Option<usize> {
        let (apostrophe, mark) = word
            .char_indices()
            .rev()
            .find(|&(_, c)| c == '\'' || c == '’')?;
        let clitic = &word[apostrophe + mark.len_utf8()..];

        if clitic.eq_ignore_ascii_case("t") {
            // "n't" keeps the n: do|n't, ca|n't
            let stem = &word[..apostrophe];
            return (stem.len() > 1 && stem.ends_with(['n', 'N'])).then(|| apostrophe - 1);
        }

        let known = CLITICS.iter().any(|c| clitic.eq_ignore_ascii_case(c));
        (known && apostrophe > 0).then_some(apostrophe)
    }
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for mat in self.pattern.find_iter(text) {
            let word = mat.as_str();
            let split = if self.split_contractions {
                Self::contraction_split(word)
            } else {
                None
            };

            match split {
                Some(at) => {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        &word[..at],
                        position,
                        mat.start(),
                        mat.start() + at,
                    ));
                    tokens.push(Token::with_offsets(
                        &word[at..],
                        position + 1,
                        mat.start() + at,
                        mat.end(),
                    ));
                }
                None => {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(word, position, mat.start(), mat.end()));
                }
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
