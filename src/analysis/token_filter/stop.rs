//! Stop word filtering.
//!
//! A [`StopWordPolicy`] names which words count as noise: one of the built-in
//! lists, no list at all, or a caller supplied comma separated list. The
//! [`StopFilter`] applies a policy to a token stream. Under every policy
//! except [`StopWordPolicy::None`] punctuation tokens are removed as well.
//!
//! Matching is done on the lowercased token against the word set, which is
//! used as given. Custom words are therefore matched exactly, so a custom list
//! should be written in lowercase.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token::tokens_from_words;
//! use textprep::analysis::token_filter::Filter;
//! use textprep::analysis::token_filter::stop::{StopFilter, StopWordPolicy};
//!
//! let policy: StopWordPolicy = "custom:foo,bar".parse().unwrap();
//! let filter = StopFilter::new(policy);
//! let tokens = tokens_from_words(["foo", "baz", "BAR", "!"]);
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(result, vec!["baz"]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::dictionary::{StopWordList, is_punctuation, stop_words};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TextError};

/// The names accepted by [`StopWordPolicy::from_str`].
pub const POLICY_NAMES: &[&str] = &["DEFAULT", "COMPREHENSIVE", "GOOGLE", "MYSQL", "NONE", "CUSTOM"];

/// A caller supplied stop word list.
///
/// The list is kept both as the original comma separated string and as the
/// parsed set. Entries are split on `,` and used verbatim: no trimming, no
/// case folding.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CustomStopWords {
    source: String,
    words: Arc<HashSet<String>>,
}

impl CustomStopWords {
    /// Parse a comma separated word list.
    pub fn new<S: Into<String>>(source: S) -> Self {
        let source = source.into();
        let words = source.split(',').map(str::to_string).collect();
        CustomStopWords {
            source,
            words: Arc::new(words),
        }
    }

    /// The comma separated list this set was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed word set.
    pub fn words(&self) -> &Arc<HashSet<String>> {
        &self.words
    }

    /// Check whether a word is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl PartialEq for CustomStopWords {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for CustomStopWords {}

impl From<String> for CustomStopWords {
    fn from(source: String) -> Self {
        CustomStopWords::new(source)
    }
}

impl From<CustomStopWords> for String {
    fn from(custom: CustomStopWords) -> Self {
        custom.source
    }
}

/// Which words a [`StopFilter`] removes.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StopWordPolicy {
    /// The classic English function word list.
    #[default]
    Default,
    /// A large list of English function and filler words.
    Comprehensive,
    /// The short list used by web search engines.
    Google,
    /// The MySQL full-text search list.
    MySql,
    /// Keep every token, including punctuation.
    None,
    /// A caller supplied list.
    Custom(CustomStopWords),
}

impl StopWordPolicy {
    /// Build a custom policy from a comma separated word list.
    pub fn custom<S: Into<String>>(words: S) -> Self {
        StopWordPolicy::Custom(CustomStopWords::new(words))
    }

    /// The uppercase name of this policy.
    pub fn name(&self) -> &'static str {
        match self {
            StopWordPolicy::Default => "DEFAULT",
            StopWordPolicy::Comprehensive => "COMPREHENSIVE",
            StopWordPolicy::Google => "GOOGLE",
            StopWordPolicy::MySql => "MYSQL",
            StopWordPolicy::None => "NONE",
            StopWordPolicy::Custom(_) => "CUSTOM",
        }
    }

    /// The word set this policy filters against, `None` for [`StopWordPolicy::None`].
    pub fn word_set(&self) -> Option<Arc<HashSet<String>>> {
        match self {
            StopWordPolicy::Default => Some(stop_words(StopWordList::Default)),
            StopWordPolicy::Comprehensive => Some(stop_words(StopWordList::Comprehensive)),
            StopWordPolicy::Google => Some(stop_words(StopWordList::Google)),
            StopWordPolicy::MySql => Some(stop_words(StopWordList::MySql)),
            StopWordPolicy::None => None,
            StopWordPolicy::Custom(custom) => Some(Arc::clone(custom.words())),
        }
    }
}

impl fmt::Display for StopWordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopWordPolicy::Custom(custom) => write!(f, "CUSTOM({})", custom.source()),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for StopWordPolicy {
    type Err = TextError;

    /// Parse a policy name, ignoring case. A custom list is written as
    /// `custom:word1,word2`; a bare `custom` is an empty list that still
    /// drops punctuation.
    fn from_str(s: &str) -> Result<Self> {
        if let Some((name, words)) = s.split_once(':')
            && name.eq_ignore_ascii_case("custom")
        {
            return Ok(StopWordPolicy::custom(words));
        }

        match s.to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(StopWordPolicy::Default),
            "COMPREHENSIVE" => Ok(StopWordPolicy::Comprehensive),
            "GOOGLE" => Ok(StopWordPolicy::Google),
            "MYSQL" => Ok(StopWordPolicy::MySql),
            "NONE" => Ok(StopWordPolicy::None),
            "CUSTOM" => Ok(StopWordPolicy::custom("")),
            _ => Err(TextError::unknown_policy(s, POLICY_NAMES)),
        }
    }
}

/// Filter that removes stop words and punctuation.
///
/// Surviving tokens keep their original case, text and relative order.
#[derive(Clone, Debug)]
pub struct StopFilter {
    policy: StopWordPolicy,
    words: Option<Arc<HashSet<String>>>,
}

impl StopFilter {
    /// Create a stop filter for the given policy.
    pub fn new(policy: StopWordPolicy) -> Self {
        let words = policy.word_set();
        StopFilter { policy, words }
    }

    /// The policy this filter applies.
    pub fn policy(&self) -> &StopWordPolicy {
        &self.policy
    }

    /// Check whether a token would be removed.
    pub fn is_stop(&self, token: &str) -> bool {
        match &self.words {
            Some(words) => words.contains(&token.to_lowercase()) || is_punctuation(token),
            None => false,
        }
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new(StopWordPolicy::Default)
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.words.is_none() {
            return Ok(tokens);
        }

        let filtered: Vec<Token> = tokens.filter(|t| !self.is_stop(&t.text)).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
