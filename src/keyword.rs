//! Keyword extraction.
//!
//! - [`KeywordRanker`] - the ranker trait
//! - [`cooccurrence::CooccurrenceKeywords`] - the default co-occurrence based ranker
//! - [`ngram::NGram`] - candidate phrases
//!
//! # Examples
//!
//! ```
//! use textprep::keyword::{KeywordConfig, KeywordRanker};
//! use textprep::keyword::cooccurrence::CooccurrenceKeywords;
//!
//! let ranker = CooccurrenceKeywords::with_config(KeywordConfig {
//!     min_frequency: 2,
//!     ..KeywordConfig::default()
//! });
//! let text = "Rust is fast. Rust is safe. Fast code and safe code.";
//! let keywords = ranker.rank(text, 3).unwrap();
//!
//! assert!(keywords.len() <= 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextError};

pub mod cooccurrence;
pub mod ngram;

pub use cooccurrence::CooccurrenceKeywords;
pub use ngram::NGram;

/// A ranked keyword phrase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The phrase and its frequency
    pub ngram: NGram,
    /// Higher is more relevant
    pub score: f64,
}

impl Keyword {
    pub fn new(ngram: NGram, score: f64) -> Self {
        Keyword { ngram, score }
    }

    /// The phrase as a space separated string.
    pub fn text(&self) -> String {
        self.ngram.to_string()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3})", self.ngram, self.score)
    }
}

/// Trait for keyword rankers.
pub trait KeywordRanker: Send + Sync {
    /// Return at most `k` keywords of `text`, most relevant first.
    fn rank(&self, text: &str, k: usize) -> Result<Vec<Keyword>>;

    /// Get the name of this ranker.
    fn name(&self) -> &'static str;
}

/// Configuration for [`CooccurrenceKeywords`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Longest phrase considered, in words
    pub max_ngram_size: usize,
    /// Occurrences needed before a phrase is a candidate
    pub min_frequency: usize,
    /// Fraction of candidates, by frequency, that serve as frequent terms
    pub frequent_ratio: f64,
    /// Jaccard coefficient at which two frequent terms share a cluster
    pub cluster_threshold: f64,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        KeywordConfig {
            max_ngram_size: 4,
            min_frequency: 4,
            frequent_ratio: 0.3,
            cluster_threshold: 0.25,
        }
    }
}

impl KeywordConfig {
    /// Check that every setting is in range.
    pub fn validate(&self) -> Result<()> {
        if self.max_ngram_size == 0 {
            return Err(TextError::invalid_config("max_ngram_size must be positive"));
        }
        if self.min_frequency == 0 {
            return Err(TextError::invalid_config("min_frequency must be positive"));
        }
        if !(self.frequent_ratio > 0.0 && self.frequent_ratio <= 1.0) {
            return Err(TextError::invalid_config(
                "frequent_ratio must be in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.cluster_threshold) {
            return Err(TextError::invalid_config(
                "cluster_threshold must be in [0, 1]",
            ));
        }
        Ok(())
    }
}
