//! Stemmer implementations and the configuration names that select them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextError};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod porter;

pub use porter::PorterStemmer;

/// A stemmer that leaves every word as it is.
///
/// Use it to switch stemming off wherever a [`Stemmer`] is required.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// The built-in stemmers, as named in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    #[default]
    Porter,
    Identity,
}

impl StemmerKind {
    /// Build a shared instance of this stemmer.
    pub fn build(self) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Arc::new(PorterStemmer::new()),
            StemmerKind::Identity => Arc::new(IdentityStemmer::new()),
        }
    }
}

impl fmt::Display for StemmerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StemmerKind::Porter => f.write_str("porter"),
            StemmerKind::Identity => f.write_str("identity"),
        }
    }
}

impl FromStr for StemmerKind {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "porter" => Ok(StemmerKind::Porter),
            "identity" | "none" => Ok(StemmerKind::Identity),
            _ => Err(TextError::invalid_config(format!("unknown stemmer: {s}"))),
        }
    }
}
