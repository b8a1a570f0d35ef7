//! Part-of-speech tagging.
//!
//! - [`PosTag`] - the Penn Treebank tag set
//! - [`PosTagger`] - the tagger trait
//! - [`LexiconTagger`] - the default rule-based tagger

pub mod lexicon;
pub mod tag;

pub use lexicon::LexiconTagger;
pub use tag::PosTag;

use crate::error::{Result, TextError};

/// Trait for part-of-speech taggers.
///
/// A tagger must return exactly one tag per input token, in input order.
pub trait PosTagger: Send + Sync {
    /// Tag a sequence of tokens.
    fn tag(&self, tokens: &[String]) -> Result<Vec<PosTag>>;

    /// Get the name of this tagger.
    fn name(&self) -> &'static str;
}

/// Pair every token with its tag.
///
/// Fails with [`TextError::TaggerDefect`] when the tagger broke its
/// one-tag-per-token contract.
pub fn zip_tags(tokens: Vec<String>, tags: Vec<PosTag>) -> Result<Vec<(String, PosTag)>> {
    if tokens.len() != tags.len() {
        return Err(TextError::tagger_defect(tokens.len(), tags.len()));
    }
    Ok(tokens.into_iter().zip(tags).collect())
}
