//! Text normalization applied before sentence splitting.
//!
//! [`SimpleNormalizer`] is a fixed chain of char filters:
//!
//! ```text
//! strip control chars → NFKC → typographic mapping → whitespace collapse
//! ```
//!
//! Control characters are removed first so that NFKC sees the final sequence
//! of code points; running the normalizer twice gives the same result as
//! running it once.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::normalizer::{Normalizer, SimpleNormalizer};
//!
//! let normalizer = SimpleNormalizer::shared();
//! assert_eq!(
//!     normalizer.normalize("  \u{201c}Caf\u{0065}\u{0301}\u{201d}\u{2014}open  "),
//!     "\"Caf\u{00e9}\"--open"
//! );
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::char_filter::whitespace::WhitespaceCharFilter;
use crate::error::Result;

/// Trait for normalizers that canonicalize raw text.
pub trait Normalizer: Send + Sync {
    /// Normalize the given text.
    fn normalize(&self, text: &str) -> String;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

static SHARED: LazyLock<Arc<SimpleNormalizer>> = LazyLock::new(|| {
    Arc::new(SimpleNormalizer::new().expect("built-in normalizer patterns should be valid"))
});

/// The default normalizer: unicode, punctuation and whitespace canonicalization.
pub struct SimpleNormalizer {
    char_filters: Vec<Box<dyn CharFilter>>,
}

impl SimpleNormalizer {
    /// Create a new normalizer with the standard filter chain.
    pub fn new() -> Result<Self> {
        let char_filters: Vec<Box<dyn CharFilter>> = vec![
            Box::new(PatternReplaceCharFilter::strip_control()?),
            Box::new(UnicodeNormalizationCharFilter::new(NormalizationForm::NFKC)),
            Box::new(MappingCharFilter::typographic()),
            Box::new(WhitespaceCharFilter::new()?),
        ];
        Ok(SimpleNormalizer { char_filters })
    }

    /// The process-wide instance, built on first use.
    pub fn shared() -> Arc<SimpleNormalizer> {
        Arc::clone(&SHARED)
    }

    /// Names of the char filters in application order.
    pub fn char_filter_names(&self) -> Vec<&'static str> {
        self.char_filters.iter().map(|f| f.name()).collect()
    }
}

impl Normalizer for SimpleNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc))
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

impl std::fmt::Debug for SimpleNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleNormalizer")
            .field("char_filters", &self.char_filter_names())
            .finish()
    }
}
