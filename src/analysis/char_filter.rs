//! Char filter implementations for text normalization.
//!
//! Char filters pre-process a whole string before it is split into sentences
//! or tokens. The [`SimpleNormalizer`](crate::analysis::normalizer::SimpleNormalizer)
//! is a fixed chain of these filters.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//! - [`mapping::MappingCharFilter`] - Character to string mapping
//! - [`whitespace::WhitespaceCharFilter`] - Whitespace collapsing with paragraph breaks
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::char_filter::CharFilter;
//! use textprep::analysis::char_filter::mapping::MappingCharFilter;
//!
//! let filter = MappingCharFilter::typographic();
//! assert_eq!(filter.filter("\u{201c}quoted\u{201d}"), "\"quoted\"");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
pub mod pattern_replace;
pub mod unicode_normalize;
pub mod whitespace;
