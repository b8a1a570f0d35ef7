//! Token filter implementations for token transformation.
//!
//! Filters transform token streams produced by tokenizers. They can modify,
//! remove, or add tokens.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words and punctuation according to a [`stop::StopWordPolicy`]
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token::{Token, tokens_from_words};
//! use textprep::analysis::token_filter::Filter;
//! use textprep::analysis::token_filter::stop::{StopFilter, StopWordPolicy};
//!
//! let filter = StopFilter::new(StopWordPolicy::Default);
//! let tokens = tokens_from_words(["The", "cat", "sat", "."]);
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(filtered, vec!["cat", "sat"]);
//! ```
//!
//! # Filter Chaining
//!
//! Filters are chained in a [`PipelineAnalyzer`](crate::analysis::analyzer::pipeline::PipelineAnalyzer):
//!
//! ```text
//! Tokenizer → Stop Words
//! ```
//!
//! The [`stem`] module holds the stemmers that
//! [`TextPipeline::bag`](crate::pipeline::TextPipeline::bag) applies to the filtered tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream. The trait
/// requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use textprep::analysis::token::{Token, TokenStream};
/// use textprep::analysis::token_filter::Filter;
/// use textprep::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stem;
pub mod stop;
