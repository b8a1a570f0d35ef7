//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first token-level step of the pipeline: they break a
//! sentence (or any string) into an ordered stream of [`Token`]s.
//!
//! # Available Tokenizers
//!
//! - [`simple::SimpleTokenizer`] - Rule based English tokenizer that keeps punctuation
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::tokenizer::Tokenizer;
//! use textprep::analysis::tokenizer::simple::SimpleTokenizer;
//!
//! let tokenizer = SimpleTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Hello", ",", "world", "!"]);
//! ```
//!
//! [`Token`]: crate::analysis::token::Token

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that a single tokenizer instance can be
/// shared by every caller of the pipeline.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use textprep::analysis::token::{Token, TokenStream};
/// use textprep::analysis::tokenizer::Tokenizer;
/// use textprep::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod simple;

pub use simple::SimpleTokenizer;
