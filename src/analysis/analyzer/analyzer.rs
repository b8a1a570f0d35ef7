//! Core analyzer trait definition.
//!
//! Analyzers are the complete token-level pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Normalizer (optional)
//!             ↓
//!         Sentence Splitter (optional)
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use textprep::analysis::analyzer::Analyzer;
//! use textprep::analysis::token::{Token, TokenStream};
//! use textprep::error::Result;
//!
//! struct UppercaseAnalyzer;
//!
//! impl Analyzer for UppercaseAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .split_whitespace()
//!             .enumerate()
//!             .map(|(i, w)| Token::new(w.to_uppercase(), i))
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "uppercase"
//!     }
//! }
//!
//! let tokens: Vec<_> = UppercaseAnalyzer.analyze("a b").unwrap().collect();
//! assert_eq!(tokens[1].text, "B");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
