//! Text analysis module for textprep.
//!
//! This module provides the building blocks of the text pipeline: char
//! filters and the normalizer, the sentence splitter, tokenizers, token
//! filters (stop words and stemming), analyzers that chain them, and the
//! part-of-speech tagger.

pub mod analyzer;
pub mod char_filter;
pub mod dictionary;
pub mod normalizer;
pub mod pos;
pub mod sentence;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use normalizer::{Normalizer, SimpleNormalizer};
pub use pos::{LexiconTagger, PosTag, PosTagger};
pub use sentence::{SentenceSplitter, SimpleSentenceSplitter};
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::{SimpleTokenizer, Tokenizer};
