//! # textprep
//!
//! Text normalization and feature extraction for natural-language strings.
//!
//! ## Features
//!
//! - Unicode and typographic normalization
//! - Sentence splitting and Penn Treebank style tokenization
//! - Stop word filtering with built-in and custom dictionaries
//! - Porter stemming
//! - Bags of words and token sets
//! - Part-of-speech tagging
//! - Co-occurrence based keyword extraction
//!
//! ## Quick start
//!
//! ```
//! use textprep::prelude::*;
//!
//! let text = "The quick brown fox jumps over the lazy dog.";
//!
//! let bag = text.bag(&StopWordPolicy::Default, &IdentityStemmer).unwrap();
//! assert_eq!(bag.get("fox"), 1);
//! assert_eq!(bag.get("the"), 0);
//!
//! let tags = text.pos_tags().unwrap();
//! assert_eq!(tags[3], ("fox".to_string(), PosTag::NN));
//! ```

pub mod analysis;
pub mod bag;
pub mod config;
pub mod error;
pub mod keyword;
pub mod pipeline;
pub mod text;

pub mod prelude {
    pub use crate::analysis::pos::{PosTag, PosTagger};
    pub use crate::analysis::token::Token;
    pub use crate::analysis::token_filter::stem::{
        IdentityStemmer, PorterStemmer, Stemmer, StemmerKind,
    };
    pub use crate::analysis::token_filter::stop::StopWordPolicy;
    pub use crate::bag::{FrequencyBag, TokenSet};
    pub use crate::config::PipelineConfig;
    pub use crate::error::{Result, TextError};
    pub use crate::keyword::{Keyword, KeywordConfig, KeywordRanker};
    pub use crate::pipeline::TextPipeline;
    pub use crate::text::TextExt;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
