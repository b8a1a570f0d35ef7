//! Pipeline analyzer that combines text preparation, a tokenizer and filters.
//!
//! # Architecture
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Normalizer: canonicalizes raw text (optional)
//! 2. Sentence splitter: cuts the text into sentences (optional)
//! 3. Tokenizer: splits each sentence into tokens
//! 4. Token Filters: applied to each sentence in the order they were added
//!
//! Token offsets are relative to the sentence they came from.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use textprep::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use textprep::analysis::sentence::SimpleSentenceSplitter;
//! use textprep::analysis::token_filter::stop::{StopFilter, StopWordPolicy};
//! use textprep::analysis::tokenizer::SimpleTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(SimpleTokenizer::shared())
//!     .with_sentence_splitter(SimpleSentenceSplitter::shared())
//!     .add_filter(Arc::new(StopFilter::new(StopWordPolicy::Default)))
//!     .with_name("english_words");
//!
//! let sentences = analyzer.analyze_sentences("The cat sat. It purred!").unwrap();
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[1][0].text, "purred");
//!
//! let tokens: Vec<_> = analyzer.analyze("The cat sat. It purred!").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].position, 2);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::sentence::SentenceSplitter;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    normalizer: Option<Arc<dyn Normalizer>>,
    sentence_splitter: Option<Arc<dyn SentenceSplitter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            normalizer: None,
            sentence_splitter: None,
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Normalize the text before anything else.
    pub fn with_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Split the text into sentences before tokenizing.
    pub fn with_sentence_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.sentence_splitter = Some(splitter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Get the name of this analyzer.
    pub fn analyzer_name(&self) -> &str {
        &self.name
    }

    /// Run the pipeline and keep the tokens grouped by sentence.
    ///
    /// Without a sentence splitter the whole (normalized) text is one
    /// sentence. Empty text yields no sentences.
    pub fn analyze_sentences(&self, text: &str) -> Result<Vec<Vec<Token>>> {
        let normalized = match &self.normalizer {
            Some(normalizer) => normalizer.normalize(text),
            None => text.to_string(),
        };

        let sentences = match &self.sentence_splitter {
            Some(splitter) => splitter.split(&normalized),
            None if normalized.is_empty() => Vec::new(),
            None => vec![normalized],
        };

        let mut result = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            let mut tokens = self.tokenizer.tokenize(sentence)?;
            for filter in &self.filters {
                tokens = filter.filter(tokens)?;
            }
            result.push(tokens.collect::<Vec<_>>());
        }

        trace!(
            analyzer = %self.name,
            sentences = result.len(),
            tokens = result.iter().map(Vec::len).sum::<usize>(),
            "analyzed text"
        );
        Ok(result)
    }
}

impl Analyzer for PipelineAnalyzer {
    /// Analyze the text as one stream; positions are renumbered across sentences.
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .analyze_sentences(text)?
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(position, mut token)| {
                token.position = position;
                token
            })
            .collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("normalizer", &self.normalizer.as_ref().map(|n| n.name()))
            .field(
                "sentence_splitter",
                &self.sentence_splitter.as_ref().map(|s| s.name()),
            )
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
