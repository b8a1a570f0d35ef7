//! Analyzers combine a tokenizer with text preparation and token filters.
//!
//! - [`analyzer::Analyzer`] - the analyzer trait
//! - [`pipeline::PipelineAnalyzer`] - normalizer + sentence splitter + tokenizer + filter chain

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
