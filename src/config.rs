//! Configuration for the text pipeline.
//!
//! All settings have defaults, so a configuration file only needs to name the
//! values it changes.
//!
//! # Example
//!
//! ```
//! use textprep::config::PipelineConfig;
//! use textprep::analysis::token_filter::stem::StemmerKind;
//! use textprep::analysis::token_filter::stop::StopWordPolicy;
//!
//! let config = PipelineConfig::from_json(
//!     r#"{ "policy": { "CUSTOM": "foo,bar" }, "stemmer": "identity" }"#,
//! ).unwrap();
//!
//! assert_eq!(config.policy, StopWordPolicy::custom("foo,bar"));
//! assert_eq!(config.stemmer, StemmerKind::Identity);
//! assert_eq!(config.keywords.max_ngram_size, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::StemmerKind;
use crate::analysis::token_filter::stop::StopWordPolicy;
use crate::error::Result;

pub use crate::keyword::KeywordConfig;

/// Configuration for [`TextPipeline`](crate::pipeline::TextPipeline).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Stop word policy used by the operations that do not take one explicitly
    pub policy: StopWordPolicy,
    /// Stemmer used by the operations that do not take one explicitly
    pub stemmer: StemmerKind,
    /// Keyword extraction settings
    pub keywords: KeywordConfig,
}

impl PipelineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every setting is in range.
    pub fn validate(&self) -> Result<()> {
        self.keywords.validate()
    }
}
