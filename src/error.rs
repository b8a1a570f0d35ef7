//! Error types for the textprep library.
//!
//! All errors are represented by the [`TextError`] enum. The only error the
//! pipeline raises on its own is [`TextError::UnknownPolicy`]; everything else
//! is a failure reported by a collaborator (tokenizer, tagger, keyword ranker)
//! and is passed through to the caller unchanged.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token_filter::stop::StopWordPolicy;
//! use textprep::error::TextError;
//!
//! let err = "SHOUTING".parse::<StopWordPolicy>().unwrap_err();
//! assert!(matches!(err, TextError::UnknownPolicy { .. }));
//! ```

use thiserror::Error;

/// The main error type for textprep operations.
#[derive(Error, Debug)]
pub enum TextError {
    /// A stop-word policy name that is not one of the known variants.
    #[error("Filter {name} is not known. Please use {valid}")]
    UnknownPolicy {
        /// The rejected policy name.
        name: String,
        /// Comma separated list of the accepted names.
        valid: String,
    },

    /// The POS tagger returned a tag sequence that does not line up with its input.
    #[error("Tagger defect: expected {expected} tags, got {actual}")]
    TaggerDefect { expected: usize, actual: usize },

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TextError.
pub type Result<T> = std::result::Result<T, TextError>;

impl TextError {
    /// Create a new unknown policy error listing the accepted policy names.
    pub fn unknown_policy<S: Into<String>>(name: S, valid: &[&str]) -> Self {
        TextError::UnknownPolicy {
            name: name.into(),
            valid: valid.join(", "),
        }
    }

    /// Create a new tagger defect error.
    pub fn tagger_defect(expected: usize, actual: usize) -> Self {
        TextError::TaggerDefect { expected, actual }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TextError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = TextError::invalid_config("max_ngram_size must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: max_ngram_size must be positive"
        );

        let error = TextError::tagger_defect(3, 2);
        assert_eq!(error.to_string(), "Tagger defect: expected 3 tags, got 2");
    }

    #[test]
    fn test_unknown_policy_message() {
        let error = TextError::unknown_policy("LOUD", &["DEFAULT", "NONE"]);
        assert_eq!(
            error.to_string(),
            "Filter LOUD is not known. Please use DEFAULT, NONE"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = TextError::from(json_error);

        match error {
            TextError::Json(_) => {} // Expected
            _ => panic!("Expected JSON error variant"),
        }
    }
}
