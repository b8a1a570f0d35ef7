use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TextError};

/// Control and format characters that are not whitespace.
pub const CONTROL_CHARS_PATTERN: &str = r"[\p{Cc}\p{Cf}&&\S]";

/// A char filter that replaces characters matching a regex pattern.
#[derive(Debug, Clone)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| TextError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// A filter that deletes control and format characters, keeping whitespace.
    pub fn strip_control() -> Result<Self> {
        Self::new(CONTROL_CHARS_PATTERN, "")
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_replace() {
        let filter = PatternReplaceCharFilter::new(r"\d+", "NUM").unwrap();
        assert_eq!(filter.filter("Year 2024"), "Year NUM");
    }

    #[test]
    fn test_remove_pattern() {
        let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
        assert_eq!(filter.filter("123-456-789"), "123456789");
    }

    #[test]
    fn test_strip_control() {
        let filter = PatternReplaceCharFilter::strip_control().unwrap();
        // zero width space, soft hyphen, BOM and BEL are removed; tab and newline stay
        assert_eq!(
            filter.filter("\u{feff}co\u{00ad}op\u{200b}\u{0007}\tend\n"),
            "coop\tend\n"
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternReplaceCharFilter::new("(unclosed", "").unwrap_err();
        assert!(matches!(err, TextError::Analysis(_)));
    }
}
