use regex::{Captures, Regex};

use super::CharFilter;
use crate::error::{Result, TextError};

/// Paragraph separator emitted for whitespace runs that contain a blank line.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// A char filter that collapses whitespace.
///
/// Every run of whitespace becomes a single space, except runs holding two or
/// more line feeds, which become [`PARAGRAPH_BREAK`]. Leading and trailing
/// whitespace is removed.
#[derive(Debug, Clone)]
pub struct WhitespaceCharFilter {
    runs: Regex,
}

impl WhitespaceCharFilter {
    pub fn new() -> Result<Self> {
        let runs = Regex::new(r"\s+")
            .map_err(|e| TextError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self { runs })
    }
}

impl CharFilter for WhitespaceCharFilter {
    fn filter(&self, input: &str) -> String {
        let collapsed = self.runs.replace_all(input.trim(), |caps: &Captures| {
            if caps[0].matches('\n').count() >= 2 {
                PARAGRAPH_BREAK
            } else {
                " "
            }
        });
        collapsed.into_owned()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
