use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizationForm {
    NFC,
    NFD,
    #[default]
    NFKC,
    NFKD,
}

/// A char filter that performs Unicode normalization.
#[derive(Debug, Clone, Default)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.form {
            NormalizationForm::NFC => input.nfc().collect(),
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFC);
        // "Amélie" where 'é' is decomposed (U+0065 U+0301)
        let output = filter.filter("Am\u{0065}\u{0301}lie");
        assert_eq!(output, "Am\u{00e9}lie");
    }

    #[test]
    fn test_nfkc_normalization() {
        let filter = UnicodeNormalizationCharFilter::default();
        // Fullwidth "Ａ" to halfwidth "A"
        assert_eq!(filter.filter("\u{ff21}"), "A");
        // Horizontal ellipsis expands to three full stops
        assert_eq!(filter.filter("wait\u{2026}"), "wait...");
        // Ligature "ﬁ" splits into "fi"
        assert_eq!(filter.filter("\u{fb01}ne"), "fine");
    }
}
