use std::collections::HashMap;

use super::CharFilter;

/// Typographic characters and their plain ASCII replacements.
const TYPOGRAPHIC_MAPPING: &[(char, &str)] = &[
    ('\u{2018}', "'"),  // left single quotation mark
    ('\u{2019}', "'"),  // right single quotation mark
    ('\u{201a}', "'"),  // single low-9 quotation mark
    ('\u{201b}', "'"),  // single high-reversed-9 quotation mark
    ('\u{2032}', "'"),  // prime
    ('\u{201c}', "\""), // left double quotation mark
    ('\u{201d}', "\""), // right double quotation mark
    ('\u{201e}', "\""), // double low-9 quotation mark
    ('\u{201f}', "\""), // double high-reversed-9 quotation mark
    ('\u{00ab}', "\""), // left-pointing double angle quotation mark
    ('\u{00bb}', "\""), // right-pointing double angle quotation mark
    ('\u{2010}', "-"),  // hyphen
    ('\u{2011}', "-"),  // non-breaking hyphen
    ('\u{2012}', "-"),  // figure dash
    ('\u{2013}', "-"),  // en dash
    ('\u{2212}', "-"),  // minus sign
    ('\u{2014}', "--"), // em dash
    ('\u{2015}', "--"), // horizontal bar
];

/// A char filter that replaces single characters with strings.
#[derive(Debug, Clone)]
pub struct MappingCharFilter {
    mapping: HashMap<char, String>,
}

impl MappingCharFilter {
    pub fn new<I, S>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            mapping: mapping.into_iter().map(|(c, s)| (c, s.into())).collect(),
        }
    }

    /// Mapping of curly quotes and unicode dashes to their ASCII forms.
    pub fn typographic() -> Self {
        Self::new(TYPOGRAPHIC_MAPPING.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for c in input.chars() {
            match self.mapping.get(&c) {
                Some(replacement) => output.push_str(replacement),
                None => output.push(c),
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
