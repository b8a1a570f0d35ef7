//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, then terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! The rules are applied to the lowercased word. Words of two letters or
//! fewer, and words that contain anything other than ASCII letters, are
//! returned lowercased but otherwise unchanged.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token_filter::stem::Stemmer;
//! use textprep::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Short function words that step 1 would damage ("is" → "i").
const PARTICIPLE_EXCEPTIONS: &[&str] = &["is", "was", "has", "his", "this"];

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Apply only the first half of step 1: strip plurals and -ed/-ing.
    ///
    /// This is the light normalisation used for keyword extraction, where
    /// "models" and "model" should be one term but "general" and
    /// "generalization" should not.
    pub fn strip_plural_participle(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if PARTICIPLE_EXCEPTIONS.contains(&lower.as_str()) {
            return lower;
        }
        match Word::parse(&lower) {
            Some(mut w) => {
                w.step1ab();
                w.into_string()
            }
            None => lower,
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let Some(mut w) = Word::parse(&lower) else {
            return lower;
        };

        w.step1ab();
        if w.b.len() > 1 {
            w.step1c();
            w.replace_first(STEP2_RULES);
            w.replace_first(STEP3_RULES);
            w.step4();
            w.step5();
        }
        w.into_string()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Working buffer for one word.
///
/// `j` is the length of the stem left over by the last successful
/// [`Word::ends`] call; the measure is always computed over `b[..j]`.
struct Word {
    b: Vec<u8>,
    j: usize,
}

impl Word {
    fn parse(lower: &str) -> Option<Self> {
        if lower.len() <= 2 || !lower.bytes().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        Some(Word {
            b: lower.as_bytes().to_vec(),
            j: 0,
        })
    }

    fn into_string(self) -> String {
        self.b.into_iter().map(char::from).collect()
    }

    fn last(&self) -> Option<u8> {
        self.b.last().copied()
    }

    /// Whether `b[i]` is a consonant. `y` is a consonant at the start of a
    /// word or after a vowel.
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// The number of vowel-consonant sequences in the stem `b[..j]`.
    fn measure(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        let j = self.j;

        while i < j && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < j && !self.is_consonant(i) {
                i += 1;
            }
            if i >= j {
                return n;
            }
            while i < j && self.is_consonant(i) {
                i += 1;
            }
            n += 1;
            if i >= j {
                return n;
            }
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.j).any(|i| !self.is_consonant(i))
    }

    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// Consonant-vowel-consonant ending at `i`, where the final consonant is
    /// not w, x or y.
    fn cvc(&self, i: usize) -> bool {
        i >= 2
            && self.is_consonant(i)
            && !self.is_consonant(i - 1)
            && self.is_consonant(i - 2)
            && !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        if self.b.ends_with(suffix.as_bytes()) {
            self.j = self.b.len() - suffix.len();
            true
        } else {
            false
        }
    }

    fn set_to(&mut self, s: &str) {
        self.b.truncate(self.j);
        self.b.extend_from_slice(s.as_bytes());
    }

    /// Replace the first matching suffix, provided the stem has measure > 0.
    fn replace_first(&mut self, rules: &[(&str, &str)]) {
        if let Some(&(_, replacement)) = rules.iter().find(|(suffix, _)| self.ends(suffix))
            && self.measure() > 0
        {
            self.set_to(replacement);
        }
    }

    fn step1ab(&mut self) {
        if self.last() == Some(b's') {
            if self.ends("sses") {
                self.b.truncate(self.b.len() - 2);
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b[self.b.len() - 2] != b's' {
                self.b.pop();
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.b.pop();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.b.truncate(self.j);
            let k = self.b.len() - 1;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(k) {
                if !matches!(self.b[k], b'l' | b's' | b'z') {
                    self.b.pop();
                }
            } else if self.measure() == 1 && self.cvc(k) {
                self.b.push(b'e');
            }
        }
    }

    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let k = self.b.len() - 1;
            self.b[k] = b'i';
        }
    }

    fn step4(&mut self) {
        let Some(&suffix) = STEP4_SUFFIXES.iter().find(|s| self.ends(s)) else {
            return;
        };
        if suffix == "ion" && !(self.j >= 1 && matches!(self.b[self.j - 1], b's' | b't')) {
            return;
        }
        if self.measure() > 1 {
            self.b.truncate(self.j);
        }
    }

    fn step5(&mut self) {
        self.j = self.b.len();
        if self.last() == Some(b'e') {
            let m = self.measure();
            let k = self.b.len() - 1;
            if m > 1 || (m == 1 && !(k >= 1 && self.cvc(k - 1))) {
                self.b.pop();
            }
        }
        let k = self.b.len() - 1;
        if self.last() == Some(b'l') && self.double_consonant(k) && self.measure() > 1 {
            self.b.pop();
        }
    }
}
