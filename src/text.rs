//! String-level operations backed by the global [`TextPipeline`].
//!
//! The free functions and the [`TextExt`] methods are the same operations; use
//! whichever reads better at the call site. For custom collaborators build a
//! [`TextPipeline`] and call it directly.
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token_filter::stop::StopWordPolicy;
//! use textprep::text::TextExt;
//!
//! let text = "Dogs bark. The dog barked loudly!";
//!
//! assert_eq!(text.sentences(), vec!["Dogs bark.", "The dog barked loudly!"]);
//! assert_eq!(text.words(&StopWordPolicy::Default).unwrap(), vec!["Dogs", "bark", "dog", "barked", "loudly"]);
//!
//! let bag = text.bag_of_words().unwrap();
//! assert_eq!(bag.get("dog"), 2);
//! assert_eq!(bag.get("bark"), 2);
//! ```

use crate::analysis::pos::PosTag;
use crate::analysis::token::Token;
use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stop::StopWordPolicy;
use crate::bag::{FrequencyBag, TokenSet};
use crate::error::Result;
use crate::keyword::Keyword;
use crate::pipeline::TextPipeline;

/// Number of keywords returned by [`TextExt::top_keywords`].
pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Canonicalize raw text.
pub fn normalize(text: &str) -> String {
    TextPipeline::global().normalize(text)
}

/// Split text into sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    TextPipeline::global().split_sentences(text)
}

/// Split text into tokens.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    TextPipeline::global().tokenize(text)
}

/// Tokenize and remove stop words and punctuation.
pub fn words(text: &str, policy: &StopWordPolicy) -> Result<Vec<String>> {
    TextPipeline::global().words(text, policy)
}

/// Count filtered, stemmed, lowercased tokens.
pub fn bag(text: &str, policy: &StopWordPolicy, stemmer: &dyn Stemmer) -> Result<FrequencyBag> {
    TextPipeline::global().bag(text, policy, stemmer)
}

/// Distinct filtered, stemmed, lowercased tokens under the default stop word list.
pub fn bag_as_set(text: &str, stemmer: &dyn Stemmer) -> Result<TokenSet> {
    TextPipeline::global().bag_as_set(text, stemmer)
}

/// Tag every token with its part of speech.
pub fn pos_tag(text: &str) -> Result<Vec<(String, PosTag)>> {
    TextPipeline::global().pos_tag(text)
}

/// The `k` most relevant keywords.
pub fn keywords(text: &str, k: usize) -> Result<Vec<Keyword>> {
    TextPipeline::global().keywords(text, k)
}

/// Text operations as methods on string slices.
pub trait TextExt {
    fn normalized(&self) -> String;

    fn sentences(&self) -> Vec<String>;

    fn tokens(&self) -> Result<Vec<Token>>;

    fn words(&self, policy: &StopWordPolicy) -> Result<Vec<String>>;

    fn bag(&self, policy: &StopWordPolicy, stemmer: &dyn Stemmer) -> Result<FrequencyBag>;

    /// Frequency bag with the default policy and Porter stemming.
    fn bag_of_words(&self) -> Result<FrequencyBag>;

    fn bag_as_set(&self, stemmer: &dyn Stemmer) -> Result<TokenSet>;

    fn pos_tags(&self) -> Result<Vec<(String, PosTag)>>;

    fn keywords(&self, k: usize) -> Result<Vec<Keyword>>;

    /// The [`DEFAULT_KEYWORD_COUNT`] most relevant keywords.
    fn top_keywords(&self) -> Result<Vec<Keyword>> {
        self.keywords(DEFAULT_KEYWORD_COUNT)
    }
}

impl TextExt for str {
    fn normalized(&self) -> String {
        normalize(self)
    }

    fn sentences(&self) -> Vec<String> {
        split_sentences(self)
    }

    fn tokens(&self) -> Result<Vec<Token>> {
        tokenize(self)
    }

    fn words(&self, policy: &StopWordPolicy) -> Result<Vec<String>> {
        words(self, policy)
    }

    fn bag(&self, policy: &StopWordPolicy, stemmer: &dyn Stemmer) -> Result<FrequencyBag> {
        bag(self, policy, stemmer)
    }

    fn bag_of_words(&self) -> Result<FrequencyBag> {
        TextPipeline::global().bag_default(self)
    }

    fn bag_as_set(&self, stemmer: &dyn Stemmer) -> Result<TokenSet> {
        bag_as_set(self, stemmer)
    }

    fn pos_tags(&self) -> Result<Vec<(String, PosTag)>> {
        pos_tag(self)
    }

    fn keywords(&self, k: usize) -> Result<Vec<Keyword>> {
        keywords(self, k)
    }
}
