//! The text pipeline: every operation of the crate behind one configurable value.
//!
//! A [`TextPipeline`] bundles the collaborators (normalizer, sentence
//! splitter, tokenizer, POS tagger, keyword ranker) and the default stop word
//! policy and stemmer. The operations compose the collaborators as follows:
//!
//! ```text
//! bag:      normalize → sentences → (per sentence) tokenize → stop filter → stem → lowercase → count
//! words:    tokenize → stop filter
//! pos_tag:  tokenize → tag
//! keywords: ranker on the raw text
//! ```
//!
//! # Examples
//!
//! ```
//! use textprep::analysis::token_filter::stem::IdentityStemmer;
//! use textprep::analysis::token_filter::stop::StopWordPolicy;
//! use textprep::pipeline::TextPipeline;
//!
//! let pipeline = TextPipeline::default();
//! let bag = pipeline
//!     .bag("The cat sat on the mat.", &StopWordPolicy::Default, &IdentityStemmer)
//!     .unwrap();
//!
//! assert_eq!(bag.len(), 3);
//! assert_eq!(bag.get("cat"), 1);
//! assert_eq!(bag.get("the"), 0);
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use tracing::{debug, trace};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::normalizer::{Normalizer, SimpleNormalizer};
use crate::analysis::pos::{LexiconTagger, PosTag, PosTagger, zip_tags};
use crate::analysis::sentence::{SentenceSplitter, SimpleSentenceSplitter};
use crate::analysis::token::{Token, tokens_from_words};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::stem::{Stemmer, StemmerKind};
use crate::analysis::token_filter::stop::{StopFilter, StopWordPolicy};
use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::bag::{FrequencyBag, TokenSet};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::keyword::{CooccurrenceKeywords, Keyword, KeywordRanker};

static GLOBAL: LazyLock<TextPipeline> = LazyLock::new(TextPipeline::default);

/// A configured text processing pipeline.
///
/// Cloning is cheap: every collaborator is shared.
#[derive(Clone)]
pub struct TextPipeline {
    normalizer: Arc<dyn Normalizer>,
    sentence_splitter: Arc<dyn SentenceSplitter>,
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn PosTagger>,
    ranker: Arc<dyn KeywordRanker>,
    policy: StopWordPolicy,
    stemmer: Arc<dyn Stemmer>,
}

impl TextPipeline {
    /// Create a pipeline with the built-in collaborators.
    pub fn new() -> Self {
        Self::build(&PipelineConfig::default())
    }

    /// Create a pipeline with the built-in collaborators and the given settings.
    ///
    /// Returns [`TextError::InvalidConfig`](crate::error::TextError::InvalidConfig) if the settings fail
    /// [`PipelineConfig::validate`].
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &PipelineConfig) -> Self {
        debug!(
            policy = %config.policy,
            stemmer = %config.stemmer,
            "creating text pipeline"
        );
        TextPipeline {
            normalizer: SimpleNormalizer::shared(),
            sentence_splitter: SimpleSentenceSplitter::shared(),
            tokenizer: SimpleTokenizer::shared(),
            tagger: Arc::new(LexiconTagger::new()),
            ranker: Arc::new(CooccurrenceKeywords::with_config(config.keywords.clone())),
            policy: config.policy.clone(),
            stemmer: config.stemmer.build(),
        }
    }

    /// The process-wide default pipeline, built on first use.
    pub fn global() -> &'static TextPipeline {
        &GLOBAL
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_sentence_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.sentence_splitter = splitter;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn with_ranker(mut self, ranker: Arc<dyn KeywordRanker>) -> Self {
        self.ranker = ranker;
        self
    }

    /// Set the policy used by [`bag_default`](Self::bag_default) and [`words_default`](Self::words_default).
    pub fn with_policy(mut self, policy: StopWordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the stemmer used by [`bag_default`](Self::bag_default).
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Set the stemmer used by [`bag_default`](Self::bag_default) by name.
    pub fn with_stemmer_kind(self, kind: StemmerKind) -> Self {
        self.with_stemmer(kind.build())
    }

    pub fn policy(&self) -> &StopWordPolicy {
        &self.policy
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// Canonicalize raw text.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Split text into sentences. The text is not normalized first.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_splitter.split(text)
    }

    /// Split text into tokens, keeping punctuation and case.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.tokenizer.tokenize(text)?.collect())
    }

    /// Remove stop words and punctuation from a token sequence.
    ///
    /// With [`StopWordPolicy::None`] the tokens are returned unchanged.
    pub fn filter(&self, tokens: Vec<Token>, policy: &StopWordPolicy) -> Result<Vec<Token>> {
        let filter = StopFilter::new(policy.clone());
        Ok(filter.filter(Box::new(tokens.into_iter()))?.collect())
    }

    /// Filter a plain word list.
    pub fn filter_words<I, S>(&self, words: I, policy: &StopWordPolicy) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = self.filter(tokens_from_words(words), policy)?;
        Ok(tokens.into_iter().map(String::from).collect())
    }

    /// Tokenize the text and filter it with `policy`.
    pub fn words(&self, text: &str, policy: &StopWordPolicy) -> Result<Vec<String>> {
        let tokens = self.filter(self.tokenize(text)?, policy)?;
        trace!(policy = %policy, tokens = tokens.len(), "words");
        Ok(tokens.into_iter().map(String::from).collect())
    }

    /// [`words`](Self::words) with the pipeline's default policy.
    pub fn words_default(&self, text: &str) -> Result<Vec<String>> {
        self.words(text, &self.policy)
    }

    /// An analyzer that runs the sentence-level steps of [`bag`](Self::bag).
    pub fn analyzer(&self, policy: &StopWordPolicy) -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::clone(&self.tokenizer))
            .with_normalizer(Arc::clone(&self.normalizer))
            .with_sentence_splitter(Arc::clone(&self.sentence_splitter))
            .add_filter(Arc::new(StopFilter::new(policy.clone())))
            .with_name("bag_of_words")
    }

    /// Count the filtered, stemmed and lowercased tokens of the text.
    pub fn bag(
        &self,
        text: &str,
        policy: &StopWordPolicy,
        stemmer: &dyn Stemmer,
    ) -> Result<FrequencyBag> {
        let sentences = self.analyzer(policy).analyze_sentences(text)?;
        let bag: FrequencyBag = sentences
            .into_iter()
            .flatten()
            .map(|token| stemmer.stem(&token.text).to_lowercase())
            .collect();

        debug!(
            policy = %policy,
            stemmer = stemmer.name(),
            distinct = bag.len(),
            tokens = bag.total(),
            "built frequency bag"
        );
        Ok(bag)
    }

    /// [`bag`](Self::bag) with the pipeline's default policy and stemmer.
    pub fn bag_default(&self, text: &str) -> Result<FrequencyBag> {
        self.bag(text, &self.policy, self.stemmer.as_ref())
    }

    /// The distinct tokens of [`bag`](Self::bag) under the default stop word list.
    pub fn bag_as_set(&self, text: &str, stemmer: &dyn Stemmer) -> Result<TokenSet> {
        Ok(self.bag(text, &StopWordPolicy::Default, stemmer)?.to_set())
    }

    /// Tag every token of the text with its part of speech.
    pub fn pos_tag(&self, text: &str) -> Result<Vec<(String, PosTag)>> {
        let words: Vec<String> = self
            .tokenize(text)?
            .into_iter()
            .map(String::from)
            .collect();
        let tags = self.tagger.tag(&words)?;
        trace!(tagger = self.tagger.name(), tokens = words.len(), "pos tagged");
        zip_tags(words, tags)
    }

    /// The `k` most relevant keywords of the text.
    pub fn keywords(&self, text: &str, k: usize) -> Result<Vec<Keyword>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        self.ranker.rank(text, k)
    }
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextPipeline")
            .field("normalizer", &self.normalizer.name())
            .field("sentence_splitter", &self.sentence_splitter.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("tagger", &self.tagger.name())
            .field("ranker", &self.ranker.name())
            .field("policy", &self.policy)
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stem::{IdentityStemmer, PorterStemmer};
    use crate::error::TextError;
    use crate::keyword::KeywordConfig;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_bag_default_policy_identity() {
        let pipeline = TextPipeline::new();
        let bag = pipeline
            .bag("The cat sat on the mat.", &StopWordPolicy::Default, &IdentityStemmer)
            .unwrap();

        assert_eq!(bag.len(), 3);
        for word in ["cat", "sat", "mat"] {
            assert_eq!(bag.get(word), 1);
        }
    }

    #[test]
    fn test_bag_stems_and_lowercases() {
        let pipeline = TextPipeline::new();
        let bag = pipeline
            .bag(
                "Running dogs. The dog runs!",
                &StopWordPolicy::Default,
                &PorterStemmer::new(),
            )
            .unwrap();

        assert_eq!(bag.get("dog"), 2);
        assert_eq!(bag.get("run"), 2);
        assert_eq!(bag.total(), 4);
    }

    #[test]
    fn test_bag_with_none_policy_keeps_punctuation() {
        let pipeline = TextPipeline::new();
        let bag = pipeline
            .bag("Hello, hello!", &StopWordPolicy::None, &IdentityStemmer)
            .unwrap();

        assert_eq!(bag.get("hello"), 2);
        assert_eq!(bag.get(","), 1);
        assert_eq!(bag.get("!"), 1);
    }

    #[test]
    fn test_bag_default_uses_configured_stemmer() {
        let pipeline = TextPipeline::new().with_stemmer_kind(StemmerKind::Identity);
        let bag = pipeline.bag_default("Cats and cats").unwrap();
        assert_eq!(bag.get("cats"), 2);

        let bag = TextPipeline::new().bag_default("Cats and cats").unwrap();
        assert_eq!(bag.get("cat"), 2);
    }

    #[test]
    fn test_bag_as_set() {
        let pipeline = TextPipeline::new();
        let set = pipeline
            .bag_as_set("A cat. A cat! The cat?", &IdentityStemmer)
            .unwrap();

        assert_eq!(set.sorted(), vec!["cat"]);
    }

    #[test]
    fn test_words_and_filter() {
        let pipeline = TextPipeline::new();
        let words = pipeline.words("The cat, the hat.", &StopWordPolicy::Default).unwrap();
        assert_eq!(words, vec!["cat", "hat"]);

        let words = pipeline.words("The cat.", &StopWordPolicy::None).unwrap();
        assert_eq!(words, vec!["The", "cat", "."]);

        let tokens = pipeline.tokenize("foo BAR baz").unwrap();
        let kept = pipeline
            .filter(tokens, &StopWordPolicy::custom("foo,bar"))
            .unwrap();
        assert_eq!(texts(&kept), vec!["baz"]);
    }

    #[test]
    fn test_filter_words() {
        let pipeline = TextPipeline::new();
        let kept = pipeline
            .filter_words(["Rust", "is", "a", "language"], &StopWordPolicy::Default)
            .unwrap();
        assert_eq!(kept, vec!["Rust", "language"]);
    }

    #[test]
    fn test_pos_tag() {
        let pipeline = TextPipeline::new();
        let tagged = pipeline.pos_tag("The dog barks.").unwrap();

        assert_eq!(
            tagged,
            vec![
                ("The".to_string(), PosTag::DT),
                ("dog".to_string(), PosTag::NN),
                ("barks".to_string(), PosTag::VBZ),
                (".".to_string(), PosTag::Period),
            ]
        );
        assert!(pipeline.pos_tag("").unwrap().is_empty());
    }

    struct BrokenTagger;

    impl PosTagger for BrokenTagger {
        fn tag(&self, _tokens: &[String]) -> Result<Vec<PosTag>> {
            Ok(vec![PosTag::NN])
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_pos_tag_defect() {
        let pipeline = TextPipeline::new().with_tagger(Arc::new(BrokenTagger));
        let err = pipeline.pos_tag("two tokens").unwrap_err();
        assert!(matches!(
            err,
            TextError::TaggerDefect {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_keywords_zero() {
        let pipeline = TextPipeline::new();
        assert!(pipeline.keywords("anything at all", 0).unwrap().is_empty());
    }

    #[test]
    fn test_from_config_validates() {
        let config = PipelineConfig {
            stemmer: StemmerKind::Identity,
            ..PipelineConfig::default()
        };
        let pipeline = TextPipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.stemmer().name(), "identity");

        let zero_ngram = PipelineConfig {
            keywords: KeywordConfig {
                max_ngram_size: 0,
                ..KeywordConfig::default()
            },
            ..PipelineConfig::default()
        };
        let err = TextPipeline::from_config(&zero_ngram).unwrap_err();
        assert!(matches!(err, TextError::InvalidConfig(_)));

        let nan_ratio = PipelineConfig {
            keywords: KeywordConfig {
                frequent_ratio: f64::NAN,
                ..KeywordConfig::default()
            },
            ..PipelineConfig::default()
        };
        let err = TextPipeline::from_config(&nan_ratio).unwrap_err();
        assert!(matches!(err, TextError::InvalidConfig(_)));
    }

    #[test]
    fn test_normalize_and_split() {
        let pipeline = TextPipeline::global();
        let normalized = pipeline.normalize("  One.\u{00a0}Two.  ");
        assert_eq!(normalized, "One. Two.");
        assert_eq!(pipeline.split_sentences(&normalized), vec!["One.", "Two."]);
    }
}
