//! Keyword extraction from a single document using word co-occurrence
//! statistics (Matsuo & Ishizuka, 2004).
//!
//! The idea: a term that co-occurs with the document's frequent terms more
//! often than chance predicts is likely a keyword. The algorithm:
//!
//! 1. Split the text into sentences and tokens, lowercase every token and
//!    strip plural and participle endings.
//! 2. Extract frequent n-grams as candidates (see [`extract_ngrams`]).
//! 3. Take the top fraction of candidates by frequency as the frequent terms
//!    and merge frequent terms that tend to appear in the same sentences into
//!    clusters.
//! 4. Score every candidate with a chi-square statistic that compares its
//!    observed co-occurrence with each cluster against the expected one.
//!    The largest single term is subtracted, so a candidate is not rewarded
//!    for co-occurring heavily with just one cluster.

use std::sync::Arc;

use tracing::debug;

use super::ngram::{NGram, extract_ngrams};
use super::{Keyword, KeywordConfig, KeywordRanker};
use crate::analysis::sentence::{SentenceSplitter, SimpleSentenceSplitter};
use crate::analysis::token_filter::stem::PorterStemmer;
use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::error::Result;

/// Co-occurrence based keyword ranker.
#[derive(Clone)]
pub struct CooccurrenceKeywords {
    config: KeywordConfig,
    sentence_splitter: Arc<dyn SentenceSplitter>,
    tokenizer: Arc<dyn Tokenizer>,
    stemmer: PorterStemmer,
}

impl CooccurrenceKeywords {
    /// Create a ranker with the default settings.
    pub fn new() -> Self {
        Self::with_config(KeywordConfig::default())
    }

    /// Create a ranker with custom settings.
    pub fn with_config(config: KeywordConfig) -> Self {
        CooccurrenceKeywords {
            config,
            sentence_splitter: SimpleSentenceSplitter::shared(),
            tokenizer: SimpleTokenizer::shared(),
            stemmer: PorterStemmer::new(),
        }
    }

    /// Use a different sentence splitter.
    pub fn with_sentence_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.sentence_splitter = splitter;
        self
    }

    /// Use a different tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Sentences as lists of lowercased, de-pluralised tokens.
    fn prepare(&self, text: &str) -> Result<Vec<Vec<String>>> {
        self.sentence_splitter
            .split(text)
            .iter()
            .map(|sentence| -> Result<Vec<String>> {
                Ok(self
                    .tokenizer
                    .tokenize(sentence)?
                    .map(|t| self.stemmer.strip_plural_participle(&t.text))
                    .collect())
            })
            .collect()
    }
}

impl Default for CooccurrenceKeywords {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CooccurrenceKeywords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CooccurrenceKeywords")
            .field("config", &self.config)
            .field("sentence_splitter", &self.sentence_splitter.name())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl KeywordRanker for CooccurrenceKeywords {
    fn rank(&self, text: &str, k: usize) -> Result<Vec<Keyword>> {
        if k == 0 {
            return Ok(Vec::new());
        }

        let sentences = self.prepare(text)?;
        let candidates = extract_ngrams(
            &sentences,
            self.config.max_ngram_size,
            self.config.min_frequency,
        );
        debug!(
            sentences = sentences.len(),
            candidates = candidates.len(),
            k,
            "ranking keywords"
        );
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut keywords = score_candidates(&sentences, candidates, &self.config);
        keywords.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.ngram.freq.cmp(&a.ngram.freq))
                .then_with(|| a.ngram.words.cmp(&b.ngram.words))
        });
        keywords.truncate(k);
        Ok(keywords)
    }

    fn name(&self) -> &'static str {
        "cooccurrence"
    }
}

/// Occurrence statistics of one candidate.
struct Occurrence {
    /// Which sentences contain the candidate
    in_sentence: Vec<bool>,
    /// Total number of tokens in those sentences
    context_size: usize,
}

impl Occurrence {
    fn of(ngram: &NGram, sentences: &[Vec<String>]) -> Self {
        let in_sentence: Vec<bool> = sentences.iter().map(|s| ngram.occurs_in(s)).collect();
        let context_size = sentences
            .iter()
            .zip(&in_sentence)
            .filter(|&(_, &present)| present)
            .map(|(s, _)| s.len())
            .sum();
        Occurrence {
            in_sentence,
            context_size,
        }
    }

    /// Number of sentences containing both candidates.
    fn shared(&self, other: &Occurrence) -> usize {
        self.in_sentence
            .iter()
            .zip(&other.in_sentence)
            .filter(|&(&a, &b)| a && b)
            .count()
    }

    fn count(&self) -> usize {
        self.in_sentence.iter().filter(|&&present| present).count()
    }
}

fn score_candidates(
    sentences: &[Vec<String>],
    mut candidates: Vec<NGram>,
    config: &KeywordConfig,
) -> Vec<Keyword> {
    let total_tokens: usize = sentences.iter().map(Vec::len).sum();

    // Most frequent first, so the frequent terms are a prefix.
    candidates.sort_by(|a, b| b.freq.cmp(&a.freq).then_with(|| a.words.cmp(&b.words)));
    let occurrences: Vec<Occurrence> = candidates
        .iter()
        .map(|c| Occurrence::of(c, sentences))
        .collect();

    let frequent = frequent_count(candidates.len(), config.frequent_ratio);
    let clusters = cluster(&occurrences[..frequent], config.cluster_threshold);

    // Expected probability of co-occurring with each cluster.
    let expected: Vec<f64> = clusters
        .iter()
        .map(|members| {
            let size: usize = members.iter().map(|&g| occurrences[g].context_size).sum();
            size as f64 / total_tokens as f64
        })
        .collect();

    candidates
        .into_iter()
        .enumerate()
        .map(|(w, ngram)| {
            let n_w = occurrences[w].context_size as f64;
            let terms: Vec<f64> = clusters
                .iter()
                .zip(&expected)
                .map(|(members, &p_g)| {
                    let observed: usize = members
                        .iter()
                        .filter(|&&g| g != w)
                        .map(|&g| occurrences[w].shared(&occurrences[g]))
                        .sum();
                    let expected = n_w * p_g;
                    if expected > 0.0 {
                        (observed as f64 - expected).powi(2) / expected
                    } else {
                        0.0
                    }
                })
                .collect();

            let max = terms.iter().copied().fold(0.0, f64::max);
            let score = terms.iter().sum::<f64>() - max;
            Keyword::new(ngram, score)
        })
        .collect()
}

/// Number of frequent terms: the given fraction of candidates, at least one.
fn frequent_count(candidates: usize, ratio: f64) -> usize {
    let count = (candidates as f64 * ratio).ceil() as usize;
    count.clamp(1, candidates)
}

/// Group frequent terms whose sentence sets overlap with a Jaccard
/// coefficient of at least `threshold`. Returns clusters of term indices.
fn cluster(occurrences: &[Occurrence], threshold: f64) -> Vec<Vec<usize>> {
    let mut parent: Vec<usize> = (0..occurrences.len()).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for a in 0..occurrences.len() {
        for b in (a + 1)..occurrences.len() {
            let shared = occurrences[a].shared(&occurrences[b]);
            let union = occurrences[a].count() + occurrences[b].count() - shared;
            if union > 0 && shared as f64 / union as f64 >= threshold {
                let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
                if ra != rb {
                    parent[rb.max(ra)] = ra.min(rb);
                }
            }
        }
    }

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut slot = vec![usize::MAX; occurrences.len()];
    for i in 0..occurrences.len() {
        let root = find(&mut parent, i);
        if slot[root] == usize::MAX {
            slot[root] = clusters.len();
            clusters.push(Vec::new());
        }
        clusters[slot[root]].push(i);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Machine learning models need data. \
        Machine learning models learn patterns from data. \
        Deep learning is a branch of machine learning. \
        Neural networks power deep learning. \
        Training neural networks needs data and compute. \
        The weather today is sunny. \
        Researchers train machine learning models on large data sets.";

    fn ranker() -> CooccurrenceKeywords {
        CooccurrenceKeywords::with_config(KeywordConfig {
            min_frequency: 2,
            ..KeywordConfig::default()
        })
    }

    #[test]
    fn test_keywords_are_ranked() {
        let keywords = ranker().rank(TEXT, 5).unwrap();

        assert!(!keywords.is_empty());
        assert!(keywords.len() <= 5);
        for pair in keywords.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let rendered: Vec<String> = keywords.iter().map(|k| k.ngram.to_string()).collect();
        assert!(rendered.iter().all(|k| k != "the" && k != "is"));
    }

    #[test]
    fn test_candidates_are_depluralised() {
        let keywords = ranker().rank(TEXT, 50).unwrap();
        let rendered: Vec<String> = keywords.iter().map(|k| k.ngram.to_string()).collect();

        // "learning" loses its -ing, "models" its plural -s.
        assert!(rendered.contains(&"machine learn model".to_string()));
        assert!(rendered.contains(&"neural network".to_string()));
        assert!(!rendered.iter().any(|k| k.ends_with("models")));
    }

    #[test]
    fn test_zero_k_and_empty_text() {
        assert!(ranker().rank(TEXT, 0).unwrap().is_empty());
        assert!(ranker().rank("", 10).unwrap().is_empty());
        assert!(CooccurrenceKeywords::new().rank("Too short.", 10).unwrap().is_empty());
    }

    #[test]
    fn test_frequent_count() {
        assert_eq!(frequent_count(10, 0.3), 3);
        assert_eq!(frequent_count(2, 0.3), 1);
        assert_eq!(frequent_count(1, 0.0), 1);
        assert_eq!(frequent_count(4, 1.0), 4);
    }

    #[test]
    fn test_cluster_by_jaccard() {
        let occ = |bits: &[bool]| Occurrence {
            in_sentence: bits.to_vec(),
            context_size: 1,
        };
        let occurrences = vec![
            occ(&[true, true, false, false]),
            occ(&[true, true, true, false]),
            occ(&[false, false, false, true]),
        ];

        let clusters = cluster(&occurrences, 0.25);
        assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_ranker_name() {
        assert_eq!(ranker().name(), "cooccurrence");
    }
}
