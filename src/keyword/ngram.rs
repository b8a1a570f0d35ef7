//! N-gram phrases and Apriori-style frequent n-gram extraction.

use std::fmt;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::dictionary::{StopWordList, is_punctuation, stop_words};

/// A sequence of words together with its frequency in the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NGram {
    /// The words of the phrase, in order
    pub words: Vec<String>,
    /// How many times the phrase occurs
    pub freq: usize,
}

impl NGram {
    pub fn new(words: Vec<String>, freq: usize) -> Self {
        NGram { words, freq }
    }

    /// Number of words in the phrase.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the phrase occurs as a contiguous run in `sentence`.
    pub fn occurs_in(&self, sentence: &[String]) -> bool {
        !self.words.is_empty() && sentence.windows(self.words.len()).any(|w| w == self.words)
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

/// Extract every frequent n-gram of up to `max_size` words.
///
/// An n-gram is counted only if its leading and trailing (n-1)-grams are both
/// frequent, so the search never enumerates n-grams that cannot qualify. An
/// n-gram is frequent when it occurs at least `min_frequency` times.
///
/// Phrases that begin or end with a stop word, or contain punctuation, are
/// dropped from the result. The result is ordered by length, then by
/// descending frequency, then by words.
pub fn extract_ngrams(
    sentences: &[Vec<String>],
    max_size: usize,
    min_frequency: usize,
) -> Vec<NGram> {
    let stop = stop_words(StopWordList::Default);
    let mut result = Vec::new();
    let mut frequent: AHashSet<&[String]> = AHashSet::new();

    for n in 1..=max_size {
        let mut counts: AHashMap<&[String], usize> = AHashMap::new();

        for sentence in sentences {
            for gram in sentence.windows(n) {
                let extends_frequent = n == 1
                    || (frequent.contains(&gram[..n - 1]) && frequent.contains(&gram[1..]));
                if extends_frequent {
                    *counts.entry(gram).or_insert(0) += 1;
                }
            }
        }

        frequent = counts
            .iter()
            .filter(|&(_, &count)| count >= min_frequency)
            .map(|(&gram, _)| gram)
            .collect();
        if frequent.is_empty() {
            break;
        }

        let mut level: Vec<NGram> = frequent
            .iter()
            .filter(|gram| {
                let first = &gram[0];
                let last = &gram[gram.len() - 1];
                !stop.contains(first)
                    && !stop.contains(last)
                    && !gram.iter().any(|w| is_punctuation(w))
            })
            .map(|gram| NGram::new(gram.to_vec(), counts[gram]))
            .collect();
        level.sort_by(|a, b| b.freq.cmp(&a.freq).then_with(|| a.words.cmp(&b.words)));
        result.extend(level);
    }

    result
}
