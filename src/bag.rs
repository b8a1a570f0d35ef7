//! Bag-of-words containers.
//!
//! A [`FrequencyBag`] maps every distinct token to the number of times it
//! occurred; a [`TokenSet`] only records which tokens occurred.
//!
//! # Examples
//!
//! ```
//! use textprep::bag::FrequencyBag;
//!
//! let bag: FrequencyBag = ["cat", "sat", "cat"].into_iter().map(String::from).collect();
//!
//! assert_eq!(bag.get("cat"), 2);
//! assert_eq!(bag.get("dog"), 0);
//! assert_eq!(bag.total(), 3);
//! assert_eq!(bag.most_common(1), vec![("cat", 2)]);
//! ```

use std::collections::{HashMap, HashSet};

use ahash::RandomState;
use serde::{Deserialize, Serialize};

/// Token → occurrence count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyBag {
    counts: HashMap<String, usize, RandomState>,
}

impl FrequencyBag {
    pub fn new() -> Self {
        FrequencyBag::default()
    }

    /// Count one more occurrence of `token`.
    pub fn add<S: Into<String>>(&mut self, token: S) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// The count of `token`, zero when it never occurred.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// The `n` most frequent tokens, by descending count and then token.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// The distinct tokens of this bag.
    pub fn to_set(&self) -> TokenSet {
        self.counts.keys().cloned().collect()
    }

    pub fn into_map(self) -> HashMap<String, usize, RandomState> {
        self.counts
    }
}

impl FromIterator<String> for FrequencyBag {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut bag = FrequencyBag::new();
        for token in iter {
            bag.add(token);
        }
        bag
    }
}

impl IntoIterator for FrequencyBag {
    type Item = (String, usize);
    type IntoIter = std::collections::hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// A set of distinct tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: HashSet<String, RandomState>,
}

impl TokenSet {
    pub fn new() -> Self {
        TokenSet::default()
    }

    /// Add a token; returns whether it was new.
    pub fn insert<S: Into<String>>(&mut self, token: S) -> bool {
        self.tokens.insert(token.into())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The tokens in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.iter().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        TokenSet {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(words: &[&str]) -> FrequencyBag {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts() {
        let bag = bag(&["a", "b", "a", "c", "a"]);
        assert_eq!(bag.get("a"), 3);
        assert_eq!(bag.get("b"), 1);
        assert_eq!(bag.get("z"), 0);
        assert!(bag.contains("c"));
        assert!(!bag.contains("z"));
        assert_eq!(bag.len(), 3);
        assert_eq!(bag.total(), 5);
    }

    #[test]
    fn test_most_common_ties() {
        let bag = bag(&["b", "a", "c", "c"]);
        assert_eq!(bag.most_common(3), vec![("c", 2), ("a", 1), ("b", 1)]);
        assert!(bag.most_common(0).is_empty());
    }

    #[test]
    fn test_empty_bag() {
        let bag = FrequencyBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.total(), 0);
        assert!(bag.to_set().is_empty());
    }

    #[test]
    fn test_bag_serializes_as_map() {
        let json = serde_json::to_string(&bag(&["cat", "cat"])).unwrap();
        assert_eq!(json, r#"{"cat":2}"#);
        let back: FrequencyBag = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get("cat"), 2);
    }

    #[test]
    fn test_token_set() {
        let set: TokenSet = ["b", "a", "b"].iter().map(|w| w.to_string()).collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.sorted(), vec!["a", "b"]);

        let mut set = set;
        assert!(set.insert("c"));
        assert!(!set.insert("a"));
        assert!(set.contains("c"));
    }
}
