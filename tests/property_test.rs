//! Property-based tests for the text pipeline.
//!
//! These check the invariants that hold for any input text: normalization is
//! idempotent, filtering never adds tokens, bags count exactly the filtered
//! tokens, tagging is positional and keyword lists are bounded and ordered.

use proptest::prelude::*;

use textprep::analysis::token_filter::stem::{IdentityStemmer, PorterStemmer};
use textprep::analysis::token_filter::stop::StopWordPolicy;
use textprep::keyword::KeywordConfig;
use textprep::keyword::cooccurrence::CooccurrenceKeywords;
use textprep::pipeline::TextPipeline;

use std::sync::Arc;

/// Free text with punctuation, typography and odd whitespace.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 .,!?;:'\-\n\t\x{2019}\x{201c}\x{201d}\x{2014}\x{00a0}]{0,200}")
        .unwrap()
}

/// Sentences built from a small vocabulary so that words repeat.
fn prose_strategy() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "the", "cat", "sat", "on", "mat", "dog", "ran", "data", "model", "learns", "fast",
        "rust", "is", "safe", "memory", "and", "with", "a",
    ]);
    let sentence = prop::collection::vec(word, 1..12).prop_map(|words| {
        let mut sentence = words.join(" ");
        sentence.push('.');
        sentence
    });
    prop::collection::vec(sentence, 0..12).prop_map(|sentences| sentences.join(" "))
}

fn policy_strategy() -> impl Strategy<Value = StopWordPolicy> {
    prop_oneof![
        Just(StopWordPolicy::Default),
        Just(StopWordPolicy::Comprehensive),
        Just(StopWordPolicy::Google),
        Just(StopWordPolicy::MySql),
        Just(StopWordPolicy::None),
        prop::string::string_regex(r"[a-z]{1,6}(,[a-z]{1,6}){0,4}")
            .unwrap()
            .prop_map(StopWordPolicy::custom),
    ]
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in text_strategy()) {
        let pipeline = TextPipeline::global();
        let once = pipeline.normalize(&text);
        prop_assert_eq!(pipeline.normalize(&once), once);
    }

    #[test]
    fn sentences_reconstruct_normalized_text(text in text_strategy()) {
        let pipeline = TextPipeline::global();
        let normalized = pipeline.normalize(&text);
        let sentences = pipeline.split_sentences(&normalized);

        prop_assert_eq!(squash(&sentences.concat()), squash(&normalized));
        prop_assert!(sentences.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn filter_never_adds_tokens(text in text_strategy(), policy in policy_strategy()) {
        let pipeline = TextPipeline::global();
        let tokens = pipeline.tokenize(&text).unwrap();
        let filtered = pipeline.filter(tokens.clone(), &policy).unwrap();

        prop_assert!(filtered.len() <= tokens.len());
        if policy == StopWordPolicy::None {
            prop_assert_eq!(filtered, tokens);
        }
    }

    #[test]
    fn bag_counts_filtered_tokens(text in text_strategy(), policy in policy_strategy()) {
        let pipeline = TextPipeline::global();
        let bag = pipeline.bag(&text, &policy, &PorterStemmer::new()).unwrap();

        let mut expected = 0;
        for sentence in pipeline.split_sentences(&pipeline.normalize(&text)) {
            let tokens = pipeline.tokenize(&sentence).unwrap();
            expected += pipeline.filter(tokens, &policy).unwrap().len();
        }
        prop_assert_eq!(bag.total(), expected);
        prop_assert_eq!(bag.get("\u{0}absent\u{0}"), 0);
        prop_assert!(bag.iter().all(|(token, count)| count > 0 && token.to_lowercase() == token));
    }

    #[test]
    fn bag_as_set_matches_default_bag(text in text_strategy()) {
        let pipeline = TextPipeline::global();
        let set = pipeline.bag_as_set(&text, &IdentityStemmer).unwrap();
        let bag = pipeline.bag(&text, &StopWordPolicy::Default, &IdentityStemmer).unwrap();

        prop_assert_eq!(set.len(), bag.len());
        prop_assert!(set.iter().all(|token| bag.contains(token)));
    }

    #[test]
    fn pos_tag_is_positional(text in text_strategy()) {
        let pipeline = TextPipeline::global();
        let tagged = pipeline.pos_tag(&text).unwrap();
        let tokens = pipeline.tokenize(&text).unwrap();

        prop_assert_eq!(tagged.len(), tokens.len());
        for ((word, _), token) in tagged.iter().zip(&tokens) {
            prop_assert_eq!(word, &token.text);
        }
    }

    #[test]
    fn keywords_are_bounded_and_ordered(text in prose_strategy(), k in 0usize..8) {
        let pipeline = TextPipeline::new().with_ranker(Arc::new(
            CooccurrenceKeywords::with_config(KeywordConfig {
                min_frequency: 2,
                ..KeywordConfig::default()
            }),
        ));
        let keywords = pipeline.keywords(&text, k).unwrap();

        prop_assert!(keywords.len() <= k);
        for pair in keywords.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        prop_assert!(keywords.iter().all(|kw| kw.score.is_finite()));
    }
}
