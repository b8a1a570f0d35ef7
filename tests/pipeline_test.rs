use std::sync::Arc;

use textprep::analysis::pos::PosTag;
use textprep::analysis::token::tokens_from_words;
use textprep::analysis::token_filter::stem::{IdentityStemmer, PorterStemmer, Stemmer};
use textprep::analysis::token_filter::stop::StopWordPolicy;
use textprep::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
use textprep::config::PipelineConfig;
use textprep::error::{Result, TextError};
use textprep::keyword::{KeywordConfig, KeywordRanker};
use textprep::keyword::cooccurrence::CooccurrenceKeywords;
use textprep::pipeline::TextPipeline;
use textprep::text::{self, TextExt};

const ARTICLE: &str = "Rust is a systems programming language. \
    Rust programs are fast and memory safe. \
    The borrow checker keeps Rust programs memory safe. \
    Systems programming needs memory safety without garbage collection. \
    Many developers choose Rust for systems programming. \
    The borrow checker rejects programs with data races. \
    Memory safety and data race freedom come from the borrow checker. \
    Coffee tastes good in the morning.";

fn keyword_pipeline() -> TextPipeline {
    TextPipeline::new().with_ranker(Arc::new(CooccurrenceKeywords::with_config(
        KeywordConfig {
            min_frequency: 2,
            ..KeywordConfig::default()
        },
    )))
}

#[test]
fn bag_drops_default_stop_words_and_punctuation() -> Result<()> {
    let bag = text::bag(
        "The cat sat on the mat.",
        &StopWordPolicy::Default,
        &IdentityStemmer,
    )?;

    let mut entries: Vec<(&str, usize)> = bag.iter().collect();
    entries.sort();
    assert_eq!(entries, vec![("cat", 1), ("mat", 1), ("sat", 1)]);
    assert_eq!(bag.get("the"), 0);
    assert_eq!(bag.get("on"), 0);
    assert_eq!(bag.get("."), 0);
    Ok(())
}

#[test]
fn custom_policy_matches_lowercased_tokens() -> Result<()> {
    let pipeline = TextPipeline::new();
    let tokens = tokens_from_words(["foo", "BAR", "baz"]);

    let kept = pipeline.filter(tokens, &StopWordPolicy::custom("foo,bar"))?;
    let kept: Vec<&str> = kept.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(kept, vec!["baz"]);
    Ok(())
}

#[test]
fn custom_policy_entries_are_not_trimmed() -> Result<()> {
    let words = text::words("foo bar baz", &StopWordPolicy::custom("foo, bar"))?;
    assert_eq!(words, vec!["bar", "baz"]);
    Ok(())
}

#[test]
fn unknown_policy_name_is_rejected() {
    let err = "SHOUTY".parse::<StopWordPolicy>().unwrap_err();
    match &err {
        TextError::UnknownPolicy { name, valid } => {
            assert_eq!(name, "SHOUTY");
            assert!(valid.contains("CUSTOM"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("SHOUTY"));
    for policy in ["DEFAULT", "COMPREHENSIVE", "GOOGLE", "MYSQL", "NONE", "CUSTOM"] {
        assert!(message.contains(policy), "{message} should list {policy}");
    }
}

#[test]
fn policy_names_parse_case_insensitively() -> Result<()> {
    assert_eq!("mysql".parse::<StopWordPolicy>()?, StopWordPolicy::MySql);
    assert_eq!("None".parse::<StopWordPolicy>()?, StopWordPolicy::None);
    assert_eq!(
        "custom:foo,bar".parse::<StopWordPolicy>()?,
        StopWordPolicy::custom("foo,bar")
    );
    Ok(())
}

#[test]
fn policies_differ_in_what_they_drop() -> Result<()> {
    let text = "We would like to visit www example sites";

    let none = text::words(text, &StopWordPolicy::None)?;
    let default = text::words(text, &StopWordPolicy::Default)?;
    let comprehensive = text::words(text, &StopWordPolicy::Comprehensive)?;
    let google = text::words(text, &StopWordPolicy::Google)?;

    assert_eq!(none.len(), 8);
    assert!(default.len() < none.len());
    assert!(comprehensive.len() <= default.len());
    assert!(!google.contains(&"www".to_string()));
    assert!(default.contains(&"www".to_string()));
    Ok(())
}

#[test]
fn bag_aggregates_across_sentences() -> Result<()> {
    let text = "Mr. Smith runs daily.  He ran yesterday!\n\nRunners run.";
    let bag = text.bag(&StopWordPolicy::Default, &PorterStemmer::new())?;

    // "ran" is irregular and "Runners" keeps its agent suffix.
    assert_eq!(bag.get("run"), 2);
    assert_eq!(bag.get("ran"), 1);
    assert_eq!(bag.get("runner"), 1);
    assert!(bag.contains("smith"));
    assert_eq!(bag.most_common(1), vec![("run", 2)]);
    Ok(())
}

#[test]
fn bag_as_set_always_uses_default_policy() -> Result<()> {
    let pipeline = TextPipeline::new().with_policy(StopWordPolicy::None);
    let set = pipeline.bag_as_set("The the THE dog.", &IdentityStemmer)?;

    assert_eq!(set.sorted(), vec!["dog"]);
    let bag = pipeline.bag_default("The the THE dog.")?;
    assert_eq!(bag.get("the"), 3);
    Ok(())
}

#[test]
fn identity_stemmer_only_lowercases() -> Result<()> {
    let bag = "Flying FLIES flew".bag(&StopWordPolicy::None, &IdentityStemmer)?;
    assert_eq!(bag.get("flying"), 1);
    assert_eq!(bag.get("flies"), 1);
    assert_eq!(bag.get("flew"), 1);

    assert_eq!(PorterStemmer::new().stem("FLIES"), "fli");
    Ok(())
}

#[test]
fn sentences_keep_abbreviations_together() {
    let sentences = text::split_sentences("Dr. Jones arrived at 3 p.m. today. She left early.");
    assert_eq!(sentences.len(), 2);
    assert!(sentences[0].starts_with("Dr. Jones"));
    assert_eq!(sentences[1], "She left early.");
}

#[test]
fn normalization_canonicalizes_typography() {
    let normalized = text::normalize("\u{201c}Hello\u{201d}\u{2014}it\u{2019}s   fine\u{2026}");
    assert_eq!(normalized, "\"Hello\"--it's fine...");
}

#[test]
fn tokenizer_follows_treebank_conventions() -> Result<()> {
    let tokens = SimpleTokenizer::shared().tokenize("I can't pay $1,000.50 -- wait...")?;
    let texts: Vec<String> = tokens.map(String::from).collect();
    assert_eq!(
        texts,
        vec!["I", "ca", "n't", "pay", "$", "1,000.50", "--", "wait", "..."]
    );
    Ok(())
}

#[test]
fn pos_tag_pairs_every_token() -> Result<()> {
    let text = "The quick brown fox jumps over the lazy dog.";
    let tags = text::pos_tag(text)?;
    let tokens = text::tokenize(text)?;

    assert_eq!(tags.len(), tokens.len());
    for ((word, _), token) in tags.iter().zip(&tokens) {
        assert_eq!(word, &token.text);
    }
    let fox = tags.iter().find(|(word, _)| word == "fox").map(|(_, tag)| *tag);
    assert_eq!(fox, Some(PosTag::NN));
    assert_eq!(tags.last().map(|(_, tag)| *tag), Some(PosTag::Period));
    Ok(())
}

#[test]
fn pos_tag_keeps_stop_words() -> Result<()> {
    let tags = "It is what it is".pos_tags()?;
    let words: Vec<&str> = tags.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["It", "is", "what", "it", "is"]);
    assert!(tags.iter().all(|(_, tag)| !tag.is_punctuation()));
    Ok(())
}

#[test]
fn keywords_are_ranked_and_bounded() -> Result<()> {
    let pipeline = keyword_pipeline();
    let keywords = pipeline.keywords(ARTICLE, 5)?;

    assert!(!keywords.is_empty());
    assert!(keywords.len() <= 5);
    for pair in keywords.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    let texts: Vec<String> = keywords.iter().map(|k| k.text()).collect();
    assert!(!texts.iter().any(|t| t.contains("coffee")));
    Ok(())
}

#[test]
fn keywords_with_zero_k_are_empty() -> Result<()> {
    assert!(keyword_pipeline().keywords(ARTICLE, 0)?.is_empty());
    assert!(text::keywords(ARTICLE, 0)?.is_empty());
    Ok(())
}

#[test]
fn keyword_ranker_is_pluggable() -> Result<()> {
    struct Fixed;

    impl KeywordRanker for Fixed {
        fn rank(&self, _text: &str, _k: usize) -> Result<Vec<textprep::keyword::Keyword>> {
            Err(TextError::analysis("ranker rejected the input"))
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    let pipeline = TextPipeline::new().with_ranker(Arc::new(Fixed));
    let err = pipeline.keywords("anything", 3).unwrap_err();
    assert!(matches!(err, TextError::Analysis(_)));
    assert!(pipeline.keywords("anything", 0)?.is_empty());
    Ok(())
}

#[test]
fn pipeline_from_config_uses_configured_defaults() -> Result<()> {
    let config = PipelineConfig::from_json(
        r#"{ "policy": "NONE", "stemmer": "identity", "keywords": { "min_frequency": 2 } }"#,
    )?;
    let pipeline = TextPipeline::from_config(&config)?;

    assert_eq!(pipeline.policy(), &StopWordPolicy::None);
    assert_eq!(pipeline.stemmer().name(), "identity");

    let bag = pipeline.bag_default("The cats and the dogs.")?;
    assert_eq!(bag.get("the"), 2);
    assert_eq!(bag.get("cats"), 1);
    assert_eq!(bag.get("."), 1);

    assert!(!pipeline.keywords(ARTICLE, 3)?.is_empty());
    Ok(())
}

#[test]
fn pipeline_from_config_rejects_invalid_keyword_settings() {
    let config = PipelineConfig {
        keywords: KeywordConfig {
            min_frequency: 0,
            ..KeywordConfig::default()
        },
        ..PipelineConfig::default()
    };
    let err = TextPipeline::from_config(&config).unwrap_err();
    assert!(matches!(err, TextError::InvalidConfig(_)));
}

#[test]
fn bare_custom_policy_only_drops_punctuation() -> Result<()> {
    let policy: StopWordPolicy = "custom".parse()?;
    assert_eq!(text::words("The cat, a hat.", &policy)?, vec!["The", "cat", "a", "hat"]);
    Ok(())
}

#[test]
fn global_pipeline_is_shared() {
    let a = TextPipeline::global();
    let b = TextPipeline::global();
    assert!(std::ptr::eq(a, b));
}
