use std::sync::Arc;
use std::thread;

use textprep::analysis::normalizer::SimpleNormalizer;
use textprep::analysis::sentence::SimpleSentenceSplitter;
use textprep::analysis::token_filter::stem::PorterStemmer;
use textprep::analysis::token_filter::stop::StopWordPolicy;
use textprep::analysis::tokenizer::SimpleTokenizer;
use textprep::error::Result;
use textprep::pipeline::TextPipeline;
use textprep::text;

const THREADS: usize = 8;

const TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    Dr. Smith's dogs were running quickly! \
    \u{201c}Foxes don't sleep,\u{201d} she said\u{2026} The fox ran away.";

#[test]
fn concurrent_calls_return_identical_results() -> Result<()> {
    let expected_bag = text::bag(TEXT, &StopWordPolicy::Default, &PorterStemmer::new())?;
    let expected_tags = text::pos_tag(TEXT)?;

    let results = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| -> Result<_> {
                    let mut runs = Vec::new();
                    for _ in 0..20 {
                        let bag =
                            text::bag(TEXT, &StopWordPolicy::Default, &PorterStemmer::new())?;
                        let tags = text::pos_tag(TEXT)?;
                        runs.push((bag, tags));
                    }
                    Ok(runs)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread panicked"))
            .collect::<Vec<_>>()
    });

    assert_eq!(results.len(), THREADS);
    for runs in results {
        for (bag, tags) in runs? {
            assert_eq!(bag, expected_bag);
            assert_eq!(tags, expected_tags);
        }
    }
    Ok(())
}

#[test]
fn shared_collaborators_are_one_instance_across_threads() {
    let normalizer = SimpleNormalizer::shared();
    let splitter = SimpleSentenceSplitter::shared();
    let tokenizer = SimpleTokenizer::shared();
    let global = TextPipeline::global() as *const TextPipeline as usize;

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                assert!(Arc::ptr_eq(&normalizer, &SimpleNormalizer::shared()));
                assert!(Arc::ptr_eq(&splitter, &SimpleSentenceSplitter::shared()));
                assert!(Arc::ptr_eq(&tokenizer, &SimpleTokenizer::shared()));
                assert_eq!(TextPipeline::global() as *const TextPipeline as usize, global);
            });
        }
    });
}
