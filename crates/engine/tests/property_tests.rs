use std::path::{Path, PathBuf};

use proptest::prelude::*;
use textractor_engine::config::WordBudget;
use textractor_engine::filter::{ExtensionSet, is_included};
use textractor_engine::output::MemoryOutputSink;
use textractor_engine::rollover::Aggregator;
use textractor_engine::words::{count_words, words};

fn aggregate(sources: &[(String, String)], limit: usize) -> (MemoryOutputSink, Vec<usize>) {
    let mut agg = Aggregator::new(MemoryOutputSink::new(), "out", WordBudget::from_limit(limit));
    for (name, content) in sources {
        agg.push(Path::new(name), content).unwrap();
    }
    let (sink, outputs) = agg.finish();
    (sink, outputs.iter().map(|o| o.words).collect())
}

proptest! {
    #[test]
    fn test_word_count_matches_tokenizer(content in "\\PC{0,400}") {
        prop_assert_eq!(count_words(&content), words(&content).count());
    }

    #[test]
    fn test_words_are_conserved_across_outputs(
        sources in prop::collection::vec(("[a-z]{1,3}\\.(txt|md|rs)", "[a-zA-Z0-9 ,.\\n]{0,200}"), 0..12),
        limit in 0usize..40,
    ) {
        let (sink, counts) = aggregate(&sources, limit);
        let expected: Vec<&str> = sources.iter().flat_map(|(_, c)| words(c)).collect();
        let written: Vec<&str> = sink.iter().flat_map(|(_, text)| words(text)).collect();
        prop_assert_eq!(written, expected);
        prop_assert_eq!(counts.iter().sum::<usize>(), sources.iter().map(|(_, c)| count_words(c)).sum::<usize>());
        if limit > 0 {
            prop_assert!(counts.iter().all(|&c| c <= limit));
        } else {
            prop_assert!(counts.len() <= 1);
        }
    }

    #[test]
    fn test_single_source_needs_ceil_w_over_b_outputs(word_count in 1usize..200, limit in 1usize..30) {
        let content = vec!["w"; word_count].join(" ");
        let (sink, counts) = aggregate(&[("only.txt".to_string(), content)], limit);
        prop_assert_eq!(counts.len(), word_count.div_ceil(limit));
        let names: Vec<PathBuf> = (1..=counts.len()).map(|i| PathBuf::from(format!("out_{i}.txt"))).collect();
        prop_assert_eq!(sink.paths(), names.as_slice());
    }

    #[test]
    fn test_filter_is_case_insensitive(ext in "[a-zA-Z]{1,5}") {
        let upper = ExtensionSet::from(vec![ext.to_uppercase()]);
        let empty = ExtensionSet::new();
        let dotted = format!(".{}", ext.to_lowercase());
        prop_assert!(is_included(&dotted, &empty, &upper));
        prop_assert!(!is_included(&dotted, &upper, &empty));
    }
}
