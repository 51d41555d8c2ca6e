use aligndiff_analyze::{Classifier, alignment_score};
use aligndiff_core::{Alphabet, ClassifyConfig};

fn seqs(items: &[&str]) -> Vec<Vec<u8>> {
    items.iter().map(|s| s.as_bytes().to_vec()).collect()
}

#[test]
fn test_classify_config_builder() {
    let config = ClassifyConfig::builder()
        .threshold(0.75)
        .alphabet(Alphabet::from_range(0, 255))
        .empty_files_identical(false)
        .parallel(false)
        .build()
        .unwrap();

    assert_eq!(config.threshold, 0.75);
    assert_eq!(config.alphabet.len(), 256);
    assert!(!config.empty_files_identical);
    assert!(!config.parallel);

    // Defaults
    let config = ClassifyConfig::new(0.5);
    assert_eq!(config.alphabet, Alphabet::printable_ascii());
    assert!(config.empty_files_identical);
    assert!(config.parallel);
}

#[test]
fn test_score_bounded_by_shorter_input() {
    let alphabet = Alphabet::printable_ascii();
    let text = b"some longer haystack text";
    let pattern = b"stack";
    let score = alignment_score(text, pattern, &alphabet);
    assert!(score <= pattern.len());
    assert_eq!(score, pattern.len()); // exact substring
}

#[test]
fn test_identity_property() {
    let alphabet = Alphabet::printable_ascii();
    for input in ["a", "ab", "hello, world!", "   ", "~~~"] {
        let bytes = input.as_bytes();
        assert_eq!(alignment_score(bytes, bytes, &alphabet), bytes.len());
    }
}

#[test]
fn test_monotonicity_under_text_extension() {
    let alphabet = Alphabet::printable_ascii();
    let pattern = b"pattern";
    let mut text = b"pat".to_vec();
    let mut previous = 0;
    for suffix in [b't', b'e', b'r', b'n', b'!', b'?'] {
        text.push(suffix);
        if text.len() < pattern.len() {
            continue;
        }
        let score = alignment_score(&text, pattern, &alphabet);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_cross_product_classification() {
    // Mixed bag: one identical match, one similar, one stray.
    let first = seqs(&["hello world", "my notes", "untouched"]);
    let second = seqs(&["hello w0rld", "my notes"]);

    let result = Classifier::new(0.5).classify(&first, &second);

    let identical: Vec<(usize, usize)> =
        result.identical.iter().map(|p| (p.first, p.second)).collect();
    assert_eq!(identical, vec![(1, 1)]);

    assert!(
        result
            .similar
            .iter()
            .any(|p| p.first == 0 && p.second == 0 && p.similarity < 100.0)
    );

    // "untouched" and "hello world" never match identically.
    assert_eq!(result.unique_first(first.len()), vec![0, 2]);
    assert_eq!(result.unique_second(second.len()), vec![0]);
}

#[test]
fn test_threshold_consistency() {
    let threshold = 0.6;
    let first = seqs(&["abcdefghij", "abcdeXXXXX", "XXXXXXXXXX"]);
    let second = seqs(&["abcdefghij"]);

    let result = Classifier::new(threshold).classify(&first, &second);

    for pair in &result.identical {
        assert_eq!(pair.similarity, 100.0);
    }
    for pair in &result.similar {
        assert!(pair.similarity >= threshold * 100.0);
        assert!(pair.similarity < 100.0);
    }

    // 5 of 10 positions agree: below the 0.6 threshold.
    assert!(
        !result
            .similar
            .iter()
            .any(|p| p.first == 1 && p.second == 0)
    );
    assert_eq!(result.identical.len(), 1);
}

#[test]
fn test_length_mismatch_never_identical() {
    // A perfect sub-match still divides by the longer length.
    let result = Classifier::new(0.4).classify(&seqs(&["xxabcxx"]), &seqs(&["abc"]));
    assert!(result.identical.is_empty());
    assert_eq!(result.similar.len(), 1);
    assert!((result.similar[0].similarity - 300.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_empty_collections() {
    let result = Classifier::new(0.5).classify(&[], &[]);
    assert!(result.identical.is_empty());
    assert!(result.similar.is_empty());
    assert!(result.unique_first(0).is_empty());
}
