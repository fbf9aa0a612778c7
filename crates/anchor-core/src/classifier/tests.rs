use super::*;
use crate::LexiconEntry;
use std::sync::Arc;

fn classify(message: &str) -> Category {
    Classifier::default().classify(message)
}

// ============================================================================
// Fallback tests
// ============================================================================

#[test]
fn test_empty_input_is_neutral() {
    assert_eq!(classify(""), Category::Neutral);
    assert_eq!(classify("   \t\n"), Category::Neutral);
}

#[test]
fn test_punctuation_only_is_neutral() {
    assert_eq!(classify("?!..."), Category::Neutral);
    assert_eq!(classify("-- ,, ;;"), Category::Neutral);
}

#[test]
fn test_no_keywords_is_neutral() {
    assert_eq!(classify("I walked to the store this morning"), Category::Neutral);
}

// ============================================================================
// Plain keyword tests
// ============================================================================

#[test]
fn test_explicit_sad() {
    let result = Classifier::default().classify_full("I am sad");
    assert_eq!(result.category, Category::Sad);
    // keyword weight plus the explicit boost
    assert_eq!(result.scores.get(Category::Sad), 3);
}

#[test]
fn test_happy_with_punctuation() {
    assert_eq!(classify("I'm feeling great!"), Category::Happy);
}

#[test]
fn test_each_category_detected() {
    assert_eq!(classify("I feel so nervous"), Category::Anxious);
    assert_eq!(classify("Really thankful for my friends"), Category::Grateful);
    assert_eq!(classify("Such a wonderful afternoon"), Category::Happy);
    assert_eq!(classify("Everything feels bleak"), Category::Sad);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(classify("I AM SO EXCITED"), Category::Happy);
}

// ============================================================================
// Negation tests
// ============================================================================

#[test]
fn test_negated_happy_reads_as_sad() {
    assert_eq!(classify("I am not happy"), Category::Sad);
    assert_eq!(classify("I am not quite happy today"), Category::Sad);
}

#[test]
fn test_negated_amazing_reads_as_sad() {
    let result = Classifier::default().classify_full("This is not amazing at all");
    assert_eq!(result.category, Category::Sad);
    assert_eq!(result.scores.get(Category::Happy), -2);
    assert_eq!(result.scores.get(Category::Sad), 1);
    assert!(result
        .matches
        .iter()
        .any(|m| m.keyword == "amazing" && m.negated));
}

#[test]
fn test_negated_sad_is_neutral() {
    assert_eq!(classify("I'm not feeling sad today"), Category::Neutral);
}

#[test]
fn test_other_emotion_beats_negated_happy() {
    // the negated happy keyword gives sad 1, tying with the named emotion
    assert_eq!(classify("I'm worried and not happy"), Category::Anxious);
    assert_eq!(classify("I'm grateful but not happy"), Category::Grateful);
}

#[test]
fn test_negated_anxious_is_no_op() {
    let result = Classifier::default().classify_full("I'm not worried");
    assert_eq!(result.category, Category::Neutral);
    assert_eq!(result.scores.get(Category::Anxious), 0);
}

#[test]
fn test_negation_outside_window_falls_back_to_mild_sadness() {
    // "good" sits five tokens after "not", so it scores for happy, but the
    // message still carries a negation and nothing else scored
    let result = Classifier::default().classify_full("not that i feel it but today is good");
    assert_eq!(result.category, Category::Sad);
    assert_eq!(result.scores.get(Category::Happy), 0);
    assert_eq!(result.scores.get(Category::Sad), 1);
}

#[test]
fn test_negation_is_exact_token_match() {
    // "know" contains "no" but is not a negation word
    assert_eq!(classify("I know this is good"), Category::Happy);
}

#[test]
fn test_typographic_apostrophe_negation() {
    assert_eq!(classify("It isn\u{2019}t good"), Category::Sad);
}

#[test]
fn test_sad_boost_uses_shorter_window() {
    // "not" is three tokens back: it negates the keyword pass but falls
    // outside the two-token window of the explicit boost
    let result = Classifier::default().classify_full("not really feeling sad");
    assert_eq!(result.category, Category::Sad);
    assert_eq!(result.scores.get(Category::Sad), 2);
}

#[test]
fn test_custom_windows() {
    let classifier = Classifier::default()
        .with_negation_window(1)
        .with_sad_boost_window(1);
    // "not" is two tokens before "happy", outside a one-token window
    let result = classifier.classify_full("not very happy");
    assert!(result.matches.iter().all(|m| !m.negated));
}

// ============================================================================
// Resolution tests
// ============================================================================

#[test]
fn test_highest_score_wins() {
    assert_eq!(
        classify("I'm anxious and worried and nervous but grateful"),
        Category::Anxious
    );
    assert_eq!(
        classify("thankful and grateful, so blessed, though a bit nervous"),
        Category::Grateful
    );
}

#[test]
fn test_tie_break_order() {
    assert_eq!(classify("I feel anxious and grateful"), Category::Anxious);
    assert_eq!(classify("great but stressed"), Category::Anxious);
    // "unhappy" also contains "happy"
    let result = Classifier::default().classify_full("I am unhappy");
    assert_eq!(result.scores.get(Category::Happy), 1);
    assert_eq!(result.scores.get(Category::Sad), 1);
    assert_eq!(result.category, Category::Sad);
}

#[test]
fn test_scores_saturate_instead_of_overflowing() {
    let mut scores = Scores::default();
    scores.add(Category::Grateful, i32::MAX);
    scores.add(Category::Grateful, i32::MAX);
    assert_eq!(scores.get(Category::Grateful), i32::MAX);
    scores.add(Category::Sad, i32::MIN);
    scores.add(Category::Sad, -NEGATED_HAPPY_PENALTY);
    assert_eq!(scores.get(Category::Sad), i32::MIN);
    assert_eq!(scores.winner(), Some(Category::Grateful));
}

#[test]
fn test_max_weight_lexicon_classifies() {
    let max = *crate::lexicon::WEIGHT_RANGE.end();
    let lexicon = Lexicon::new(
        vec![
            LexiconEntry::new(Category::Happy, &["a", "b"]).with_weight(max),
            LexiconEntry::new(Category::Sad, &["c"]).with_weight(max),
        ],
        vec!["not".to_string()],
    )
    .unwrap();
    let result = Classifier::new(lexicon).classify_full("a b c");
    assert_eq!(result.scores.get(Category::Happy), 2 * max);
    assert_eq!(result.category, Category::Happy);
}

#[test]
fn test_sad_boost_is_substring_match() {
    let result = Classifier::default().classify_full("joining the crusade");
    assert_eq!(result.category, Category::Sad);
    assert_eq!(result.scores.get(Category::Sad), 3);
}

#[test]
fn test_scores_winner_ignores_non_positive() {
    let mut scores = Scores::default();
    assert_eq!(scores.winner(), None);
    scores.add(Category::Happy, -2);
    assert_eq!(scores.winner(), None);
    scores.add(Category::Grateful, 1);
    assert_eq!(scores.winner(), Some(Category::Grateful));
}

// ============================================================================
// Lexicon swap tests
// ============================================================================

#[test]
fn test_weighted_lexicon() {
    let lexicon = Lexicon::new(
        vec![
            LexiconEntry::new(Category::Happy, &["happy"]),
            LexiconEntry::new(Category::Grateful, &["grateful"]).with_weight(3),
        ],
        vec!["not".to_string()],
    )
    .unwrap();
    let classifier = Classifier::new(lexicon);
    let result = classifier.classify_full("happy and grateful");
    assert_eq!(result.category, Category::Grateful);
    assert_eq!(result.scores.get(Category::Grateful), 3);
}

#[test]
fn test_overlapping_keyword_scores_both() {
    let lexicon = Lexicon::new(
        vec![
            LexiconEntry::new(Category::Happy, &["blessed"]),
            LexiconEntry::new(Category::Grateful, &["blessed", "thankful"]),
        ],
        vec!["not".to_string()],
    )
    .unwrap();
    let classifier = Classifier::new(lexicon);
    let result = classifier.classify_full("so blessed and thankful");
    assert_eq!(result.scores.get(Category::Happy), 1);
    assert_eq!(result.scores.get(Category::Grateful), 2);
    assert_eq!(result.category, Category::Grateful);
}

#[test]
fn test_custom_negation_set() {
    let lexicon = Lexicon::new(
        vec![LexiconEntry::new(Category::Happy, &["happy"])],
        vec!["hardly".to_string()],
    )
    .unwrap();
    let classifier = Classifier::new(lexicon);
    assert_eq!(classifier.classify("hardly happy"), Category::Sad);
    assert_eq!(classifier.classify("not happy"), Category::Happy);
}

// ============================================================================
// Concurrency tests
// ============================================================================

#[test]
fn test_shared_across_threads() {
    let classifier = Arc::new(Classifier::default());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let classifier = Arc::clone(&classifier);
            std::thread::spawn(move || classifier.classify("I am not happy"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Category::Sad);
    }
}
