//! Experiment Store Tests
//!
//! Behavior of add / remove / list / analyze / compare as seen by callers.

use lab_ledger::experiment::{Category, ExperimentStore};
use lab_ledger::{Error, ValidationError};

fn trial_store() -> ExperimentStore {
    let mut store = ExperimentStore::new();
    store
        .add("Trial A", "01/01/2024", "Chemistry", vec![1.0, 2.0, 3.0])
        .expect("valid experiment");
    store
        .add("Trial B", "02/01/2024", "Chemistry", vec![10.0, 20.0, 30.0])
        .expect("valid experiment");
    store
        .add("Trial C", "15/06/2024", "Biology", vec![4.0, 8.0, 6.0, 2.0])
        .expect("valid experiment");
    store
}

// =============================================================================
// add
// =============================================================================

#[test]
fn test_add_appends_exact_values() {
    let mut store = trial_store();
    let before = store.len();

    let index = store
        .add("Pendulum", "28/02/2023", "Physics", vec![9.81, 9.79, 9.80])
        .unwrap();

    assert_eq!(store.len(), before + 1);
    assert_eq!(index, before);

    let last = store.list().last().unwrap();
    assert_eq!(last.name(), "Pendulum");
    assert_eq!(last.date_text(), "28/02/2023");
    assert_eq!(last.category(), Category::Physics);
    assert_eq!(last.results(), &[9.81, 9.79, 9.80]);
}

#[test]
fn test_add_too_few_results() {
    let mut store = trial_store();

    for results in [vec![], vec![1.0], vec![1.0, 2.0]] {
        let count = results.len();
        let err = store
            .add("Short", "01/01/2024", "Chemistry", results)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::TooFewResults { count: c, minimum: 3 }) if c == count
        ));
    }

    assert_eq!(store.len(), 3);
}

#[test]
fn test_add_bad_date() {
    let mut store = ExperimentStore::new();

    for date in ["2024-01-01", "32/01/2024", "01/13/2024", "1/1/2024", "today"] {
        let err = store
            .add("Trial", date, "Chemistry", vec![1.0, 2.0, 3.0])
            .unwrap_err();
        assert!(
            matches!(err, Error::Validation(ValidationError::InvalidDate { .. })),
            "date {date} should be rejected"
        );
    }

    assert!(store.is_empty());
}

#[test]
fn test_add_bad_category() {
    let mut store = ExperimentStore::new();

    let err = store
        .add("Trial", "01/01/2024", "chemistry", vec![1.0, 2.0, 3.0])
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidCategory { ref input }) if input == "chemistry"
    ));
    assert!(store.is_empty());
}

#[test]
fn test_add_error_messages_name_the_check() {
    let mut store = ExperimentStore::new();

    let results = store
        .add("x", "01/01/2024", "Chemistry", vec![1.0])
        .unwrap_err()
        .to_string();
    let date = store
        .add("x", "01/01/24", "Chemistry", vec![1.0, 2.0, 3.0])
        .unwrap_err()
        .to_string();
    let category = store
        .add("x", "01/01/2024", "Geology", vec![1.0, 2.0, 3.0])
        .unwrap_err()
        .to_string();

    assert!(results.contains("at least 3 results"));
    assert!(date.contains("invalid date"));
    assert!(category.contains("invalid experiment category"));
}

// =============================================================================
// remove
// =============================================================================

#[test]
fn test_remove_shifts_later_positions() {
    let mut store = trial_store();

    let removed = store.remove(1).unwrap();

    assert_eq!(removed.name(), "Trial B");
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0).unwrap().name(), "Trial A");
    assert_eq!(store.get(1).unwrap().name(), "Trial C");
    assert!(store.get(2).is_none());
}

#[test]
fn test_remove_out_of_range_keeps_size() {
    let mut store = trial_store();

    for index in [3, 4, usize::MAX] {
        let err = store.remove(index).unwrap_err();
        assert!(err.is_index());
        assert_eq!(store.len(), 3);
    }
}

#[test]
fn test_remove_until_empty() {
    let mut store = trial_store();
    while !store.is_empty() {
        store.remove(0).unwrap();
    }
    assert!(store.remove(0).is_err());
    assert_eq!(store.list().count(), 0);
}

// =============================================================================
// list
// =============================================================================

#[test]
fn test_list_preserves_insertion_order() {
    let store = trial_store();
    let names: Vec<&str> = store.list().map(|e| e.name()).collect();
    assert_eq!(names, ["Trial A", "Trial B", "Trial C"]);

    let via_into_iter: Vec<&str> = (&store).into_iter().map(|e| e.name()).collect();
    assert_eq!(names, via_into_iter);
}

// =============================================================================
// analyze
// =============================================================================

#[test]
fn test_analyze_trial_a() {
    let store = trial_store();
    let analysis = store.analyze(0).unwrap();

    assert!((analysis.average - 2.0).abs() < f64::EPSILON);
    assert!((analysis.maximum - 3.0).abs() < f64::EPSILON);
    assert!((analysis.minimum - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_analyze_unordered_results() {
    let store = trial_store();
    let analysis = store.analyze(2).unwrap();

    assert!((analysis.average - 5.0).abs() < f64::EPSILON);
    assert!((analysis.maximum - 8.0).abs() < f64::EPSILON);
    assert!((analysis.minimum - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_analyze_missing_is_none() {
    let store = trial_store();
    assert!(store.analyze(3).is_none());
    assert!(ExperimentStore::new().analyze(0).is_none());
}

// =============================================================================
// compare
// =============================================================================

#[test]
fn test_compare_example() {
    let store = trial_store();
    let comparison = store.compare(&[0, 1]).unwrap();

    let names: Vec<&str> = comparison.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Trial A", "Trial B"]);

    let best = comparison.best.unwrap();
    let worst = comparison.worst.unwrap();
    assert_eq!(best.name, "Trial B");
    assert_eq!(best.index, 1);
    assert!((best.average - 20.0).abs() < f64::EPSILON);
    assert_eq!(worst.name, "Trial A");
    assert_eq!(worst.index, 0);
    assert!((worst.average - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_compare_same_index_twice() {
    let store = trial_store();
    let comparison = store.compare(&[2, 2]).unwrap();

    assert_eq!(comparison.entries.len(), 2);
    assert_eq!(comparison.best, comparison.worst);
    assert_eq!(comparison.best.unwrap().name, "Trial C");
}

#[test]
fn test_compare_preserves_request_order() {
    let store = trial_store();
    let comparison = store.compare(&[2, 0, 1]).unwrap();

    let indices: Vec<usize> = comparison.entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, [2, 0, 1]);
}

#[test]
fn test_compare_invalid_index_no_partial_result() {
    let store = trial_store();
    let err = store.compare(&[0, 1, 3]).unwrap_err();

    let Error::Validation(ValidationError::InvalidIndices { indices, len }) = err else {
        panic!("expected invalid indices, got {err:?}");
    };
    assert_eq!(indices, [0, 1, 3]);
    assert_eq!(len, 3);
}

#[test]
fn test_compare_empty_reports_no_best_or_worst() {
    let store = trial_store();
    let comparison = store.compare(&[]).unwrap();

    assert!(comparison.is_empty());
    assert!(comparison.best.is_none());
    assert!(comparison.worst.is_none());
}

#[test]
fn test_compare_on_empty_store_fails() {
    let store = ExperimentStore::new();
    assert!(store.compare(&[0]).unwrap_err().is_validation());
}
