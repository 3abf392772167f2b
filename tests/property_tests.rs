//! Property-based tests for organism name normalization and resolution
//!
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use soma_census::collection::SomaNode;
use soma_census::experiment::{get_experiment_default, CENSUS_DATA};
use soma_census::naming::experiment_name;
use soma_census::Error;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Organism-like names: words separated by runs of spaces
fn arb_organism() -> impl Strategy<Value = (Vec<String>, Vec<usize>)> {
    proptest::collection::vec("[A-Za-z]{1,12}", 1..4).prop_flat_map(|words| {
        let gaps = proptest::collection::vec(1usize..5, words.len());
        (Just(words), gaps)
    })
}

fn join_with_gaps(words: &[String], gaps: &[usize]) -> String {
    let mut name = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            name.push_str(&" ".repeat(gaps[i]));
        }
        name.push_str(word);
    }
    name
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: normalization is idempotent
    #[test]
    fn prop_experiment_name_idempotent(s in any::<String>()) {
        let once = experiment_name(&s);
        prop_assert_eq!(experiment_name(&once), once);
    }

    /// Property: without spaces, normalization is plain lowercasing
    #[test]
    fn prop_no_spaces_is_lowercase(s in "[^ ]*") {
        prop_assert_eq!(experiment_name(&s), s.to_lowercase());
    }

    /// Property: the canonical key never contains a space
    #[test]
    fn prop_no_spaces_in_key(s in any::<String>()) {
        prop_assert!(!experiment_name(&s).contains(' '));
    }

    /// Property: space runs of any width map to the same key
    #[test]
    fn prop_gap_width_irrelevant((words, gaps) in arb_organism()) {
        let spaced = join_with_gaps(&words, &gaps);
        let canonical = words.join("_").to_lowercase();
        prop_assert_eq!(experiment_name(&spaced), canonical);
    }

    /// Property: every spelling of a stored organism resolves to the same node
    #[test]
    fn prop_resolution_spelling_insensitive((words, gaps) in arb_organism()) {
        let key = words.join("_").to_lowercase();
        let census = SomaNode::collection().with_member(
            CENSUS_DATA,
            SomaNode::collection().with_member(key.clone(), SomaNode::experiment()),
        );

        let spaced = join_with_gaps(&words, &gaps);
        let upper = spaced.to_uppercase();

        let a = get_experiment_default(&census, &spaced).unwrap();
        let b = get_experiment_default(&census, &key).unwrap();
        let c = get_experiment_default(&census, &upper).unwrap();
        prop_assert!(std::ptr::eq(a, b));
        prop_assert!(std::ptr::eq(b, c));
    }

    /// Property: NotFound always quotes the caller's spelling
    #[test]
    fn prop_not_found_quotes_input(organism in "[A-Za-z ]{1,24}") {
        let census = SomaNode::collection().with_member(CENSUS_DATA, SomaNode::collection());
        let err = get_experiment_default(&census, &organism).unwrap_err();
        prop_assert!(
            matches!(err, Error::NotFound { .. }),
            "expected NotFound, got {:?}",
            err
        );
        prop_assert!(err.to_string().contains(&organism));
    }
}
