use day4::{count_in_range, has_adjacent_pair, has_any_adjacent_pair, is_non_increasing, is_valid};
use day4::{AdjacencyRule, RangeError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_exact_pair_implies_any_pair(n in 0u32..1_000_000) {
        if has_adjacent_pair(n) {
            prop_assert!(has_any_adjacent_pair(n));
        }
    }

    #[test]
    fn test_non_increasing_matches_sorted_string(n in 0u32..1_000_000) {
        let s: Vec<char> = n.to_string().chars().collect();
        let mut sorted = s.clone();
        sorted.sort();
        // 0 has no digits to scan but still reads as "0"
        prop_assert_eq!(is_non_increasing(n), s == sorted);
    }

    #[test]
    fn test_single_value_range(s in 100_000u32..1_000_000) {
        let expected = if is_valid(s, AdjacencyRule::ExactPair) { 1 } else { 0 };
        prop_assert_eq!(count_in_range(s, s, AdjacencyRule::ExactPair), Ok(expected));
    }

    #[test]
    fn test_exact_count_never_exceeds_any_count(start in 100_000u32..600_000, len in 0u32..500) {
        let end = start + len;
        let exact = count_in_range(start, end, AdjacencyRule::ExactPair).unwrap();
        let any = count_in_range(start, end, AdjacencyRule::AnyPair).unwrap();
        prop_assert!(exact <= any);
        prop_assert!(any <= len as usize + 1);
    }

    #[test]
    fn test_inverted_range_is_rejected(end in 0u32..1_000_000, gap in 1u32..1000) {
        let start = end + gap;
        prop_assert_eq!(
            count_in_range(start, end, AdjacencyRule::default()),
            Err(RangeError::Inverted { start, end })
        );
    }
}
