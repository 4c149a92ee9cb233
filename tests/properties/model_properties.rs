use proptest::prelude::*;

use skillmap::model::{EditError, ops, selection};
use skillmap::test_utils::modules_titled;

fn titles(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("m{i}")).collect()
}

fn document(n: usize) -> skillmap::model::Skillmap {
    let owned = titles(n);
    let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
    modules_titled(&refs)
}

proptest! {
    #[test]
    fn test_single_module_is_never_removed(index in 0usize..10) {
        let doc = document(1);
        prop_assert_eq!(ops::remove_module(&doc, index), Err(EditError::LastModule));
    }

    #[test]
    fn test_reorder_applies_permutation(
        order in (1usize..8).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
    ) {
        let doc = document(order.len());
        let reordered = ops::reorder_modules(&doc, &order).unwrap();
        for (position, &source) in order.iter().enumerate() {
            prop_assert_eq!(&reordered.modules[position], &doc.modules[source]);
        }
    }

    #[test]
    fn test_reorder_rejects_non_permutations(order in prop::collection::vec(0usize..6, 0..6)) {
        let doc = document(5);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assume!(sorted != (0..5).collect::<Vec<_>>());
        let is_invalid_permutation = matches!(
            ops::reorder_modules(&doc, &order),
            Err(EditError::InvalidPermutation { .. })
        );
        prop_assert!(is_invalid_permutation);
    }

    #[test]
    fn test_removal_selection_is_clamped(n in 2usize..10, pick in 0usize..10) {
        let index = pick % n;
        let doc = document(n);
        let next = ops::remove_module(&doc, index).unwrap();
        prop_assert_eq!(next.modules.len(), n - 1);
        prop_assert_eq!(selection::after_removal(index, next.modules.len()), index.min(n - 2));
    }

    #[test]
    fn test_move_lands_at_target(n in 1usize..8, from in 0usize..8, to in 0usize..8) {
        prop_assume!(from < n && to < n);
        let doc = document(n);
        let moved = ops::move_module(&doc, from, to).unwrap();
        prop_assert_eq!(&moved.modules[to], &doc.modules[from]);
        prop_assert_eq!(moved.modules.len(), n);
    }
}
