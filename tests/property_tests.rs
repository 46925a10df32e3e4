//! Property-based tests using proptest
//!
//! These tests generate random element sets and operation sequences and
//! verify that the heap invariants are always maintained.

use policy_heap::policy::{MaxOrder, MinOrder};
use policy_heap::{Capacity, Compare, HeapError, PolicyHeap};
use proptest::prelude::*;

/// Test that build followed by a full drain yields the policy's sorted order
fn test_drain_order<C: Compare<i32>>(
    values: Vec<i32>,
    compare: C,
    descending: bool,
) -> Result<(), TestCaseError> {
    let capacity = Capacity::exact_for(values.len());
    let mut heap = PolicyHeap::build(&values, capacity, compare).unwrap();
    prop_assert!(heap.verify_heap_property());

    let mut drained = Vec::with_capacity(values.len());
    while let Ok(value) = heap.extract() {
        prop_assert!(heap.verify_heap_property());
        drained.push(value);
    }

    let mut expected = values;
    expected.sort();
    if descending {
        expected.reverse();
    }
    prop_assert_eq!(drained, expected);

    Ok(())
}

/// Test that random insert/extract sequences keep size and root correct
fn test_mixed_operations<C: Compare<i32>>(
    ops: Vec<(bool, i32)>,
    compare: C,
    limit: usize,
) -> Result<(), TestCaseError> {
    let empty: &[i32] = &[];
    let mut heap = PolicyHeap::build(empty, Capacity::Fixed(limit), compare).unwrap();
    let mut model: Vec<i32> = Vec::new();

    for (should_extract, value) in ops {
        if should_extract {
            match heap.extract() {
                Ok(root) => {
                    let pos = model.iter().position(|&v| v == root);
                    prop_assert!(pos.is_some(), "extracted {} was never inserted", root);
                    model.swap_remove(pos.unwrap());
                }
                Err(err) => {
                    prop_assert_eq!(err, HeapError::EmptyContainer);
                    prop_assert!(model.is_empty());
                }
            }
        } else {
            match heap.insert(value) {
                Ok(()) => model.push(value),
                Err(err) => {
                    prop_assert_eq!(err, HeapError::CapacityExceeded { capacity: limit });
                    prop_assert_eq!(model.len(), limit);
                }
            }
        }

        prop_assert!(heap.verify_heap_property());
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.is_empty(), model.is_empty());
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_max_drain_is_descending(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_drain_order(values, MaxOrder, true)?;
    }

    #[test]
    fn test_min_drain_is_ascending(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_drain_order(values, MinOrder, false)?;
    }

    #[test]
    fn test_max_mixed_operations(
        ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200),
        limit in 0usize..40
    ) {
        test_mixed_operations(ops, MaxOrder, limit)?;
    }

    #[test]
    fn test_min_mixed_operations(
        ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200),
        limit in 0usize..40
    ) {
        test_mixed_operations(ops, MinOrder, limit)?;
    }

    #[test]
    fn test_build_equals_repeated_insert(
        values in prop::collection::vec(-1000i32..1000, 0..150)
    ) {
        let capacity = Capacity::Growable(values.len());
        let built = PolicyHeap::build(&values, capacity, MinOrder).unwrap();

        let mut inserted = PolicyHeap::min_heap();
        for &value in &values {
            inserted.insert(value).unwrap();
        }

        prop_assert_eq!(built.into_sorted_vec(), inserted.into_sorted_vec());
    }

    #[test]
    fn test_build_leaves_input_untouched(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let snapshot = values.clone();
        let capacity = Capacity::exact_for(values.len());
        let heap = PolicyHeap::build(&values, capacity, MaxOrder).unwrap();

        prop_assert_eq!(&values, &snapshot);
        prop_assert_eq!(heap.peek(), snapshot.iter().max());
    }

    #[test]
    fn test_huge_capacity_builds(
        values in prop::collection::vec(any::<i32>(), 0..50),
        capacity in (usize::MAX / 2)..=usize::MAX
    ) {
        let fixed = PolicyHeap::build(&values, Capacity::Fixed(capacity), MaxOrder);
        prop_assert!(fixed.is_ok());

        let growable = PolicyHeap::from_vec(values.clone(), Capacity::Growable(capacity), MinOrder);
        prop_assert_eq!(growable.map(|heap| heap.len()).ok(), Some(values.len()));
    }

    #[test]
    fn test_undersized_capacity_rejected(
        values in prop::collection::vec(any::<i32>(), 1..50),
        shortfall in 1usize..50
    ) {
        let capacity = values.len().saturating_sub(shortfall);
        let result = PolicyHeap::build(&values, Capacity::Fixed(capacity), MaxOrder);

        prop_assert_eq!(
            result.err(),
            Some(HeapError::InvalidCapacity { capacity, len: values.len() })
        );
    }
}
