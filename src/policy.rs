//! Reference ordering policies
//!
//! Ready-made [`Compare`] implementations for the common cases:
//!
//! | Policy         | Root holds                  |
//! |----------------|-----------------------------|
//! | [`MaxOrder`]   | the greatest element        |
//! | [`MinOrder`]   | the smallest element        |
//! | [`ByKey`]      | the element with greatest key |
//! | [`ByKeyRev`]   | the element with smallest key |
//!
//! # Example
//!
//! ```rust
//! use policy_heap::binary::{Capacity, PolicyHeap};
//! use policy_heap::policy::ByKey;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Job { name: &'static str, weight: u32 }
//!
//! let jobs = [Job { name: "a", weight: 3 }, Job { name: "b", weight: 7 }];
//! let by_weight = ByKey(|j: &Job| j.weight);
//! let mut heap = PolicyHeap::build(&jobs, Capacity::exact_for(2), by_weight).unwrap();
//! assert_eq!(heap.extract().unwrap().name, "b");
//! ```

use crate::traits::Compare;

/// Max-heap ordering over `T: Ord`: a child displaces its parent if greater
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord> Compare<T> for MaxOrder {
    #[inline]
    fn should_swap(&self, node: &T, child: &T) -> bool {
        child > node
    }
}

/// Min-heap ordering over `T: Ord`: a child displaces its parent if smaller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord> Compare<T> for MinOrder {
    #[inline]
    fn should_swap(&self, node: &T, child: &T) -> bool {
        child < node
    }
}

/// Max ordering on a key projected out of each element
///
/// The projection is called twice per comparison, so it should be cheap
/// (a field access or a copy of a small value).
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K: Ord, F: Fn(&T) -> K> Compare<T> for ByKey<F> {
    #[inline]
    fn should_swap(&self, node: &T, child: &T) -> bool {
        (self.0)(child) > (self.0)(node)
    }
}

/// Min ordering on a key projected out of each element
#[derive(Debug, Clone, Copy)]
pub struct ByKeyRev<F>(pub F);

impl<T, K: Ord, F: Fn(&T) -> K> Compare<T> for ByKeyRev<F> {
    #[inline]
    fn should_swap(&self, node: &T, child: &T) -> bool {
        (self.0)(child) < (self.0)(node)
    }
}
