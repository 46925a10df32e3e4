//! Common traits for the policy heap
//!
//! This module provides the two seams of the crate:
//!
//! - [`Compare`]: the injected ordering policy deciding whether a candidate
//!   element should displace the element currently holding a tree position
//! - [`HeapError`]: the recoverable failures reported by heap operations
//!
//! Any `Fn(&T, &T) -> bool` closure or function is a [`Compare`] policy, so
//! ad-hoc orderings need no new type.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Insertion into a fixed-capacity heap that is already full
    CapacityExceeded {
        /// The configured upper bound on the number of elements
        capacity: usize,
    },
    /// Extraction from a heap with no elements
    EmptyContainer,
    /// Construction with a capacity smaller than the initial element count
    InvalidCapacity {
        /// The capacity that was requested
        capacity: usize,
        /// The number of initial elements supplied
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::CapacityExceeded { capacity } => {
                write!(f, "heap has no capacity (limit is {capacity} elements)")
            }
            HeapError::EmptyContainer => write!(f, "heap is empty"),
            HeapError::InvalidCapacity { capacity, len } => {
                write!(
                    f,
                    "capacity {capacity} is too small for {len} initial elements"
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Ordering policy for a [`PolicyHeap`](crate::binary::PolicyHeap)
///
/// `should_swap(node, child)` answers "should `child` take the place of
/// `node`?". A max-heap answers `child > node`, a min-heap `child < node`.
///
/// The policy must be a pure strict ordering: deterministic, transitive and
/// irreflexive. The heap does not check this. An inconsistent policy yields
/// an unspecified element order but never a panic or out-of-bounds access.
///
/// # Example
///
/// ```rust
/// use policy_heap::Compare;
/// use policy_heap::policy::MaxOrder;
///
/// assert!(MaxOrder.should_swap(&1, &2));
/// assert!(!MaxOrder.should_swap(&2, &2));
///
/// // Closures are policies too
/// let shorter = |node: &&str, child: &&str| child.len() < node.len();
/// assert!(shorter.should_swap(&"three", &"one"));
/// ```
pub trait Compare<T> {
    /// Returns true if `child` should replace `node` at its position
    fn should_swap(&self, node: &T, child: &T) -> bool;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn should_swap(&self, node: &T, child: &T) -> bool {
        self(node, child)
    }
}
