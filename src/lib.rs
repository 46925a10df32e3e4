//! Policy-Ordered Binary Heap for Rust
//!
//! This crate provides an array-backed binary heap whose ordering is supplied
//! at runtime as a comparison policy, so one structure serves as a max-heap,
//! a min-heap, or a priority queue over any element type.
//!
//! # Features
//!
//! - **Linear-time build**: bottom-up heapify of an initial collection in O(n)
//! - **Incremental updates**: O(log n) `insert` (sift-up) and `extract` (sift-down)
//! - **Injected ordering**: any [`Compare`] policy, including plain closures
//! - **Storage policy**: fixed capacity with explicit overflow errors, or growable storage
//!
//! # Example
//!
//! ```rust
//! use policy_heap::binary::{Capacity, PolicyHeap};
//! use policy_heap::policy::MinOrder;
//!
//! let values = [40, 30, 50, 100, 15];
//! let mut heap = PolicyHeap::build(&values, Capacity::exact_for(values.len()), MinOrder).unwrap();
//!
//! let mut sorted = Vec::new();
//! while !heap.is_empty() {
//!     sorted.push(heap.extract().unwrap());
//! }
//! assert_eq!(sorted, vec![15, 30, 40, 50, 100]);
//! ```

#![forbid(unsafe_code)]

pub mod binary;
pub mod policy;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{heap_sort, Capacity, PolicyHeap};
pub use traits::{Compare, HeapError};
