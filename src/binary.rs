//! Policy-ordered binary heap
//!
//! An array-backed binary heap whose ordering is decided at runtime by an
//! injected [`Compare`] policy. The same structure serves as a max-heap, a
//! min-heap, or a priority queue over records ordered by any field.
//!
//! The tree is stored in level order: the root sits at index 0 and the node
//! at index `i` has children at `2i + 1` and `2i + 2` and its parent at
//! `(i - 1) / 2`.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `build`    | O(n)       |
//! | `insert`   | O(log n)   |
//! | `extract`  | O(log n)   |
//! | `peek`     | O(1)       |
//! | `is_empty` | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use policy_heap::binary::{Capacity, PolicyHeap};
//! use policy_heap::policy::MaxOrder;
//!
//! let values = [10, 20, 15, 12, 40, 25, 18];
//! let mut heap = PolicyHeap::build(&values, Capacity::Fixed(8), MaxOrder).unwrap();
//!
//! heap.insert(30).unwrap();
//! assert!(heap.insert(99).is_err()); // full
//!
//! assert_eq!(heap.extract(), Ok(40));
//! assert_eq!(heap.extract(), Ok(30));
//! assert_eq!(heap.len(), 6);
//! ```

use log::{debug, trace};

use crate::traits::{Compare, HeapError};

/// Upper bound on slots reserved up front; larger capacities grow on demand
const MAX_PREALLOCATION: usize = 1 << 16;

/// Storage policy of a [`PolicyHeap`]
///
/// - `Fixed(n)`: at most `n` elements; [`PolicyHeap::insert`] fails with
///   [`HeapError::CapacityExceeded`] once the heap holds `n` elements.
/// - `Growable(hint)`: `hint` slots are reserved up front and storage grows
///   on demand, so insertion never fails.
///
/// Up-front reservation is capped, so `Fixed(usize::MAX)` is a valid way to
/// ask for an effectively unbounded heap.
///
/// In both cases the value must be at least the number of initial elements
/// passed to [`PolicyHeap::build`], otherwise construction fails with
/// [`HeapError::InvalidCapacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// Hard upper bound on the number of elements
    Fixed(usize),
    /// Initial reservation for storage that grows without bound
    Growable(usize),
}

impl Capacity {
    /// A fixed capacity holding exactly `len` elements
    pub fn exact_for(len: usize) -> Self {
        Capacity::Fixed(len)
    }

    /// A growable capacity reserving room for `len` elements
    pub fn growable_for(len: usize) -> Self {
        Capacity::Growable(len)
    }

    /// The number of slots reserved at construction
    pub fn reserved(&self) -> usize {
        match *self {
            Capacity::Fixed(n) | Capacity::Growable(n) => n,
        }
    }

    /// The hard upper bound, if any
    pub fn limit(&self) -> Option<usize> {
        match *self {
            Capacity::Fixed(n) => Some(n),
            Capacity::Growable(_) => None,
        }
    }
}

/// A binary heap ordered by a comparison policy
///
/// The element at the root is always the one the policy prefers over every
/// other element: no child ever `should_swap` with its parent.
///
/// Elements move in through [`insert`](Self::insert) and move out by value
/// through [`extract`](Self::extract); the heap never hands out references
/// that outlive a mutating call.
#[derive(Debug, Clone)]
pub struct PolicyHeap<T, C> {
    /// Level-order tree; every slot is a live element
    data: Vec<T>,
    capacity: Capacity,
    compare: C,
}

impl<T, C: Compare<T>> PolicyHeap<T, C> {
    /// Creates an empty heap with growable storage
    pub fn new(compare: C) -> Self {
        Self {
            data: Vec::new(),
            capacity: Capacity::Growable(0),
            compare,
        }
    }

    /// Builds a heap from a copy of `elements`
    ///
    /// The caller's slice is only read. The heap property is established
    /// bottom-up in O(n).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is smaller than
    /// `elements.len()`.
    pub fn build(elements: &[T], capacity: Capacity, compare: C) -> Result<Self, HeapError>
    where
        T: Clone,
    {
        Self::check_capacity(capacity, elements.len())?;
        let mut data = Vec::new();
        Self::preallocate(&mut data, capacity);
        data.extend_from_slice(elements);
        Ok(Self::heapify(data, capacity, compare))
    }

    /// Builds a heap taking ownership of `elements`
    ///
    /// Same contract as [`build`](Self::build) without cloning.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::InvalidCapacity`] if `capacity` is smaller than
    /// `elements.len()`.
    pub fn from_vec(
        mut elements: Vec<T>,
        capacity: Capacity,
        compare: C,
    ) -> Result<Self, HeapError> {
        Self::check_capacity(capacity, elements.len())?;
        Self::preallocate(&mut elements, capacity);
        Ok(Self::heapify(elements, capacity, compare))
    }

    /// Reserves room for the configured capacity, up to `MAX_PREALLOCATION`
    ///
    /// The capacity is a logical limit; a failed reservation only means the
    /// storage grows later.
    fn preallocate(data: &mut Vec<T>, capacity: Capacity) {
        let wanted = capacity.reserved().min(MAX_PREALLOCATION);
        let additional = wanted.saturating_sub(data.len());
        if data.try_reserve(additional).is_err() {
            debug!("could not preallocate {additional} slots, growing on demand");
        }
    }

    fn check_capacity(capacity: Capacity, len: usize) -> Result<(), HeapError> {
        let requested = capacity.reserved();
        if requested < len {
            debug!("rejecting heap build: capacity {requested} < {len} elements");
            return Err(HeapError::InvalidCapacity {
                capacity: requested,
                len,
            });
        }
        Ok(())
    }

    fn heapify(data: Vec<T>, capacity: Capacity, compare: C) -> Self {
        let mut heap = Self {
            data,
            capacity,
            compare,
        };

        // Leaves are trivially heaps; sift every internal node, deepest first
        let len = heap.data.len();
        for index in (0..len / 2).rev() {
            heap.sift_down(index);
        }

        trace!("built heap of {len} elements ({capacity:?})");
        heap
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the storage policy the heap was built with
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns the root element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element, sifting it up to its place
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::CapacityExceeded`] if the heap has a fixed
    /// capacity and is already full. The heap is left unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, item: T) -> Result<(), HeapError> {
        if let Some(limit) = self.capacity.limit() {
            if self.data.len() >= limit {
                debug!("rejecting insert: heap is full at {limit} elements");
                return Err(HeapError::CapacityExceeded { capacity: limit });
            }
        }

        self.data.push(item);
        let settled = self.sift_up(self.data.len() - 1);
        trace!("inserted element at index {settled}, len {}", self.data.len());
        Ok(())
    }

    /// Removes and returns the root element
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            trace!("extract on empty heap");
            return Err(HeapError::EmptyContainer);
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let root = self.data.pop().ok_or(HeapError::EmptyContainer)?;

        // A heap of zero or one elements is already valid
        let settled = if self.data.len() > 1 {
            self.sift_down(0)
        } else {
            0
        };
        trace!(
            "extracted root, last element settled at index {settled}, len {}",
            self.data.len()
        );

        Ok(root)
    }

    /// Drains the heap into a vector in extraction order
    ///
    /// For a max policy the result is descending, for a min policy ascending.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.extract() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks that no child should displace its parent
    ///
    /// This is O(n) and meant for tests and debugging.
    pub fn verify_heap_property(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.compare.should_swap(&self.data[parent], &self.data[child])
        })
    }

    /// Move element at index up to maintain heap property, returning its final index
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare.should_swap(&self.data[parent], &self.data[index]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property, returning its final index
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // The right child wins only if strictly preferred over the left
            let preferred = if right < len
                && self.compare.should_swap(&self.data[left], &self.data[right])
            {
                right
            } else {
                left
            };

            if self.compare.should_swap(&self.data[index], &self.data[preferred]) {
                self.data.swap(index, preferred);
                index = preferred;
            } else {
                break;
            }
        }
        index
    }
}

impl<T: Ord> PolicyHeap<T, crate::policy::MaxOrder> {
    /// Creates an empty growable max-heap over `T: Ord`
    pub fn max_heap() -> Self {
        Self::new(crate::policy::MaxOrder)
    }
}

impl<T: Ord> PolicyHeap<T, crate::policy::MinOrder> {
    /// Creates an empty growable min-heap over `T: Ord`
    pub fn min_heap() -> Self {
        Self::new(crate::policy::MinOrder)
    }
}

/// Sorts a copy of `elements` in the extraction order of `compare`
///
/// Builds a heap in O(n) and drains it with repeated extraction, O(n log n)
/// overall. A [`MaxOrder`](crate::policy::MaxOrder) policy yields descending
/// output, [`MinOrder`](crate::policy::MinOrder) ascending.
///
/// # Example
///
/// ```rust
/// use policy_heap::binary::heap_sort;
/// use policy_heap::policy::MinOrder;
///
/// assert_eq!(heap_sort(&[40, 30, 50, 100, 15], MinOrder), vec![15, 30, 40, 50, 100]);
/// ```
pub fn heap_sort<T: Clone, C: Compare<T>>(elements: &[T], compare: C) -> Vec<T> {
    let capacity = Capacity::growable_for(elements.len());
    PolicyHeap::heapify(elements.to_vec(), capacity, compare).into_sorted_vec()
}
