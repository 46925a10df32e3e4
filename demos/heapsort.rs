//! Heap sort and record ordering demo
//!
//! Uses only `build`, `insert`, `extract` and `is_empty`.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example heapsort
//!
//! # Show every sift decision
//! RUST_LOG=trace cargo run --example heapsort
//! ```

use policy_heap::policy::{ByKey, MinOrder};
use policy_heap::{Capacity, HeapError, PolicyHeap};

/// An example record ordered by its `key` field
#[derive(Debug, Clone)]
struct Item {
    key: u32,
    label: &'static str,
}

impl Item {
    fn new(key: u32, label: &'static str) -> Self {
        Self { key, label }
    }
}

fn sort_numbers() -> Result<Vec<i32>, HeapError> {
    let values = [40, 30, 50, 100, 15];
    let capacity = Capacity::exact_for(values.len());
    let mut heap = PolicyHeap::build(&values, capacity, MinOrder)?;

    let mut sorted = Vec::with_capacity(values.len());
    while !heap.is_empty() {
        sorted.push(heap.extract()?);
    }
    Ok(sorted)
}

fn drain_items() -> Result<(), HeapError> {
    let items = [
        Item::new(8, "eight"),
        Item::new(22, "twenty-two"),
        Item::new(3, "three"),
        Item::new(14, "fourteen"),
        Item::new(22, "another twenty-two"),
    ];

    // One spare slot for the late arrival below
    let mut heap = PolicyHeap::build(
        &items,
        Capacity::Fixed(items.len() + 1),
        ByKey(|item: &Item| item.key),
    )?;
    heap.insert(Item::new(17, "seventeen"))?;

    if let Err(err) = heap.insert(Item::new(99, "overflow")) {
        println!("rejected: {err}");
    }

    while !heap.is_empty() {
        let item = heap.extract()?;
        println!("{:>3} {}", item.key, item.label);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("{:?}", sort_numbers()?);
    drain_items()?;

    let mut empty: PolicyHeap<i32, MinOrder> = PolicyHeap::min_heap();
    match empty.extract() {
        Ok(value) => println!("unexpected value {value}"),
        Err(err) => println!("done: {err}"),
    }
    Ok(())
}
