//! Lock-based concurrent ordered collections over a sorted singly-linked
//! list with sentinel bounds.
//!
//! Three set variants share one substrate:
//!
//! - [`SequentialListSet`] - unsynchronized single-threaded baseline
//! - [`CoarseListSet`] - one reader/writer lock over the whole chain
//! - [`FineListSet`] - per-node locks, hand-over-hand traversal
//!
//! plus [`FineListPq`], a priority queue over the fine-locked substrate.
//! The queue keeps the chain sorted under a user-supplied comparator and
//! drains from the tail (highest-priority) side, preserving FIFO order
//! among elements of equal priority.

pub mod common_tests;
pub mod data_structures;

// Re-export the collection types and their contracts for convenience
pub use data_structures::{
    Bounded, CoarseListSet, FineListPq, FineListSet, NaturalOrder, OrderedSet, PriorityQueue,
    SequentialListSet,
};
