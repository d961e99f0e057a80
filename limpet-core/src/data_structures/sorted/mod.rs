//! Sorted singly-linked chains with sentinel bounds.
//!
//! Every variant shares the same shape: a chain `head -> n1 -> ... -> nk
//! -> tail` where the sentinels carry the element type's
//! [`Bounded`](crate::data_structures::Bounded) extremes, are allocated at
//! construction, and are never spliced out. `tail.next` is null; every
//! other link points at a node. What differs is the locking discipline:
//!
//! - [`SequentialListSet`] - none (single-threaded baseline)
//! - [`CoarseListSet`] - one reader/writer lock over the chain
//! - [`FineListSet`], [`FineListPq`] - a mutex per node, acquired
//!   hand-over-hand in list order

pub mod coarse_list;
pub mod fine_list;
pub mod fine_pq;
pub(crate) mod node;
pub mod sequential_list;

pub use coarse_list::CoarseListSet;
pub use fine_list::FineListSet;
pub use fine_pq::FineListPq;
pub use sequential_list::SequentialListSet;
