//! Data structures for ordered concurrent collections.
//!
//! # Organization
//!
//! - [`sorted`] - sorted singly-linked chains (sequential, coarse-locked,
//!   fine-locked set, fine-locked priority queue)
//! - `internal` - shared contracts (pub(crate))
//!
//! # Usage
//!
//! ```ignore
//! use limpet_core::{FineListSet, OrderedSet};
//!
//! let set: FineListSet<i32> = FineListSet::new();
//! set.insert(42);
//! ```

// Submodules
pub(crate) mod internal;
pub mod sorted;

// Re-exports for convenience
pub use sorted::CoarseListSet;
pub use sorted::FineListPq;
pub use sorted::FineListSet;
pub use sorted::SequentialListSet;

pub use internal::{Bounded, NaturalOrder, OrderedSet, PriorityQueue};
