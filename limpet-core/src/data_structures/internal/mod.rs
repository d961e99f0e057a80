pub mod ordered_collection;

pub use ordered_collection::{Bounded, NaturalOrder, OrderedSet, PriorityQueue};
