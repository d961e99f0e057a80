//! Generic test bodies shared by the collection variants.
//!
//! Integration tests under `tests/` instantiate these per variant so every
//! implementation is held to the same contract.

pub mod pq_core_tests;
