use rstest::rstest;

use limpet_core::common_tests::set_core_tests::*;
use limpet_core::data_structures::{CoarseListSet, FineListSet, OrderedSet, SequentialListSet};

// Trait for type-level parametrization
trait TestSet {
    type Set: OrderedSet<i32> + Default + Send + Sync + 'static;
}

// Marker types for each lockable variant
struct UseCoarse;
struct UseFine;

impl TestSet for UseCoarse {
    type Set = CoarseListSet<i32>;
}

impl TestSet for UseFine {
    type Set = FineListSet<i32>;
}

#[rstest]
#[case::coarse(UseCoarse)]
#[case::fine(UseFine)]
fn insert_remove_contains<T: TestSet>(#[case] _variant: T) {
    test_insert_remove_contains(&T::Set::default());
}

#[rstest]
#[case::coarse(UseCoarse)]
#[case::fine(UseFine)]
fn remove_from_middle<T: TestSet>(#[case] _variant: T) {
    test_remove_from_middle(&T::Set::default());
}

#[rstest]
#[case::coarse(UseCoarse)]
#[case::fine(UseFine)]
fn empty_set_boundaries<T: TestSet>(#[case] _variant: T) {
    test_empty_set_boundaries(&T::Set::default());
}

#[rstest]
#[case::coarse(UseCoarse)]
#[case::fine(UseFine)]
fn duplicate_insert_size<T: TestSet>(#[case] _variant: T) {
    test_duplicate_insert_size(&T::Set::default());
}

#[rstest]
#[case::coarse(UseCoarse)]
#[case::fine(UseFine)]
fn insert_remove_round_trip<T: TestSet>(#[case] _variant: T) {
    test_insert_remove_round_trip(&T::Set::default());
}

#[rstest]
#[case::coarse(UseCoarse)]
#[case::fine(UseFine)]
fn arrival_order_is_irrelevant<T: TestSet>(#[case] _variant: T) {
    test_arrival_order_is_irrelevant(&T::Set::default());
}

#[rstest]
#[case::coarse(UseCoarse)]
#[case::fine(UseFine)]
fn mixed_sequence_holds_invariants<T: TestSet>(#[case] _variant: T) {
    test_mixed_sequence_holds_invariants(&T::Set::default());
}

// ============================================================================
// Sequential variant - `!Send + !Sync`, exercised directly
// ============================================================================

#[test]
fn sequential_insert_remove_contains() {
    test_insert_remove_contains(&SequentialListSet::new());
}

#[test]
fn sequential_remove_from_middle() {
    test_remove_from_middle(&SequentialListSet::new());
}

#[test]
fn sequential_empty_set_boundaries() {
    test_empty_set_boundaries(&SequentialListSet::new());
}

#[test]
fn sequential_insert_remove_round_trip() {
    test_insert_remove_round_trip(&SequentialListSet::new());
}

#[test]
fn sequential_arrival_order_is_irrelevant() {
    test_arrival_order_is_irrelevant(&SequentialListSet::new());
}

#[test]
fn sequential_mixed_sequence_holds_invariants() {
    test_mixed_sequence_holds_invariants(&SequentialListSet::new());
}
