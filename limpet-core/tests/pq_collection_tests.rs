use limpet_core::common_tests::pq_core_tests::*;
use limpet_core::data_structures::FineListPq;

type PairPq = FineListPq<(i32, u32), ByPriority>;

#[test]
fn pop_on_empty_returns_none() {
    test_pop_empty(&FineListPq::<i32>::new());
}

#[test]
fn drains_highest_priority_first() {
    test_push_pop_ordering(&FineListPq::<i32>::new());
}

#[test]
fn push_pop_round_trip_leaves_empty() {
    test_push_pop_round_trip(&FineListPq::<i32>::new());
}

#[test]
fn equal_priorities_drain_fifo() {
    test_fifo_for_equal_priorities(&PairPq::with_comparator(ByPriority));
}

#[test]
fn interleaved_push_pop() {
    test_interleaved_push_pop(&PairPq::with_comparator(ByPriority));
}

#[test]
fn scattered_workload_drains_sorted() {
    test_scattered_workload_drains_sorted(&PairPq::with_comparator(ByPriority));
}
