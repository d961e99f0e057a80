use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use compare::Compare;

use super::node::{search_window, FineNode};
use crate::data_structures::{Bounded, NaturalOrder, PriorityQueue};

/// Fine-locked priority queue over the hand-over-hand list substrate.
///
/// The chain stays sorted non-decreasing under the queue's comparator and,
/// unlike the set, allows duplicates. The highest-priority element - the
/// largest under the comparator - sits immediately before the tail
/// sentinel, and `pop` drains from that side.
///
/// A push of `v` stops at the first node ordered at-or-above `v`, so a new
/// element lands in front of any run of equal priority. The earliest
/// pushed element of a run is therefore the one closest to the tail and
/// the first to be popped: FIFO among equals.
pub struct FineListPq<T, C = NaturalOrder> {
    head: *mut FineNode<T>,
    tail: *mut FineNode<T>,
    size: AtomicUsize,
    cmp: C,
}

unsafe impl<T: Send, C: Send> Send for FineListPq<T, C> {}
unsafe impl<T: Send + Sync, C: Sync> Sync for FineListPq<T, C> {}

impl<T: Ord + Bounded> FineListPq<T> {
    /// Queue ordered by `T`'s own `Ord` instance.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Bounded, C: Compare<T>> FineListPq<T, C> {
    /// Queue ordered by `cmp`; the largest element under `cmp` has the
    /// highest priority. `T::lowest()` and `T::highest()` must strictly
    /// bracket every pushed value under `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        let tail = FineNode::alloc(T::highest(), ptr::null_mut());
        let head = FineNode::alloc(T::lowest(), tail);
        FineListPq {
            head,
            tail,
            size: AtomicUsize::new(0),
            cmp,
        }
    }
}

impl<T: Bounded, C: Compare<T>> PriorityQueue<T> for FineListPq<T, C> {
    fn push(&self, value: T) {
        // Stop at the first node at-or-above `value`: equal-priority
        // entries enter in front of their run, which is what keeps
        // tail-side draining FIFO among equals.
        let mut window = unsafe {
            search_window(self.head, self.tail, |x| self.cmp.compares_lt(x, &value))
        };
        let node = FineNode::alloc(value, window.curr);
        *window.pred_lock = node;
        self.size.fetch_add(1, Ordering::Relaxed);
    }

    fn pop(&self) -> Option<T> {
        let mut prev_lock = unsafe { FineNode::lock(self.head) };
        let mut victim = *prev_lock;
        let mut victim_lock = unsafe { FineNode::lock(victim) };

        if victim == self.tail {
            // Only sentinels left.
            return None;
        }

        // Walk until the victim is the node immediately before the tail.
        // The next node is locked before the trailing guard is given up,
        // so up to three node locks are held, still in list order.
        while *victim_lock != self.tail {
            let next = *victim_lock;
            let next_lock = unsafe { FineNode::lock(next) };
            prev_lock = victim_lock;
            victim = next;
            victim_lock = next_lock;
        }

        // prev, victim, and tail are all locked for the splice.
        let tail_lock = unsafe { FineNode::lock(self.tail) };
        *prev_lock = self.tail;
        self.size.fetch_sub(1, Ordering::Relaxed);
        drop(tail_lock);
        drop(victim_lock);
        drop(prev_lock);

        // Unreachable and unlocked: this thread is the sole owner.
        Some(unsafe { FineNode::reclaim(victim) })
    }

    fn len(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }

    fn check_invariants(&self) -> bool {
        // Quiescent-only audit, same discipline as the fine-locked set.
        let mut count = 0usize;
        let mut pred = self.head;
        let mut curr = unsafe { *FineNode::lock(pred) };
        while curr != self.tail {
            if curr.is_null() {
                return false;
            }
            // Non-decreasing under the comparator; duplicates are fine.
            if unsafe { self.cmp.compares_lt(&(*curr).value, &(*pred).value) } {
                return false;
            }
            count += 1;
            pred = curr;
            curr = unsafe { *FineNode::lock(curr) };
        }
        let tail_next = unsafe { *FineNode::lock(self.tail) };
        tail_next.is_null() && count == self.size.load(Ordering::Relaxed)
    }
}

impl<T: Bounded, C: Compare<T> + Default> Default for FineListPq<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for FineListPq<T, C> {
    fn drop(&mut self) {
        let mut curr = self.head;
        while !curr.is_null() {
            let mut node = unsafe { Box::from_raw(curr) };
            curr = node.next_mut();
        }
    }
}
