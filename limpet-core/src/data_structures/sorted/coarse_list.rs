use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use super::node::ListNode;
use crate::data_structures::{Bounded, OrderedSet};

// Chain endpoints, owned behind the list-wide lock.
struct Chain<T> {
    head: *mut ListNode<T>,
    tail: *mut ListNode<T>,
}

impl<T: Ord> Chain<T> {
    fn find_pred(&self, value: &T) -> *mut ListNode<T> {
        let mut pred = self.head;
        let mut curr = unsafe { (*pred).next };
        while curr != self.tail && unsafe { &(*curr).value } < value {
            pred = curr;
            curr = unsafe { (*curr).next };
        }
        pred
    }
}

/// Coarse-locked sorted-list set: the sequential algorithm serialized by
/// one reader/writer lock.
///
/// `contains` and `check_invariants` share the read side; `insert` and
/// `remove` take the exclusive write side. The size counter is updated
/// while the write lock is held and read atomically without any lock.
pub struct CoarseListSet<T> {
    chain: RwLock<Chain<T>>,
    size: AtomicUsize,
}

unsafe impl<T: Send> Send for CoarseListSet<T> {}
unsafe impl<T: Send + Sync> Sync for CoarseListSet<T> {}

impl<T: Ord + Bounded> CoarseListSet<T> {
    pub fn new() -> Self {
        let tail = ListNode::alloc(T::highest(), ptr::null_mut());
        let head = ListNode::alloc(T::lowest(), tail);
        CoarseListSet {
            chain: RwLock::new(Chain { head, tail }),
            size: AtomicUsize::new(0),
        }
    }
}

impl<T: Ord + Bounded> OrderedSet<T> for CoarseListSet<T> {
    fn insert(&self, value: T) -> bool {
        let chain = self.chain.write().unwrap();
        let pred = chain.find_pred(&value);
        let curr = unsafe { (*pred).next };
        if curr != chain.tail && unsafe { &(*curr).value } == &value {
            return false;
        }
        unsafe { (*pred).next = ListNode::alloc(value, curr) };
        self.size.fetch_add(1, Ordering::Relaxed);
        true
    }

    fn remove(&self, value: &T) -> bool {
        let chain = self.chain.write().unwrap();
        let pred = chain.find_pred(value);
        let curr = unsafe { (*pred).next };
        if curr == chain.tail || unsafe { &(*curr).value } != value {
            return false;
        }
        unsafe {
            (*pred).next = (*curr).next;
            self.size.fetch_sub(1, Ordering::Relaxed);
            drop(Box::from_raw(curr));
        }
        true
    }

    fn contains(&self, value: &T) -> bool {
        let chain = self.chain.read().unwrap();
        let pred = chain.find_pred(value);
        let curr = unsafe { (*pred).next };
        curr != chain.tail && unsafe { &(*curr).value } == value
    }

    fn len(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }

    fn check_invariants(&self) -> bool {
        let chain = self.chain.read().unwrap();
        let mut count = 0usize;
        let mut pred = chain.head;
        let mut curr = unsafe { (*pred).next };
        while curr != chain.tail {
            if curr.is_null() {
                return false;
            }
            if unsafe { (*pred).value >= (*curr).value } {
                return false;
            }
            count += 1;
            pred = curr;
            curr = unsafe { (*curr).next };
        }
        unsafe {
            (*pred).next == chain.tail
                && (*chain.tail).next.is_null()
                && count == self.size.load(Ordering::Relaxed)
        }
    }
}

impl<T: Ord + Bounded> Default for CoarseListSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CoarseListSet<T> {
    fn drop(&mut self) {
        let chain = self
            .chain
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        let mut curr = chain.head;
        while !curr.is_null() {
            let node = unsafe { Box::from_raw(curr) };
            curr = node.next;
        }
    }
}
