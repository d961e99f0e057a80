use std::sync::{Mutex, MutexGuard, PoisonError};

/// Plain chain node for the unsynchronized and coarse-locked variants.
pub(crate) struct ListNode<T> {
    pub value: T,
    pub next: *mut ListNode<T>,
}

impl<T> ListNode<T> {
    pub fn alloc(value: T, next: *mut Self) -> *mut Self {
        Box::into_raw(Box::new(ListNode { value, next }))
    }
}

/// Chain node for the fine-locked variants.
///
/// The mutex is the node's lock: it guards the node's next-link and its
/// logical presence in the chain, and holding its guard is what the
/// hand-over-hand protocol means by "holding the node". Nodes are
/// heap-boxed and never relocated once linked (threads block on specific
/// mutex instances), so all traversal and splicing goes through raw
/// pointers.
pub(crate) struct FineNode<T> {
    pub value: T,
    next: Mutex<*mut FineNode<T>>,
}

impl<T> FineNode<T> {
    pub fn alloc(value: T, next: *mut Self) -> *mut Self {
        Box::into_raw(Box::new(FineNode {
            value,
            next: Mutex::new(next),
        }))
    }

    /// Lock the node. The guard gives access to the next-link.
    ///
    /// # Safety
    ///
    /// `node` must point to a live node of this chain, and the caller must
    /// keep it alive for as long as the guard is held.
    pub unsafe fn lock<'g>(node: *mut Self) -> MutexGuard<'g, *mut FineNode<T>> {
        unsafe { (*node).next.lock().unwrap() }
    }

    /// Next-link access for teardown, bypassing the lock via `&mut`.
    pub fn next_mut(&mut self) -> *mut FineNode<T> {
        *self.next.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take ownership of an unlinked node and move its value out.
    ///
    /// # Safety
    ///
    /// `node` must be unreachable from the chain and unlocked; the calling
    /// thread must be its sole owner.
    pub unsafe fn reclaim(node: *mut Self) -> T {
        let boxed = unsafe { Box::from_raw(node) };
        let FineNode { value, .. } = *boxed;
        value
    }
}

/// A hand-over-hand search window: the landing node `curr` and its
/// predecessor are both locked, with the predecessor's link (behind
/// `pred_lock`) pointing at `curr`.
///
/// `curr_lock` is declared before `pred_lock` so dropping the window
/// releases the current node before its predecessor.
pub(crate) struct Window<'g, T> {
    pub curr: *mut FineNode<T>,
    pub curr_lock: MutexGuard<'g, *mut FineNode<T>>,
    pub pred_lock: MutexGuard<'g, *mut FineNode<T>>,
}

/// Walk the chain hand-over-hand until `advance_past(curr.value)` is false
/// or `curr` is the tail sentinel.
///
/// Locks are acquired strictly in list order and at most two are held at
/// any point: the predecessor's guard is dropped before the next node is
/// locked. Because no traversal ever holds a node without its
/// predecessor, two overlapping traversals serialize on the shared lock
/// and neither can observe a splice mid-update.
///
/// # Safety
///
/// `head` and `tail` must be the chain's live sentinels.
pub(crate) unsafe fn search_window<'g, T>(
    head: *mut FineNode<T>,
    tail: *mut FineNode<T>,
    mut advance_past: impl FnMut(&T) -> bool,
) -> Window<'g, T> {
    let mut pred_lock = unsafe { FineNode::lock(head) };
    let mut curr = *pred_lock;
    let mut curr_lock = unsafe { FineNode::lock(curr) };

    while curr != tail && advance_past(unsafe { &(*curr).value }) {
        let next = *curr_lock;
        // Slide one node right: releasing the predecessor's guard by
        // overwriting it keeps the two-lock bound before the next node is
        // locked.
        pred_lock = curr_lock;
        curr = next;
        curr_lock = unsafe { FineNode::lock(curr) };
    }

    Window {
        curr,
        curr_lock,
        pred_lock,
    }
}
