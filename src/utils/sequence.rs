//! Sender-side sequence numbering.
//!
//! The protocol layer only stamps sequence numbers; ordering and dedup are up
//! to the receiver, which can use [`is_newer`] to compare wrapped values.

use std::sync::atomic::{AtomicU32, Ordering};

/// Monotonic, wrapping `u32` counter safe to share between senders.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    next: AtomicU32,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    /// Take the next sequence number. Wraps to 0 after `u32::MAX`.
    #[inline]
    pub fn next(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Value the next call to [`SequenceCounter::next`] will return.
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }
}

/// `true` when `a` is ahead of `b` within half the sequence space.
#[inline]
pub fn is_newer(a: u32, b: u32) -> bool {
    let diff = a.wrapping_sub(b);
    diff != 0 && diff < 1 << 31
}
