//! The bucketed priority queue.
//!
//! One FIFO bucket per priority level, allocated once at construction.
//! `push` appends to the bucket for the conformed level; `pop` walks the
//! buckets from the highest level down and takes the oldest entry of the
//! first non-empty one.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use super::clock::{Clock, SystemClock};
use super::error::{Error, Result};
use super::priority::{self, Mode};
use super::types::{Entry, QueueConfig};
use crate::constants;

/// Bounded multi-level priority queue.
///
/// Entries come out highest priority first; equal priorities come out in
/// the order they were pushed.
///
/// # Thread Safety
///
/// There is no internal synchronization. Callers sharing a queue across
/// threads must guard every call on the same lock (for example a
/// `Mutex<PriorityQueue<_>>`) or funnel all access through one task.
#[derive(Debug)]
pub struct PriorityQueue<C, K = SystemClock> {
    buckets: Vec<VecDeque<Entry<C>>>,
    max_priority: u32,
    capacity: Option<usize>,
    size: usize,
    clock: K,
}

impl<C> PriorityQueue<C> {
    /// Create a queue stamped by the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `capacity` truncates to less than 1 (`InvalidCapacity`)
    /// - `max_priority` is NaN, `+inf`, or above `u32::MAX` (`InvalidPriority`)
    /// - the bucket table for `max_priority + 1` levels cannot be allocated
    ///   (`InvalidPriority`)
    pub fn new(capacity: Option<f64>, max_priority: impl Into<f64>) -> Result<Self> {
        Self::with_clock(capacity, max_priority, SystemClock)
    }

    /// Create a queue from a [`QueueConfig`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`PriorityQueue::new`].
    pub fn with_config(config: &QueueConfig) -> Result<Self> {
        Self::new(config.capacity, config.max_priority)
    }

    /// Unbounded queue with the default highest level.
    pub fn unbounded() -> Self {
        let max_priority = constants::DEFAULT_MAX_PRIORITY;
        let buckets = (0..=max_priority).map(|_| VecDeque::new()).collect();
        Self::with_buckets(None, max_priority, buckets, SystemClock)
    }
}

impl<C> Default for PriorityQueue<C> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl QueueConfig {
    /// Build a queue from this configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PriorityQueue::new`].
    pub fn build<C>(&self) -> Result<PriorityQueue<C>> {
        PriorityQueue::with_config(self)
    }
}

impl<C, K: Clock> PriorityQueue<C, K> {
    /// Create a queue that stamps entries using `clock`.
    ///
    /// A `max_priority` that conforms to 0 is accepted but logged as a
    /// warning: the queue then behaves as a plain FIFO.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PriorityQueue::new`].
    pub fn with_clock(
        capacity: Option<f64>,
        max_priority: impl Into<f64>,
        clock: K,
    ) -> Result<Self> {
        let capacity = priority::conform_capacity(capacity)?;
        let requested = max_priority.into();
        let max_priority = priority::conform(requested, Mode::Construction)?;

        if max_priority == 0 {
            warn!("Highest priority allowed is 0, queue degenerates to plain FIFO");
        }

        let Some(buckets) = allocate_buckets(max_priority) else {
            warn!(max_priority, "cannot allocate bucket table");
            return Err(Error::invalid_priority(requested));
        };

        Ok(Self::with_buckets(capacity, max_priority, buckets, clock))
    }

    fn with_buckets(
        capacity: Option<usize>,
        max_priority: u32,
        buckets: Vec<VecDeque<Entry<C>>>,
        clock: K,
    ) -> Self {
        debug!(?capacity, max_priority, "priority queue created");
        Self {
            buckets,
            max_priority,
            capacity,
            size: 0,
            clock,
        }
    }

    /// Number of stored entries.
    pub fn count(&self) -> usize {
        self.size
    }

    /// Highest priority level, fixed at construction.
    pub fn max_priority(&self) -> u32 {
        self.max_priority
    }

    /// Maximum number of stored entries (None = unbounded).
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Check if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Check if another `push` would be rejected as full.
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.size >= capacity)
    }

    /// Number of entries waiting at one level (0 for levels out of range).
    pub fn len_at(&self, priority: u32) -> usize {
        self.buckets.get(priority as usize).map_or(0, VecDeque::len)
    }

    /// Store a command at the conformed priority.
    ///
    /// Returns the stored entry so the caller can see which level it landed
    /// on and when it was accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `priority` is NaN (`InvalidPriority`), checked even when full
    /// - the queue is at capacity (`QueueFull`)
    ///
    /// The queue is unchanged on error.
    pub fn push(&mut self, command: C, priority: impl Into<f64>) -> Result<&Entry<C>> {
        let requested = priority.into();
        let level = priority::conform(
            requested,
            Mode::Push {
                max_priority: self.max_priority,
            },
        )?;

        if let Some(capacity) = self.capacity
            && self.size >= capacity
        {
            debug!(capacity, requested, "rejecting push, queue is full");
            return Err(Error::queue_full(capacity));
        }

        let entry = Entry::new(command, level, self.clock.now());
        trace!(requested, priority = level, "accepted entry");

        self.size += 1;
        let bucket = &mut self.buckets[level as usize];
        bucket.push_back(entry);
        Ok(&bucket[bucket.len() - 1])
    }

    /// Remove and return the next entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<Entry<C>> {
        if self.size == 0 {
            return None;
        }

        let entry = self
            .buckets
            .iter_mut()
            .rev()
            .find_map(VecDeque::pop_front)?;
        self.size -= 1;

        trace!(priority = entry.priority(), remaining = self.size, "popped entry");
        Some(entry)
    }

    /// Peek at the entry `pop` would return, without removing it.
    pub fn peek(&self) -> Option<&Entry<C>> {
        self.buckets.iter().rev().find_map(VecDeque::front)
    }

    /// Remove every entry, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.size;
        self.buckets.iter_mut().for_each(VecDeque::clear);
        self.size = 0;
        count
    }

    /// Pop entries in priority order until the queue is empty.
    ///
    /// Entries not consumed before the iterator is dropped stay queued.
    pub fn drain(&mut self) -> Drain<'_, C, K> {
        Drain { queue: self }
    }
}

/// One empty FIFO per level in `0..=max_priority`, or `None` if the table
/// cannot be allocated.
fn allocate_buckets<C>(max_priority: u32) -> Option<Vec<VecDeque<Entry<C>>>> {
    let levels = usize::try_from(max_priority).ok()?.checked_add(1)?;
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(levels).ok()?;
    buckets.resize_with(levels, VecDeque::new);
    Some(buckets)
}

/// Draining iterator returned by [`PriorityQueue::drain`].
#[derive(Debug)]
pub struct Drain<'a, C, K = SystemClock> {
    queue: &'a mut PriorityQueue<C, K>,
}

impl<C, K: Clock> Iterator for Drain<'_, C, K> {
    type Item = Entry<C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.count(), Some(self.queue.count()))
    }
}

impl<C, K: Clock> ExactSizeIterator for Drain<'_, C, K> {}

impl<C, K: Clock> FusedIterator for Drain<'_, C, K> {}
