//! Property-based tests for priority queue invariants.
//!
//! These tests use proptest to check ordering and accounting guarantees
//! under arbitrary submission sequences and configurations.
//!
//! # Tested Invariants
//!
//! - Conformed priority is floor for non-negatives, 0 for negatives, and
//!   clamped to `max_priority` on push
//! - Pops come out in non-increasing priority, FIFO within a level
//! - Every pushed entry comes back exactly once
//! - Capacity is never exceeded and rejected pushes change nothing
//!
//! # Running Tests
//!
//! ```bash
//! cargo test queue::property_tests
//! ```

use proptest::prelude::*;

use super::{Error, PriorityQueue};

// ============================================================================
// Test Strategies - Input Generation
// ============================================================================

/// Strategy for highest priority levels, including degenerate ones.
fn max_priority_strategy() -> impl Strategy<Value = u32> {
    0u32..20
}

/// Strategy for raw priorities, well outside any queue's range.
fn raw_priority_strategy() -> impl Strategy<Value = f64> {
    -50.0f64..50.0
}

/// Strategy for submission sequences of raw priorities.
fn submissions_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(raw_priority_strategy(), 0..200)
}

/// Operation in an interleaved push/pop sequence.
#[derive(Debug, Clone)]
enum Op {
    Push(f64),
    Pop,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => raw_priority_strategy().prop_map(Op::Push),
            1 => Just(Op::Pop),
        ],
        0..300,
    )
}

fn expected_level(raw: f64, max_priority: u32) -> u32 {
    if raw < 0.0 {
        0
    } else {
        (raw.floor() as u32).min(max_priority)
    }
}

// ============================================================================
// Conforming Invariants
// ============================================================================

proptest! {
    /// Invariant: push conforms to floor, then clamps into `[0, max_priority]`.
    #[test]
    fn push_conforms_priority(max_priority in max_priority_strategy(), raw in raw_priority_strategy()) {
        let mut queue = PriorityQueue::new(None, max_priority).unwrap();
        let entry = queue.push((), raw).unwrap();

        prop_assert_eq!(entry.priority(), expected_level(raw, max_priority));
        prop_assert!(entry.priority() <= queue.max_priority());
    }

    /// Invariant: construction floors non-negatives and lifts negatives to 0.
    #[test]
    fn construction_conforms_max_priority(raw in -100.0f64..1000.0) {
        let queue = PriorityQueue::<()>::new(None, raw).unwrap();

        prop_assert_eq!(f64::from(queue.max_priority()), raw.max(0.0).floor());
        prop_assert_eq!(queue.count(), 0);
    }

    /// Invariant: any capacity below 1 after truncation is rejected.
    #[test]
    fn small_capacities_rejected(requested in -1000.0f64..1.0) {
        let result = PriorityQueue::<()>::new(Some(requested), 10);
        let rejected = matches!(result, Err(Error::InvalidCapacity { .. }));
        prop_assert!(rejected, "capacity {} was accepted", requested);
    }
}

// ============================================================================
// Ordering Invariants
// ============================================================================

proptest! {
    /// Invariant: popping yields non-increasing priority and FIFO within ties.
    #[test]
    fn pops_are_priority_then_fifo(
        max_priority in max_priority_strategy(),
        submissions in submissions_strategy(),
    ) {
        let mut queue = PriorityQueue::new(None, max_priority).unwrap();
        for (seq, raw) in submissions.iter().enumerate() {
            queue.push(seq, *raw).unwrap();
        }

        let popped: Vec<_> = queue.drain().collect();
        prop_assert_eq!(popped.len(), submissions.len());

        for pair in popped.windows(2) {
            prop_assert!(pair[0].priority() >= pair[1].priority());
            if pair[0].priority() == pair[1].priority() {
                prop_assert!(pair[0].command() < pair[1].command());
            }
        }
    }

    /// Invariant: interleaved pushes and pops match a sorted reference model.
    #[test]
    fn interleaved_ops_match_model(
        max_priority in max_priority_strategy(),
        ops in ops_strategy(),
    ) {
        let mut queue = PriorityQueue::new(None, max_priority).unwrap();
        // (level, sequence) pairs still waiting.
        let mut model: Vec<(u32, usize)> = Vec::new();

        for (seq, op) in ops.into_iter().enumerate() {
            match op {
                Op::Push(raw) => {
                    let level = queue.push(seq, raw).unwrap().priority();
                    model.push((level, seq));
                }
                Op::Pop => {
                    let next = model
                        .iter()
                        .enumerate()
                        .max_by(|(_, a), (_, b)| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
                        .map(|(idx, _)| idx);
                    let expected = next.map(|idx| model.remove(idx));
                    let actual = queue.pop().map(|e| (e.priority(), e.into_command()));
                    prop_assert_eq!(actual, expected);
                }
            }
            prop_assert_eq!(queue.count(), model.len());
        }
    }
}

// ============================================================================
// Accounting Invariants
// ============================================================================

proptest! {
    /// Invariant: N pushes then N pops returns the same multiset and empties the queue.
    #[test]
    fn round_trip_loses_nothing(submissions in submissions_strategy()) {
        let mut queue = PriorityQueue::new(None, 10).unwrap();
        for (seq, raw) in submissions.iter().enumerate() {
            queue.push(seq, *raw).unwrap();
        }

        let mut seen: Vec<usize> = (0..submissions.len())
            .map(|_| queue.pop().unwrap().into_command())
            .collect();
        seen.sort_unstable();

        prop_assert_eq!(seen, (0..submissions.len()).collect::<Vec<_>>());
        prop_assert_eq!(queue.count(), 0);
        prop_assert!(queue.pop().is_none());
    }

    /// Invariant: exactly `capacity` pushes succeed; the next fails and changes nothing.
    #[test]
    fn capacity_is_exact(capacity in 1usize..64, extra in 1usize..10, raw in raw_priority_strategy()) {
        let mut queue = PriorityQueue::new(Some(capacity as f64), 10).unwrap();

        for i in 0..capacity {
            prop_assert!(queue.push(i, raw).is_ok());
        }
        prop_assert_eq!(queue.count(), capacity);

        for i in 0..extra {
            let result = queue.push(capacity + i, raw);
            prop_assert_eq!(result.unwrap_err(), Error::QueueFull { capacity });
            prop_assert_eq!(queue.count(), capacity);
        }
    }
}
