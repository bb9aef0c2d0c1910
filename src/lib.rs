//! Bounded multi-level priority queue.
//!
//! The acceptance and ordering layer that sits in front of a task executor:
//! callers submit `(command, priority)` pairs, the queue conforms malformed
//! or out-of-range priorities, enforces an optional capacity, and yields
//! entries strictly highest-priority first, FIFO within a level.
//!
//! - [`queue`] - The [`PriorityQueue`] itself and its entry/error types
//! - [`config`] - TOML manifests describing a queue and tasks to submit
//! - [`constants`] - Defaults and limits
//!
//! The queue does no internal locking; see [`PriorityQueue`] for how to
//! share one across threads.

pub mod config;
pub mod constants;
pub mod queue;

pub use queue::{Entry, Error, PriorityQueue, QueueConfig};
