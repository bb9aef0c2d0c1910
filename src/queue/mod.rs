//! Bounded multi-level priority queue.
//!
//! Accepts `(command, priority)` submissions, conforms the priority into the
//! queue's range, and hands entries back strictly highest-priority first,
//! oldest first within a level.
//!
//! # Examples
//!
//! ## Basic Queue Operations
//!
//! ```rust
//! use prioqueue::queue::PriorityQueue;
//!
//! # fn main() -> prioqueue::queue::Result<()> {
//! let mut queue = PriorityQueue::new(None, 10)?;
//!
//! queue.push("backup", 2)?;
//! queue.push("deploy", 7)?;
//! queue.push("notify", 2)?;
//!
//! let order: Vec<_> = queue.drain().map(|e| e.into_command()).collect();
//! assert_eq!(order, ["deploy", "backup", "notify"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Conforming Priorities
//!
//! ```rust
//! use prioqueue::queue::PriorityQueue;
//!
//! # fn main() -> prioqueue::queue::Result<()> {
//! let mut queue = PriorityQueue::new(Some(4.0), 5)?;
//!
//! assert_eq!(queue.push("late", 3.9)?.priority(), 3);
//! assert_eq!(queue.push("urgent", 99)?.priority(), 5);
//! assert_eq!(queue.push("whenever", -4)?.priority(), 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Bounded Queues
//!
//! ```rust
//! use prioqueue::queue::{Error, PriorityQueue};
//!
//! # fn main() -> prioqueue::queue::Result<()> {
//! let mut queue = PriorityQueue::new(Some(1.0), 10)?;
//! queue.push("first", 1)?;
//!
//! let err = queue.push("second", 9).unwrap_err();
//! assert_eq!(err, Error::QueueFull { capacity: 1 });
//! assert_eq!(queue.count(), 1);
//! # Ok(())
//! # }
//! ```

mod clock;
mod error;
pub(crate) mod priority;
mod service;
mod types;

// Re-export public API
pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use service::{Drain, PriorityQueue};
pub use types::{Entry, QueueConfig};

#[cfg(test)]
mod property_tests;
