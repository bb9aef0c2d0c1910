//! Core types for the priority queue.
//!
//! Contains the accepted entry type and the construction parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants;

/// One accepted command with its conformed priority.
///
/// The priority is fixed at acceptance; it may differ from what the caller
/// asked for if the request was fractional, negative, or above the queue's
/// highest level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<C> {
    command: C,
    priority: u32,
    accepted_at: DateTime<Utc>,
}

impl<C> Entry<C> {
    pub(crate) fn new(command: C, priority: u32, accepted_at: DateTime<Utc>) -> Self {
        Self {
            command,
            priority,
            accepted_at,
        }
    }

    /// The submitted payload.
    pub fn command(&self) -> &C {
        &self.command
    }

    /// Conformed priority level.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// When the queue accepted this entry.
    pub fn accepted_at(&self) -> DateTime<Utc> {
        self.accepted_at
    }

    /// Take ownership of the payload, dropping the metadata.
    pub fn into_command(self) -> C {
        self.command
    }
}

/// Construction parameters for a [`PriorityQueue`](super::PriorityQueue).
///
/// Values are raw: they go through the same conforming rules as direct
/// construction, so `max_priority = 4.7` yields a highest level of 4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Maximum stored entries (None = unbounded).
    pub capacity: Option<f64>,
    /// Highest priority level; levels run `0..=max_priority`.
    pub max_priority: f64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            max_priority: f64::from(constants::DEFAULT_MAX_PRIORITY),
        }
    }
}
