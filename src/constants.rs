//! Shared constants for queue construction.

/// Highest priority level used when none is configured.
pub const DEFAULT_MAX_PRIORITY: u32 = 10;
