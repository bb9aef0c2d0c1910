//! Conforming of raw priority and capacity inputs.
//!
//! Priorities are truncated toward zero, negatives collapse to level 0, and
//! during `push` anything above the queue's highest level is clamped down to
//! it. Construction has no established ceiling, so it skips the upper clamp
//! and only refuses values that do not fit a `u32` level.

use super::error::{Error, Result};

/// Which upper-bound rule applies while conforming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Establishing `max_priority`; no upper clamp.
    Construction,
    /// Placing an entry; clamp to the established ceiling.
    Push { max_priority: u32 },
}

/// Conform a raw priority into a bucket level.
///
/// NaN is checked first and is the only input that cannot be ordered.
pub(crate) fn conform(value: f64, mode: Mode) -> Result<u32> {
    if value.is_nan() {
        return Err(Error::invalid_priority(value));
    }

    if value < 0.0 {
        return Ok(0);
    }

    match mode {
        Mode::Construction => {
            let truncated = value.trunc();
            if truncated > f64::from(u32::MAX) {
                return Err(Error::invalid_priority(value));
            }
            Ok(truncated as u32)
        }
        Mode::Push { max_priority } => {
            if value > f64::from(max_priority) {
                Ok(max_priority)
            } else {
                Ok(value.trunc() as u32)
            }
        }
    }
}

/// Conform an optional capacity; `None` (or `+inf`) means unbounded.
pub(crate) fn conform_capacity(requested: Option<f64>) -> Result<Option<usize>> {
    let Some(requested) = requested else {
        return Ok(None);
    };

    if requested.is_nan() || requested.trunc() < 1.0 {
        return Err(Error::invalid_capacity(requested));
    }

    if requested.is_infinite() {
        return Ok(None);
    }

    // `as` saturates, so absurdly large capacities become usize::MAX.
    Ok(Some(requested.trunc() as usize))
}
