//! An integer holder guarded by an upper limit.

use core::fmt;

use crate::error::ArithmeticError;

/// Limit used by [`ThresholdAccumulator::new`].
pub const DEFAULT_LIMIT: i32 = 100;

/// Holds an integer total and refuses updates that would take it over a limit.
///
/// Note that an accepted update *replaces* the total with the delta instead of
/// adding to it, while the limit check uses `total + delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdAccumulator {
    total: i32,
    limit: i32,
}

impl ThresholdAccumulator {
    /// Creates an accumulator with a total of zero and the default limit of 100.
    pub const fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// Creates an accumulator with a total of zero and a custom limit.
    pub const fn with_limit(limit: i32) -> Self {
        ThresholdAccumulator { total: 0, limit }
    }

    /// Returns the current total.
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Returns the limit.
    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Offers `delta` to the accumulator.
    ///
    /// # Errors
    ///
    /// Returns `Err(ArithmeticError::ThresholdExceeded)` if `total + delta` is
    /// greater than the limit. The error carries `delta` raised to the power of
    /// the current total, both taken as `f64`. The total is left unchanged.
    pub fn set(&mut self, delta: i32) -> Result<(), ArithmeticError> {
        if i64::from(self.total) + i64::from(delta) > i64::from(self.limit) {
            return Err(ArithmeticError::ThresholdExceeded {
                value: libm::pow(f64::from(delta), f64::from(self.total)),
            });
        }
        self.total = delta;
        Ok(())
    }
}

impl Default for ThresholdAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThresholdAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThresholdAccumulator (total: {}, limit: {})", self.total, self.limit)
    }
}
