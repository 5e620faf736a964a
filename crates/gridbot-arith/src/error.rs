#![warn(missing_docs)]

//! Error types for the arithmetic helpers.

use core::fmt;

/// Errors that can occur in checked arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// Error for a zero divisor.
    /// `operand` is the name of the type the division was instantiated with.
    DivisionByZero {
        /// Operand type, e.g. `"f32"`.
        operand: &'static str,
    },
    /// Error for an update that would push a `ThresholdAccumulator` over its limit.
    /// `value` is the rejected delta raised to the power of the current total.
    ThresholdExceeded {
        /// The derived fail value.
        value: f64,
    },
}

impl ArithmeticError {
    /// Renders the signature of the failed division, e.g. `divide<i32>(i32, i32) -> i32`.
    ///
    /// Returns `None` for errors that did not come from a division.
    pub fn signature(&self) -> Option<Signature> {
        match self {
            ArithmeticError::DivisionByZero { operand } => Some(Signature(*operand)),
            ArithmeticError::ThresholdExceeded { .. } => None,
        }
    }
}

/// Lazily formatted signature of a `divide` instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature(&'static str);

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "divide<{0}>({0}, {0}) -> {0}", self.0)
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero { operand } => {
                write!(f, "Division by zero in {}", Signature(*operand))
            }
            ArithmeticError::ThresholdExceeded { value } => {
                write!(f, "Threshold exceeded: {}", value)
            }
        }
    }
}

impl core::error::Error for ArithmeticError {}
