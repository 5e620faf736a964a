#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of checked arithmetic helpers."]
#![doc = ""]
#![doc = "This crate provides a generic division that refuses zero divisors and"]
#![doc = "an integer holder that refuses updates pushing it over a threshold."]

use core::ops::Div;

pub mod accumulator;
pub mod error;

pub use accumulator::{DEFAULT_LIMIT, ThresholdAccumulator};
pub use error::{ArithmeticError, Signature};

/// A primitive number that can be divided and compared against zero.
pub trait Numeric: Copy + PartialEq + Div<Output = Self> {
    /// The additive identity of the type.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($zero:literal => $($t:ty),+) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

/// Divides `dividend` by `divisor` using the type's own division.
///
/// Integers truncate towards zero; floats follow IEEE 754.
///
/// # Errors
///
/// Returns `Err(ArithmeticError::DivisionByZero)` if `divisor` equals zero
/// (for floats this includes `-0.0`).
///
/// # Example
///
/// ```
/// use gridbot_arith::divide;
///
/// assert_eq!(divide(4, 2), Ok(2));
/// assert!(divide(4.3_f32, 0.0).is_err());
/// ```
pub fn divide<T: Numeric>(dividend: T, divisor: T) -> Result<T, ArithmeticError> {
    if divisor == T::ZERO {
        return Err(ArithmeticError::DivisionByZero {
            operand: core::any::type_name::<T>(),
        });
    }
    Ok(dividend / divisor)
}
