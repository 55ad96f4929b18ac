//! Core traits for the elimination engines
//!
//! This module defines the scalar abstraction used throughout the crate:
//! - [`GaussScalar`]: Trait for real floating-point types the engines operate on

use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used by the elimination engines.
///
/// Every engine works on ordinary IEEE floating-point arithmetic; exact-zero
/// tests, signed comparisons and NaN propagation follow the hardware semantics
/// of the underlying type. Simulated precision loss is applied on top of that
/// by [`crate::Precision`], never by a different number representation.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default)
/// - `f32` (for memory-constrained experiments)
pub trait GaussScalar:
    Float + NumAssign + FromPrimitive + Send + Sync + Debug + Display + 'static
{
    /// Largest `k` for which `10^k` is exactly representable
    const MAX_EXACT_POW10: i32;

    /// Significant decimal digits that survive a round trip through this type
    const DECIMAL_DIGITS: u32;

    /// The constant 10, base of the significant-digit rounding
    fn ten() -> Self;

    /// Nearest representable value to `mantissa * 10^exponent`
    fn from_decimal(mantissa: i64, exponent: i32) -> Option<Self>;

    /// Convert from an `f64`, rounding to the nearest representable value
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64` for display and logging
    fn to_f64_lossy(self) -> f64;

    /// Check if this is exactly zero (no tolerance)
    #[inline]
    fn is_exact_zero(self) -> bool {
        self == Self::zero()
    }
}

impl GaussScalar for f64 {
    const MAX_EXACT_POW10: i32 = 22;
    const DECIMAL_DIGITS: u32 = 15;

    #[inline]
    fn ten() -> Self {
        10.0
    }

    fn from_decimal(mantissa: i64, exponent: i32) -> Option<Self> {
        format!("{}e{}", mantissa, exponent).parse().ok()
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl GaussScalar for f32 {
    const MAX_EXACT_POW10: i32 = 10;
    const DECIMAL_DIGITS: u32 = 6;

    #[inline]
    fn ten() -> Self {
        10.0
    }

    fn from_decimal(mantissa: i64, exponent: i32) -> Option<Self> {
        format!("{}e{}", mantissa, exponent).parse().ok()
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}
