//! Simulated finite-precision arithmetic
//!
//! Values are rounded to a number of significant decimal digits (not decimal
//! places) after every arithmetic step that stores a result. The rounding is
//! applied on top of ordinary floating-point arithmetic.

use crate::traits::GaussScalar;
use crate::{GaussError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Precision budget of a call
///
/// On the wire (JSON configuration, command line) the budget is a single
/// integer: `-1` selects [`Precision::Exact`], any `d >= 1` selects
/// [`Precision::Digits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Precision {
    /// Raw floating-point arithmetic, no simulated precision loss
    #[default]
    Exact,
    /// Round every stored result to this many significant digits
    ///
    /// `Digits(0)` is only reachable by building the variant directly; it
    /// rounds nothing, as [`Precision::from_digits`] rejects it.
    Digits(u32),
}

impl Precision {
    /// Integer sentinel selecting [`Precision::Exact`]
    pub const EXACT_SENTINEL: i32 = -1;

    /// Build a budget from its integer form
    pub fn from_digits(digits: i32) -> Result<Self> {
        match digits {
            Self::EXACT_SENTINEL => Ok(Precision::Exact),
            d if d >= 1 => Ok(Precision::Digits(d as u32)),
            d => Err(GaussError::InvalidPrecision(d)),
        }
    }

    /// Integer form of this budget (`-1` for exact)
    pub fn as_digits(self) -> i32 {
        match self {
            Precision::Exact => Self::EXACT_SENTINEL,
            Precision::Digits(d) => i32::try_from(d).unwrap_or(i32::MAX),
        }
    }

    /// Whether rounding is bypassed
    pub fn is_exact(self) -> bool {
        matches!(self, Precision::Exact)
    }

    /// Apply the budget to a freshly computed value
    #[inline]
    pub fn apply<T: GaussScalar>(self, value: T) -> T {
        match self {
            Precision::Exact => value,
            Precision::Digits(d) => round_to_digits(value, d),
        }
    }
}

impl TryFrom<i32> for Precision {
    type Error = GaussError;

    fn try_from(digits: i32) -> Result<Self> {
        Precision::from_digits(digits)
    }
}

impl From<Precision> for i32 {
    fn from(precision: Precision) -> Self {
        precision.as_digits()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Exact => write!(f, "exact"),
            Precision::Digits(d) => write!(f, "{} significant digits", d),
        }
    }
}

/// Round `value` to `digits` significant decimal digits
///
/// The scale exponent is `digits - ceil(log10(|value|))`; the value is scaled
/// by `10^exponent`, rounded half away from zero to an integer mantissa, and
/// the result is the representable value nearest to `mantissa * 10^-exponent`.
/// Rounding an already rounded value therefore returns it unchanged.
///
/// Zero is returned unchanged without taking a logarithm. Non-finite values,
/// values whose scaled form over- or underflows, a budget of zero digits and
/// budgets beyond [`GaussScalar::DECIMAL_DIGITS`] also leave the value as is.
pub fn round_to_digits<T: GaussScalar>(value: T, digits: u32) -> T {
    if value.is_exact_zero()
        || !value.is_finite()
        || digits == 0
        || digits > T::DECIMAL_DIGITS
    {
        return value;
    }

    let magnitude = match value.abs().log10().ceil().to_i32() {
        Some(m) => m,
        None => return value,
    };
    let mut exponent = digits as i32 - magnitude;

    let scaled = scale_by_pow10(value, exponent);
    if !scaled.is_finite() {
        return value;
    }
    let mut mantissa = scaled.round();
    if mantissa.is_exact_zero() {
        return value;
    }

    // Strip trailing zeros so equal decimals always rebuild the same value
    let ten = T::ten();
    while (mantissa % ten).is_exact_zero() {
        mantissa = mantissa / ten;
        exponent -= 1;
    }

    match mantissa.to_i64().and_then(|m| rebuild_decimal::<T>(m, -exponent)) {
        Some(rounded) if rounded.is_finite() => rounded,
        _ => value,
    }
}

/// `value * 10^exponent`, in steps whose factors are exact
fn scale_by_pow10<T: GaussScalar>(value: T, exponent: i32) -> T {
    let step = T::MAX_EXACT_POW10;
    let ten = T::ten();
    let mut scaled = value;
    let mut remaining = exponent;
    while remaining > step {
        scaled = scaled * ten.powi(step);
        remaining -= step;
    }
    while remaining < -step {
        scaled = scaled / ten.powi(step);
        remaining += step;
    }
    if remaining >= 0 {
        scaled * ten.powi(remaining)
    } else {
        scaled / ten.powi(-remaining)
    }
}

/// Nearest representable value to `mantissa * 10^exponent`
fn rebuild_decimal<T: GaussScalar>(mantissa: i64, exponent: i32) -> Option<T> {
    let limit = T::MAX_EXACT_POW10;
    let m = T::from_i64(mantissa)?;
    if (0..=limit).contains(&exponent) {
        // Both operands are exact, so the single product is correctly rounded
        Some(m * T::ten().powi(exponent))
    } else if (-limit..0).contains(&exponent) {
        Some(m / T::ten().powi(-exponent))
    } else {
        T::from_decimal(mantissa, exponent)
    }
}
