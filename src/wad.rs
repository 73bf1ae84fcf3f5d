/*
    ALICE-IRS-Margin
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Signed 18-decimal fixed-point ("wad") arithmetic.
//!
//! Every monetary quantity, rate, factor, and timestamp in this crate is a
//! [`Wad`]: an `i128` holding the value scaled by `10^18`.  Multiplication
//! and division widen through `U256` so the full intermediate product is
//! always formed, exactly as the 256-bit reference contracts do; only a
//! result that does not fit back into `i128` is an error.  Overflow and
//! division by zero surface as distinct [`MarginError`] variants instead of
//! wrapping, saturating, or silently returning zero.  Quotients truncate
//! toward zero, matching the big-integer convention of the reference system
//! so that results agree with it bit for bit.

use alloy_primitives::U256;

use crate::error::MarginError;

/// `10^18` as a `U256`, for widened rescaling.
const SCALE_U256: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

// ---------------------------------------------------------------------------
// Wad
// ---------------------------------------------------------------------------

/// A signed fixed-point number with 18 decimal places.
///
/// `Wad(1_000_000_000_000_000_000)` represents `1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wad(i128);

impl Wad {
    /// Scale factor: one whole unit in raw representation (`10^18`).
    pub const SCALE: i128 = 1_000_000_000_000_000_000;

    /// Zero.
    pub const ZERO: Wad = Wad(0);

    /// One whole unit (`1.0`).
    pub const ONE: Wad = Wad(Self::SCALE);

    /// Construct from a whole number of units.
    ///
    /// Cannot overflow: `i64::MAX * 10^18` fits comfortably in `i128`.
    #[inline(always)]
    pub const fn from_int(units: i64) -> Wad {
        Wad(units as i128 * Self::SCALE)
    }

    /// Construct from an already-scaled raw value.
    #[inline(always)]
    pub const fn from_raw(raw: i128) -> Wad {
        Wad(raw)
    }

    /// Return the raw scaled value.
    #[inline(always)]
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Return `true` if the value is strictly negative.
    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition.
    #[inline(always)]
    pub fn add(self, other: Wad) -> Result<Wad, MarginError> {
        self.0
            .checked_add(other.0)
            .map(Wad)
            .ok_or(MarginError::ArithmeticOverflow)
    }

    /// Checked subtraction.
    #[inline(always)]
    pub fn sub(self, other: Wad) -> Result<Wad, MarginError> {
        self.0
            .checked_sub(other.0)
            .map(Wad)
            .ok_or(MarginError::ArithmeticOverflow)
    }

    /// Fixed-point multiplication: `self * other / SCALE`.
    ///
    /// The full product is formed in 256 bits before rescaling, so two
    /// in-range operands never lose an intermediate; the call fails with
    /// [`MarginError::ArithmeticOverflow`] only when the rescaled result
    /// does not fit `i128`.  The quotient truncates toward zero.
    #[inline(always)]
    pub fn mul(self, other: Wad) -> Result<Wad, MarginError> {
        let negative = self.is_negative() != other.is_negative();
        let product = U256::from(self.0.unsigned_abs()) * U256::from(other.0.unsigned_abs());
        Self::from_magnitude(product / SCALE_U256, negative)
    }

    /// Fixed-point division: `self * SCALE / other`.
    ///
    /// A divisor of exactly zero fails with [`MarginError::DivisionByZero`];
    /// this is a required observable failure mode, never coerced to zero.
    /// The quotient truncates toward zero.
    #[inline(always)]
    pub fn div(self, other: Wad) -> Result<Wad, MarginError> {
        if other.0 == 0 {
            return Err(MarginError::DivisionByZero);
        }
        let negative = self.is_negative() != other.is_negative();
        let scaled = U256::from(self.0.unsigned_abs()) * SCALE_U256;
        Self::from_magnitude(scaled / U256::from(other.0.unsigned_abs()), negative)
    }

    /// Checked negation.
    #[inline(always)]
    pub fn neg(self) -> Result<Wad, MarginError> {
        self.0
            .checked_neg()
            .map(Wad)
            .ok_or(MarginError::ArithmeticOverflow)
    }

    /// Checked absolute value.
    #[inline(always)]
    pub fn abs(self) -> Result<Wad, MarginError> {
        self.0
            .checked_abs()
            .map(Wad)
            .ok_or(MarginError::ArithmeticOverflow)
    }

    /// Return the greater of `self` and `other`.
    #[inline(always)]
    pub fn max(self, other: Wad) -> Wad {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }

    /// Return the lesser of `self` and `other`.
    #[inline(always)]
    pub fn min(self, other: Wad) -> Wad {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Narrow a widened magnitude back to a signed raw value.
    #[inline(always)]
    fn from_magnitude(magnitude: U256, negative: bool) -> Result<Wad, MarginError> {
        let raw = u128::try_from(magnitude).map_err(|_| MarginError::ArithmeticOverflow)?;
        if raw > i128::MAX as u128 {
            return Err(MarginError::ArithmeticOverflow);
        }
        let raw = raw as i128;
        Ok(Wad(if negative { -raw } else { raw }))
    }
}

impl core::fmt::Display for Wad {
    /// Render as a decimal number with trailing fraction zeros trimmed,
    /// e.g. `-2000`, `0.0125`, `1.5`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let scale = Wad::SCALE as u128;
        let int_part = magnitude / scale;
        let frac_part = magnitude % scale;
        let sign = if self.0 < 0 { "-" } else { "" };
        if frac_part == 0 {
            write!(f, "{sign}{int_part}")
        } else {
            let frac = format!("{frac_part:018}");
            write!(f, "{sign}{int_part}.{}", frac.trim_end_matches('0'))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn test_from_int() {
        assert_eq!(Wad::from_int(1), Wad::ONE);
        assert_eq!(Wad::from_int(0), Wad::ZERO);
        assert_eq!(Wad::from_int(-2000).raw(), -2_000_000_000_000_000_000_000);
    }

    // -----------------------------------------------------------------------
    // Addition / subtraction
    // -----------------------------------------------------------------------

    #[test]
    fn test_add_sub() {
        let a = Wad::from_int(1000);
        let b = Wad::from_int(-2000);
        assert_eq!(a.add(b).unwrap(), Wad::from_int(-1000));
        assert_eq!(a.sub(b).unwrap(), Wad::from_int(3000));
    }

    #[test]
    fn test_add_overflow() {
        let a = Wad::from_raw(i128::MAX);
        assert_eq!(a.add(Wad::ONE), Err(MarginError::ArithmeticOverflow));
    }

    #[test]
    fn test_sub_overflow() {
        let a = Wad::from_raw(i128::MIN);
        assert_eq!(a.sub(Wad::ONE), Err(MarginError::ArithmeticOverflow));
    }

    // -----------------------------------------------------------------------
    // Multiplication
    // -----------------------------------------------------------------------

    #[test]
    fn test_mul_basic() {
        // 1.5 * 2 = 3
        let a = Wad::from_raw(1_500_000_000_000_000_000);
        assert_eq!(a.mul(Wad::from_int(2)).unwrap(), Wad::from_int(3));
    }

    #[test]
    fn test_mul_truncates_toward_zero() {
        // 1 raw unit * 0.5 → 0 (truncated), both signs.
        let tiny = Wad::from_raw(1);
        let half = Wad::from_raw(Wad::SCALE / 2);
        assert_eq!(tiny.mul(half).unwrap(), Wad::ZERO);
        assert_eq!(tiny.neg().unwrap().mul(half).unwrap(), Wad::ZERO);
    }

    #[test]
    fn test_mul_large_operands_do_not_lose_intermediate() {
        // 10^7 units * 10^7 units = 10^14 units: the raw product is far past
        // i128 but the widened path keeps it exact.
        let a = Wad::from_int(10_000_000);
        assert_eq!(a.mul(a).unwrap(), Wad::from_int(100_000_000_000_000));
    }

    #[test]
    fn test_mul_overflow() {
        let a = Wad::from_raw(i128::MAX);
        assert_eq!(
            a.mul(Wad::from_int(2)),
            Err(MarginError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_mul_sign_rules() {
        let a = Wad::from_int(-3);
        let b = Wad::from_int(4);
        assert_eq!(a.mul(b).unwrap(), Wad::from_int(-12));
        assert_eq!(a.mul(a).unwrap(), Wad::from_int(9));
    }

    // -----------------------------------------------------------------------
    // Division
    // -----------------------------------------------------------------------

    #[test]
    fn test_div_basic() {
        // 3 / 2 = 1.5
        let q = Wad::from_int(3).div(Wad::from_int(2)).unwrap();
        assert_eq!(q.raw(), 1_500_000_000_000_000_000);
    }

    #[test]
    fn test_div_by_zero_is_distinct_error() {
        let result = Wad::ONE.div(Wad::ZERO);
        assert_eq!(result, Err(MarginError::DivisionByZero));
        // Never an overflow error and never a silent zero.
        assert_ne!(result, Err(MarginError::ArithmeticOverflow));
        assert_ne!(result, Ok(Wad::ZERO));
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        // -1 / 3 = -0.333... → last decimal truncated, not floored.
        let q = Wad::from_int(-1).div(Wad::from_int(3)).unwrap();
        assert_eq!(q.raw(), -333_333_333_333_333_333);
    }

    #[test]
    fn test_div_large_numerator_is_exact() {
        // i128::MAX / 1 round-trips through the widened path untouched.
        let a = Wad::from_raw(i128::MAX);
        assert_eq!(a.div(Wad::ONE).unwrap(), a);
    }

    #[test]
    fn test_div_overflow() {
        // i128::MAX / 0.5 doubles the raw value out of range.
        let a = Wad::from_raw(i128::MAX);
        let half = Wad::from_raw(Wad::SCALE / 2);
        assert_eq!(a.div(half), Err(MarginError::ArithmeticOverflow));
    }

    // -----------------------------------------------------------------------
    // Negation / absolute value / ordering
    // -----------------------------------------------------------------------

    #[test]
    fn test_neg_abs() {
        let a = Wad::from_int(-2000);
        assert_eq!(a.neg().unwrap(), Wad::from_int(2000));
        assert_eq!(a.abs().unwrap(), Wad::from_int(2000));
        assert!(a.is_negative());
        assert!(!Wad::ZERO.is_negative());
    }

    #[test]
    fn test_min_max() {
        let a = Wad::from_int(-5);
        let b = Wad::from_int(7);
        assert_eq!(a.max(b), b);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(a), a);
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    #[test]
    fn test_display() {
        assert_eq!(Wad::from_int(-2000).to_string(), "-2000");
        assert_eq!(Wad::from_raw(12_500_000_000_000_000).to_string(), "0.0125");
        assert_eq!(Wad::from_raw(1_500_000_000_000_000_000).to_string(), "1.5");
        assert_eq!(Wad::ZERO.to_string(), "0");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_add_commutes(a in -1_000_000_000_000_000_000_000i128..1_000_000_000_000_000_000_000,
                             b in -1_000_000_000_000_000_000_000i128..1_000_000_000_000_000_000_000) {
            let a = Wad::from_raw(a);
            let b = Wad::from_raw(b);
            prop_assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
        }

        #[test]
        fn prop_mul_one_is_identity(a in -1_000_000_000_000_000_000_000i128..1_000_000_000_000_000_000_000) {
            let a = Wad::from_raw(a);
            prop_assert_eq!(a.mul(Wad::ONE).unwrap(), a);
            prop_assert_eq!(a.div(Wad::ONE).unwrap(), a);
        }

        #[test]
        fn prop_mul_sign(a in -1_000_000_000_000i128..1_000_000_000_000,
                         b in -1_000_000_000_000i128..1_000_000_000_000) {
            let product = Wad::from_raw(a * Wad::SCALE).mul(Wad::from_raw(b)).unwrap();
            prop_assert_eq!(product.raw(), a * b);
        }

        #[test]
        fn prop_mul_matches_div_inverse(a in -1_000_000_000i64..1_000_000_000,
                                        b in 1i64..1_000_000) {
            // (a * b) / b recovers a exactly for whole-unit operands.
            let a = Wad::from_int(a);
            let b = Wad::from_int(b);
            let round_trip = a.mul(b).unwrap().div(b).unwrap();
            prop_assert_eq!(round_trip, a);
        }
    }
}
