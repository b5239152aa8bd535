/* Portions Copyright 2006 The Android Open Source Project
 *
 * Use of that source code is governed by a BSD-style license that can be
 * found in the LICENSE.skia file.
 */

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 16.16 signed fixed-point scalar.
///
/// 32 bit signed integer used to represent fractional values with 16 bits
/// to the right of the decimal point. All of the scalar math in the
/// rendering pipeline is done in this representation; `Fixed::ONE` is the
/// unique encoding of 1.0.
///
/// Arithmetic never reports overflow. A division whose true quotient falls
/// outside the 32 bit range is pinned to `MAX`/`MIN`, and those two raw
/// values double as the infinity sentinels: check `is_finite` after any
/// operation that can overflow.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    /// 1.0 in the fixed domain.
    pub const ONE: Fixed = Fixed(1 << 16);
    pub const HALF: Fixed = Fixed(1 << 15);
    /// The positive saturation bound. Overflowing divisions pin here, so it
    /// acts as +infinity and is not a finite value.
    pub const MAX: Fixed = Fixed(i32::MAX);
    /// The negative saturation bound; likewise -infinity.
    pub const MIN: Fixed = Fixed(i32::MIN);
    /// Tolerance used by `is_near_zero`: 2^-12.
    pub const NEAR_ZERO: Fixed = Fixed(1 << 4);

    /// Reinterprets raw 16.16 bits as a scalar.
    #[inline]
    pub const fn from_raw(bits: i32) -> Fixed {
        Fixed(bits)
    }

    /// The raw 16.16 bits.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts an integer. Defined for the +/-32767 range that fits the
    /// 16 integral bits; values beyond that lose their high bits.
    #[inline]
    pub const fn from_i32(v: i32) -> Fixed {
        Fixed(v << 16)
    }

    #[inline]
    pub fn from_f32(v: f32) -> Fixed {
        Fixed((v * 65536.) as i32)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / 65536.
    }

    /// Largest integer not greater than the value.
    #[inline]
    pub const fn floor_to_i32(self) -> i32 {
        self.0 >> 16
    }

    /// Smallest integer not less than the value. Defined for finite values.
    #[inline]
    pub const fn ceil_to_i32(self) -> i32 {
        (self.0 + (Fixed::ONE.0 - 1)) >> 16
    }

    /// Nearest integer, halves rounding up. Defined for finite values.
    #[inline]
    pub const fn round_to_i32(self) -> i32 {
        (self.0 + Fixed::HALF.0) >> 16
    }

    #[inline]
    pub fn abs(self) -> Fixed {
        Fixed(self.0.wrapping_abs())
    }

    /// True iff the value lies strictly inside the representable range,
    /// i.e. whatever produced it did not saturate the storage.
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.0 > i32::MIN && self.0 < i32::MAX
    }

    /// True iff the magnitude is within `NEAR_ZERO` of zero. This is the
    /// loose tolerance used when flattening geometry; it is distinct from
    /// an exact-zero test.
    #[inline]
    pub const fn is_near_zero(self) -> bool {
        -Fixed::NEAR_ZERO.0 <= self.0 && self.0 <= Fixed::NEAR_ZERO.0
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    // wrapping negation is exact for every value except the negative
    // sentinel, which wraps onto itself and stays non-finite
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    // the product may exceed 32 bits, so widen before shifting back down
    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(((self.0 as i64 * rhs.0 as i64) >> 16) as i32)
    }
}

impl Mul<i32> for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: i32) -> Fixed {
        Fixed(self.0 * rhs)
    }
}

impl Div<i32> for Fixed {
    type Output = Fixed;

    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: i32) -> Fixed {
        Fixed(self.0 / rhs)
    }
}

impl Div for Fixed {
    type Output = Fixed;

    /// Fixed-point division, truncating toward zero.
    ///
    /// The quotient may exceed 32 bits; it is pinned to the representable
    /// range rather than reported, so a caller that can overflow must test
    /// the result with [`Fixed::is_finite`]. Panics if `rhs` is zero —
    /// callers that cannot rule zero out pre-check, the way
    /// [`valid_unit_divide`](crate::valid_unit_divide) does.
    #[inline]
    fn div(self, rhs: Fixed) -> Fixed {
        let q = ((self.0 as i64) << 16) / rhs.0 as i64;
        Fixed(q.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "Fixed({})", self.to_f32())
        } else {
            write!(f, "Fixed({:#010x})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Fixed::ZERO.raw(), 0);
        assert_eq!(Fixed::ONE.raw(), 65536);
        assert_eq!(Fixed::HALF.raw(), 32768);
        assert_eq!(Fixed::ONE, Fixed::from_i32(1));
        assert_eq!(Fixed::HALF + Fixed::HALF, Fixed::ONE);
    }

    #[test]
    fn int_conversions() {
        assert_eq!(Fixed::from_i32(5).raw(), 5 << 16);
        assert_eq!(Fixed::from_i32(-3).raw(), -3 << 16);
        assert_eq!(Fixed::from_i32(42).floor_to_i32(), 42);
    }

    #[test]
    fn f32_conversions() {
        assert_eq!(Fixed::from_f32(1.0), Fixed::ONE);
        assert_eq!(Fixed::from_f32(0.25).raw(), 16384);
        assert_eq!(Fixed::from_f32(-1.5).raw(), -(3 << 15));
        assert_eq!(Fixed::from_f32(0.25).to_f32(), 0.25);
        assert_eq!(Fixed::from_i32(-7).to_f32(), -7.0);
    }

    #[test]
    fn floor_ceil_round() {
        let v = Fixed::from_f32(5.75);
        assert_eq!(v.floor_to_i32(), 5);
        assert_eq!(v.ceil_to_i32(), 6);
        assert_eq!(v.round_to_i32(), 6);

        let v = Fixed::from_f32(-2.25);
        assert_eq!(v.floor_to_i32(), -3);
        assert_eq!(v.ceil_to_i32(), -2);
        assert_eq!(v.round_to_i32(), -2);

        // exact integers stay put
        assert_eq!(Fixed::from_i32(4).ceil_to_i32(), 4);
        assert_eq!(Fixed::from_i32(4).round_to_i32(), 4);
        assert_eq!(Fixed::HALF.round_to_i32(), 1);
    }

    #[test]
    fn mul_truncates() {
        let a = Fixed::from_f32(2.5);
        let b = Fixed::from_i32(4);
        assert_eq!(a * b, Fixed::from_i32(10));

        // 0.5 * 0.5 = 0.25 exactly
        assert_eq!(Fixed::HALF * Fixed::HALF, Fixed::from_f32(0.25));

        // smallest positive times smallest positive truncates to zero
        assert_eq!(Fixed::from_raw(1) * Fixed::from_raw(1), Fixed::ZERO);

        assert_eq!(Fixed::from_i32(3) * 7, Fixed::from_i32(21));
        assert_eq!(Fixed::from_i32(-3) * 7, Fixed::from_i32(-21));
    }

    #[test]
    fn div_exact_and_truncating() {
        assert_eq!(Fixed::ONE / Fixed::from_i32(4), Fixed::from_f32(0.25));
        assert_eq!(Fixed::from_i32(10) / Fixed::from_i32(4), Fixed::from_f32(2.5));
        // 1/3 truncates toward zero
        assert_eq!((Fixed::ONE / Fixed::from_i32(3)).raw(), 21845);
        assert_eq!((Fixed::from_i32(-1) / Fixed::from_i32(3)).raw(), -21845);
        assert_eq!(Fixed::from_i32(9) / 3, Fixed::from_i32(3));
    }

    #[test]
    fn div_overflow_pins_to_sentinel() {
        // 32767 / 2^-16 would be ~2^31, far outside the storage
        let huge = Fixed::from_i32(32767) / Fixed::from_raw(2);
        assert_eq!(huge, Fixed::MAX);
        assert!(!huge.is_finite());

        let small = Fixed::from_i32(-32767) / Fixed::from_raw(2);
        assert_eq!(small, Fixed::MIN);
        assert!(!small.is_finite());

        // an in-range quotient is untouched and finite
        let q = Fixed::from_i32(100) / Fixed::from_i32(3);
        assert!(q.is_finite());
    }

    #[test]
    fn is_finite_bounds() {
        assert!(Fixed::ZERO.is_finite());
        assert!(Fixed::ONE.is_finite());
        assert!(Fixed::from_raw(i32::MAX - 1).is_finite());
        assert!(Fixed::from_raw(i32::MIN + 1).is_finite());
        assert!(!Fixed::MAX.is_finite());
        assert!(!Fixed::MIN.is_finite());
    }

    #[test]
    fn neg_is_exact() {
        let v = Fixed::from_f32(1.25);
        assert_eq!(-v, Fixed::from_f32(-1.25));
        assert_eq!(-(-v), v);
        assert_eq!(-Fixed::ZERO, Fixed::ZERO);
        assert_eq!((-v) + v, Fixed::ZERO);

        // MIN has no representable negation and wraps onto itself
        assert_eq!(-Fixed::MIN, Fixed::MIN);
        assert!(!(-Fixed::MIN).is_finite());
        // -MAX does exist, one step above the negative sentinel
        assert_eq!(-Fixed::MAX, Fixed::from_raw(i32::MIN + 1));
        assert!((-Fixed::MAX).is_finite());
    }

    #[test]
    fn abs_and_ordering() {
        assert_eq!(Fixed::from_i32(-5).abs(), Fixed::from_i32(5));
        assert_eq!(Fixed::from_i32(5).abs(), Fixed::from_i32(5));

        assert!(Fixed::from_i32(-1) < Fixed::ZERO);
        assert!(Fixed::ZERO < Fixed::from_raw(1));
        assert!(Fixed::from_raw(1) < Fixed::ONE);
        assert!(Fixed::from_f32(-0.5) < Fixed::from_f32(0.5));
        assert_eq!(Fixed::default(), Fixed::ZERO);
    }

    #[test]
    fn near_zero_tolerance() {
        assert!(Fixed::ZERO.is_near_zero());
        assert!(Fixed::from_raw(16).is_near_zero());
        assert!(Fixed::from_raw(-16).is_near_zero());
        assert!(!Fixed::from_raw(17).is_near_zero());
        assert!(!Fixed::from_raw(-17).is_near_zero());
        // near-zero is a tolerance, not the exact-zero test
        assert!(Fixed::from_raw(1).is_near_zero());
        assert_ne!(Fixed::from_raw(1), Fixed::ZERO);
        assert!(!Fixed::MIN.is_near_zero());
    }

    #[test]
    fn debug_formatting() {
        assert_eq!(format!("{:?}", Fixed::from_f32(0.25)), "Fixed(0.25)");
        assert_eq!(format!("{:?}", Fixed::MAX), "Fixed(0x7fffffff)");
    }
}
