/* Portions Copyright 2006 The Android Open Source Project
 *
 * Use of that source code is governed by a BSD-style license that can be
 * found in the LICENSE.skia file.
 */

use crate::fixed::Fixed;

/// Divides `numer / denom`, accepting the result only if it is a valid
/// interpolation parameter, i.e. lies in `[0, 1)` in the fixed domain.
///
/// On success writes the ratio to `ratio` and returns `true`. On any
/// rejection returns `false` and leaves `ratio` untouched, so a caller can
/// seed it once and test the flag alone.
///
/// Signs are normalized by negating both operands when the numerator is
/// negative; the magnitude test then runs on the adjusted pair, so only
/// operands of the same sign can produce a ratio. A quotient so small it
/// truncates to zero is rejected rather than reported, which keeps a
/// `true` return synonymous with a usable non-degenerate parameter.
pub fn valid_unit_divide(mut numer: Fixed, mut denom: Fixed, ratio: &mut Fixed) -> bool {
    if numer < Fixed::ZERO {
        numer = -numer;
        denom = -denom;
    }

    if denom == Fixed::ZERO || numer == Fixed::ZERO || numer >= denom {
        return false;
    }

    let r = numer / denom;
    if !r.is_finite() {
        return false;
    }

    debug_assert!(r >= Fixed::ZERO && r < Fixed::ONE);
    if r < Fixed::ZERO || r >= Fixed::ONE {
        return false;
    }

    if r == Fixed::ZERO {
        return false;
    }

    *ratio = r;
    true
}

/// [`valid_unit_divide`] with the result carried in the return value.
#[inline]
pub fn try_unit_divide(numer: Fixed, denom: Fixed) -> Option<Fixed> {
    let mut ratio = Fixed::ZERO;
    if valid_unit_divide(numer, denom, &mut ratio) {
        Some(ratio)
    } else {
        None
    }
}
