//! Polynomial arctangent and arcsine.
//!
//! Both core approximations are odd polynomials evaluated in Horner form on
//! a restricted interval; the full domain is reached through exact
//! identities:
//!
//! - `atan(t) = π/2 − atan(1/t)` folds `|t| > 1` into `[0, 1]`, and the sign
//!   of `x` in `atan2(y, x)` selects between `a` and `π − a`.
//! - `asin(s) = π/2 − asin(√(1 − s²))` folds `s > √2/2` into `[0, √2/2]`,
//!   odd symmetry handles negative input.

use core::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

use num_traits::Float;

/// Abramowitz & Stegun 4.4.49: `atan(x)/x` as a polynomial in `x²`.
const ATAN_COEFFS: [f32; 5] = [0.999_866_0, -0.330_299_5, 0.180_141_0, -0.085_133_0, 0.020_835_1];

/// Chebyshev fit of `asin(x)/x` in `x²` over `x ∈ [0, √2/2]`.
const ASIN_COEFFS: [f32; 5] = [1.000_004_5, 0.166_218_98, 0.081_858_45, 0.009_758_448, 0.094_634_07];

#[inline]
fn horner(coeffs: &[f32; 5], u: f32) -> f32 {
    coeffs[0] + u * (coeffs[1] + u * (coeffs[2] + u * (coeffs[3] + u * coeffs[4])))
}

/// Arctangent for `x ∈ [-1, 1]`.
///
/// Absolute error below `1.2e-5` rad on that interval. Outside it the
/// polynomial diverges quickly; use [`fast_atan2`] for unrestricted input.
#[inline]
pub fn fast_atan(x: f32) -> f32 {
    x * horner(&ATAN_COEFFS, x * x)
}

/// Four-quadrant arctangent of `y / x`.
///
/// Absolute error below `1.2e-5` rad. Returns `0` for `(0, 0)`. When `y` is
/// zero and `x` negative the result is `+π` regardless of the sign of zero,
/// so angles land in `(-π, π]`.
///
/// ```
/// use attitude::fastmath::fast_atan2;
/// use core::f32::consts::FRAC_PI_4;
///
/// assert!((fast_atan2(1.0, 1.0) - FRAC_PI_4).abs() < 1.2e-5);
/// assert!((fast_atan2(-1.0, -1.0) + 3.0 * FRAC_PI_4).abs() < 1.2e-5);
/// ```
#[inline]
pub fn fast_atan2(y: f32, x: f32) -> f32 {
    let ax = Float::abs(x);
    let ay = Float::abs(y);
    if ax == 0.0 && ay == 0.0 {
        return 0.0;
    }
    let mut angle = if ay <= ax {
        fast_atan(ay / ax)
    } else {
        FRAC_PI_2 - fast_atan(ax / ay)
    };
    if x < 0.0 {
        angle = PI - angle;
    }
    if y < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Arcsine for `x ∈ [0, √2/2]`.
///
/// Absolute error below `6e-6` rad on that interval (the fit also holds on
/// the mirrored negative interval).
#[inline]
pub fn fast_asin_restricted(x: f32) -> f32 {
    x * horner(&ASIN_COEFFS, x * x)
}

/// Arcsine for `x ∈ [-1, 1]`.
///
/// Absolute error below `6e-6` rad. Input outside `[-1, 1]` yields NaN;
/// callers that may overshoot through rounding must clamp first.
#[inline]
pub fn fast_asin(x: f32) -> f32 {
    let s = Float::abs(x);
    let angle = if s > FRAC_1_SQRT_2 {
        FRAC_PI_2 - fast_asin_restricted(Float::sqrt(1.0 - s * s))
    } else {
        fast_asin_restricted(s)
    };
    if x < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Arccosine for `x ∈ [-1, 1]`, as `π/2 − asin(x)`.
#[inline]
pub fn fast_acos(x: f32) -> f32 {
    FRAC_PI_2 - fast_asin(x)
}
