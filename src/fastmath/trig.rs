//! Sine and cosine by quadrant range reduction and short polynomials.
//!
//! The argument is scaled by 2/π and rounded to the nearest integer quadrant
//! `q`; the remainder `r ∈ [-0.5, 0.5]` (in units of π/2) feeds an odd
//! degree-5 polynomial for `sin(r·π/2)` and an even degree-6 polynomial for
//! `cos(r·π/2)`. The two low bits of `q` select which polynomial to use and
//! its sign:
//!
//! | `q mod 4` | sin(x)   | cos(x)   |
//! |-----------|----------|----------|
//! | 0         | +sin(r)  | +cos(r)  |
//! | 1         | +cos(r)  | −sin(r)  |
//! | 2         | −sin(r)  | −cos(r)  |
//! | 3         | −cos(r)  | +sin(r)  |
//!
//! The remainder is formed in radians against a two-part π/2 (Cody–Waite)
//! and only then scaled, which keeps the reduction error well below the
//! polynomial error for |x| up to a few hundred radians. Beyond the range
//! where `q` fits an `i32` the quadrant saturates and the result is no
//! longer meaningful.
//!
//! Coefficients from *Optimized Trigonometric Functions on TI Arm Cores*
//! (TI SPRAD27A).

use num_traits::Float;

const TWO_OVER_PI: f32 = core::f32::consts::FRAC_2_PI;

/// π/2 split so that `q * PI_OVER_2_HI` is exact for `|q| < 2^16`.
const PI_OVER_2_HI: f32 = 1.570_312_5;
const PI_OVER_2_LO: f32 = 4.838_267_949e-4;

/// `sin(r·π/2)` for `r ∈ [-0.5, 0.5]`.
#[inline]
fn sin_poly5(r: f32) -> f32 {
    const C1: f32 = 1.570_787_2;
    const C3: f32 = -0.645_685_2;
    const C5: f32 = 0.077_562_883;
    let r2 = r * r;
    r * (C1 + r2 * (C3 + r2 * C5))
}

/// `cos(r·π/2)` for `r ∈ [-0.5, 0.5]`.
#[inline]
fn cos_poly6(r: f32) -> f32 {
    const C2: f32 = -1.233_697_7;
    const C4: f32 = 0.253_601_07;
    const C6: f32 = -0.020_408_373;
    let r2 = r * r;
    1.0 + r2 * (C2 + r2 * (C4 + r2 * C6))
}

/// Split `x` into a quadrant index and a remainder in units of π/2.
#[inline]
fn reduce(x: f32) -> (f32, i32) {
    let q = Float::round(x * TWO_OVER_PI);
    let r = ((x - q * PI_OVER_2_HI) - q * PI_OVER_2_LO) * TWO_OVER_PI;
    (r, q as i32)
}

/// Polynomial sine. Absolute error below `1e-6` for `|x| ≤ 4π`.
///
/// ```
/// use attitude::fastmath::fast_sin;
///
/// assert_eq!(fast_sin(0.0), 0.0);
/// assert!((fast_sin(core::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn fast_sin(x: f32) -> f32 {
    let (r, q) = reduce(x);
    match q & 3 {
        0 => sin_poly5(r),
        1 => cos_poly6(r),
        2 => -sin_poly5(r),
        _ => -cos_poly6(r),
    }
}

/// Polynomial cosine. Absolute error below `1e-6` for `|x| ≤ 4π`.
#[inline]
pub fn fast_cos(x: f32) -> f32 {
    let (r, q) = reduce(x);
    match q & 3 {
        0 => cos_poly6(r),
        1 => -sin_poly5(r),
        2 => -cos_poly6(r),
        _ => sin_poly5(r),
    }
}

/// Polynomial `(sin x, cos x)` sharing a single range reduction.
#[inline]
pub fn fast_sin_cos(x: f32) -> (f32, f32) {
    let (r, q) = reduce(x);
    let s = sin_poly5(r);
    let c = cos_poly6(r);
    match q & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}
