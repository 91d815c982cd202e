//! Reciprocal square root by IEEE-754 bit manipulation.
//!
//! The initial estimate reinterprets the float's bits as an integer, halves
//! the exponent with a shift and subtracts it from a magic constant. One
//! Newton–Raphson step `y ← y(1.5 − ½xy²)` then roughly doubles the number of
//! correct bits. The first step uses Pizer's pre-scaled constants, which
//! minimise the maximum relative error of the single-step result instead of
//! the error of the raw estimate.
//!
//! Reference: <https://pizer.wordpress.com/2008/10/12/fast-inverse-square-root/>

/// Magic constant paired with the pre-scaled first iteration.
const MAGIC: u32 = 0x5f1f_1412;

/// Pre-scaled Newton–Raphson constants: `1.5·k` and `0.5·k³` for the
/// estimate's optimal scale factor `k`.
const FIRST_STEP_A: f32 = 1.690_002_3;
const FIRST_STEP_B: f32 = 0.714_158_17;

/// Approximate `1/√x` with one Newton–Raphson iteration.
///
/// Maximum relative error is below `7e-4` (about 4.5 significant digits)
/// over the normal positive range. For `x ≤ 0`, NaN or ∞ the result is
/// meaningless but finite arithmetic is still performed; no check is made.
///
/// ```
/// use attitude::fastmath::fast_reciprocal_sqrt;
///
/// let y = fast_reciprocal_sqrt(4.0);
/// assert!((y - 0.5).abs() < 0.5 * 7e-4);
/// ```
#[inline]
pub fn fast_reciprocal_sqrt(x: f32) -> f32 {
    let y = f32::from_bits(MAGIC.wrapping_sub(x.to_bits() >> 1));
    y * (FIRST_STEP_A - FIRST_STEP_B * x * y * y)
}

/// Approximate `1/√x` with two Newton–Raphson iterations.
///
/// Maximum relative error is below `1e-6`, i.e. within a few ULP of
/// `1.0 / x.sqrt()`. Same domain caveats as [`fast_reciprocal_sqrt`].
#[inline]
pub fn fast_reciprocal_sqrt_refined(x: f32) -> f32 {
    let y = fast_reciprocal_sqrt(x);
    y * (1.5 - 0.5 * x * y * y)
}
