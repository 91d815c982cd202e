//! Strategy traits for the scalar math primitives.
//!
//! Each trait is a family of pure functions with a fixed signature. The
//! concrete strategies live in [`crate::fastmath`]: [`Library`] delegates to
//! the platform (or `libm`) implementation, [`Fast`] and [`FastRefined`] use
//! the bit-level and polynomial approximations. Which one is *active* is a
//! compile-time decision made through Cargo features, so call sites never
//! name a strategy.
//!
//! Implementing these traits on a zero-sized type is all that is needed to
//! plug in another approximation, e.g. a hardware reciprocal square root:
//!
//! ```
//! use attitude::traits::ReciprocalSqrt;
//!
//! struct Exact;
//!
//! impl ReciprocalSqrt for Exact {
//!     fn reciprocal_sqrt(x: f32) -> f32 {
//!         1.0 / x.sqrt()
//!     }
//! }
//!
//! assert_eq!(Exact::reciprocal_sqrt(4.0), 0.5);
//! ```
//!
//! [`Library`]: crate::fastmath::Library
//! [`Fast`]: crate::fastmath::Fast
//! [`FastRefined`]: crate::fastmath::FastRefined

/// Reciprocal square root, `1/√x`.
///
/// Only defined for `x > 0`. Implementations are free to return any value
/// (including NaN or ∞) for non-positive input.
pub trait ReciprocalSqrt {
    fn reciprocal_sqrt(x: f32) -> f32;
}

/// Forward trigonometric functions on the whole real line.
pub trait Trigonometry {
    fn sin(x: f32) -> f32;

    fn cos(x: f32) -> f32;

    /// Sine and cosine of the same argument, `(sin x, cos x)`.
    ///
    /// The default evaluates both separately; strategies that share range
    /// reduction between the two should override it.
    #[inline]
    fn sin_cos(x: f32) -> (f32, f32) {
        (Self::sin(x), Self::cos(x))
    }
}

/// Inverse trigonometric functions.
pub trait InverseTrigonometry {
    /// Four-quadrant arctangent of `y / x`, in `[-π, π]`.
    fn atan2(y: f32, x: f32) -> f32;

    /// Arcsine for `x ∈ [-1, 1]`, in `[-π/2, π/2]`.
    fn asin(x: f32) -> f32;

    /// Arccosine for `x ∈ [-1, 1]`, in `[0, π]`.
    #[inline]
    fn acos(x: f32) -> f32 {
        core::f32::consts::FRAC_PI_2 - Self::asin(x)
    }
}
