//! Scalar approximations and compile-time strategy selection.
//!
//! Three families of scalar primitives sit underneath every vector,
//! quaternion and matrix operation in this crate: reciprocal square root,
//! sine/cosine, and the inverse trigonometric functions. Each family has a
//! library implementation and a fast approximation; the one used by the rest
//! of the crate is chosen by Cargo features.
//!
//! | Feature                         | Strategy for              | Max error            |
//! |---------------------------------|---------------------------|----------------------|
//! | *(none)*                        | all families: [`Library`] | platform             |
//! | `fast-reciprocal-sqrt`          | `1/√x`: [`Fast`]          | `7e-4` relative      |
//! | `fast-reciprocal-sqrt-refined`  | `1/√x`: [`FastRefined`]   | `1e-6` relative      |
//! | `fast-trigonometry`             | sin, cos: [`Fast`]        | `1e-6` for `|x| ≤ 4π`|
//! | `fast-inverse-trigonometry`     | atan2, asin, acos: [`Fast`] | `1.2e-5` rad       |
//! | `fast-math`                     | all three, refined `1/√x` |                      |
//!
//! When both reciprocal square root features are enabled the refined one
//! wins. The raw approximations ([`fast_reciprocal_sqrt`], [`fast_sin`],
//! [`fast_atan2`], ...) are always exported, so either path can be called
//! explicitly regardless of features.
//!
//! # Example
//!
//! ```
//! use attitude::fastmath::{self, Fast, Library};
//! use attitude::traits::Trigonometry;
//!
//! let x = 0.3_f32;
//! let exact = Library::sin(x);
//! assert!((Fast::sin(x) - exact).abs() < 1e-6);
//!
//! // Dispatches to whichever strategy the enabled features select.
//! assert!((fastmath::sin(x) - exact).abs() < 1e-6);
//! ```

mod inverse_trig;
mod rsqrt;
mod trig;


pub use inverse_trig::{fast_acos, fast_asin, fast_asin_restricted, fast_atan, fast_atan2};
pub use rsqrt::{fast_reciprocal_sqrt, fast_reciprocal_sqrt_refined};
pub use trig::{fast_cos, fast_sin, fast_sin_cos};

use num_traits::Float;

use crate::traits::{InverseTrigonometry, ReciprocalSqrt, Trigonometry};

// ── Strategies ──────────────────────────────────────────────────────

/// The platform implementation (`std` or `libm`) of every primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Library;

/// Bit-level and polynomial approximations.
///
/// Reciprocal square root uses a single Newton–Raphson iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fast;

/// Bit-level reciprocal square root with two Newton–Raphson iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastRefined;

impl ReciprocalSqrt for Library {
    #[inline]
    fn reciprocal_sqrt(x: f32) -> f32 {
        1.0 / Float::sqrt(x)
    }
}

impl ReciprocalSqrt for Fast {
    #[inline]
    fn reciprocal_sqrt(x: f32) -> f32 {
        fast_reciprocal_sqrt(x)
    }
}

impl ReciprocalSqrt for FastRefined {
    #[inline]
    fn reciprocal_sqrt(x: f32) -> f32 {
        fast_reciprocal_sqrt_refined(x)
    }
}

impl Trigonometry for Library {
    #[inline]
    fn sin(x: f32) -> f32 {
        Float::sin(x)
    }

    #[inline]
    fn cos(x: f32) -> f32 {
        Float::cos(x)
    }

    #[inline]
    fn sin_cos(x: f32) -> (f32, f32) {
        Float::sin_cos(x)
    }
}

impl Trigonometry for Fast {
    #[inline]
    fn sin(x: f32) -> f32 {
        fast_sin(x)
    }

    #[inline]
    fn cos(x: f32) -> f32 {
        fast_cos(x)
    }

    #[inline]
    fn sin_cos(x: f32) -> (f32, f32) {
        fast_sin_cos(x)
    }
}

impl InverseTrigonometry for Library {
    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        Float::atan2(y, x)
    }

    #[inline]
    fn asin(x: f32) -> f32 {
        Float::asin(x)
    }

    #[inline]
    fn acos(x: f32) -> f32 {
        Float::acos(x)
    }
}

impl InverseTrigonometry for Fast {
    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        fast_atan2(y, x)
    }

    #[inline]
    fn asin(x: f32) -> f32 {
        fast_asin(x)
    }

    #[inline]
    fn acos(x: f32) -> f32 {
        fast_acos(x)
    }
}

// ── Active selection ────────────────────────────────────────────────

/// Reciprocal square root strategy selected by features.
#[cfg(feature = "fast-reciprocal-sqrt-refined")]
pub type ActiveReciprocalSqrt = FastRefined;
/// Reciprocal square root strategy selected by features.
#[cfg(all(
    feature = "fast-reciprocal-sqrt",
    not(feature = "fast-reciprocal-sqrt-refined")
))]
pub type ActiveReciprocalSqrt = Fast;
/// Reciprocal square root strategy selected by features.
#[cfg(not(any(
    feature = "fast-reciprocal-sqrt",
    feature = "fast-reciprocal-sqrt-refined"
)))]
pub type ActiveReciprocalSqrt = Library;

/// Sine/cosine strategy selected by features.
#[cfg(feature = "fast-trigonometry")]
pub type ActiveTrigonometry = Fast;
/// Sine/cosine strategy selected by features.
#[cfg(not(feature = "fast-trigonometry"))]
pub type ActiveTrigonometry = Library;

/// Inverse trigonometry strategy selected by features.
#[cfg(feature = "fast-inverse-trigonometry")]
pub type ActiveInverseTrigonometry = Fast;
/// Inverse trigonometry strategy selected by features.
#[cfg(not(feature = "fast-inverse-trigonometry"))]
pub type ActiveInverseTrigonometry = Library;

/// `1/√x` through [`ActiveReciprocalSqrt`].
#[inline]
pub fn reciprocal_sqrt(x: f32) -> f32 {
    ActiveReciprocalSqrt::reciprocal_sqrt(x)
}

/// `sin x` through [`ActiveTrigonometry`].
#[inline]
pub fn sin(x: f32) -> f32 {
    ActiveTrigonometry::sin(x)
}

/// `cos x` through [`ActiveTrigonometry`].
#[inline]
pub fn cos(x: f32) -> f32 {
    ActiveTrigonometry::cos(x)
}

/// `(sin x, cos x)` through [`ActiveTrigonometry`].
#[inline]
pub fn sin_cos(x: f32) -> (f32, f32) {
    ActiveTrigonometry::sin_cos(x)
}

/// `atan2(y, x)` through [`ActiveInverseTrigonometry`].
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    ActiveInverseTrigonometry::atan2(y, x)
}

/// `asin x` through [`ActiveInverseTrigonometry`].
#[inline]
pub fn asin(x: f32) -> f32 {
    ActiveInverseTrigonometry::asin(x)
}

/// `acos x` through [`ActiveInverseTrigonometry`].
#[inline]
pub fn acos(x: f32) -> f32 {
    ActiveInverseTrigonometry::acos(x)
}
