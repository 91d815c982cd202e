//! # attitude
//!
//! Vectors, quaternions and 3×3 rotation matrices in `f32`, with fast
//! approximate scalar math for embedded attitude estimation. No-std
//! compatible, no heap allocation.
//!
//! ## Quick start
//!
//! ```
//! use attitude::{Matrix3, Quaternion, Vector3};
//!
//! // Build an attitude from Euler angles and rotate a body vector.
//! let q = Quaternion::from_euler_angles_degrees(19.0, 43.0, 67.0);
//! let v = q.rotate(Vector3::new(1.0, 0.0, 0.0));
//!
//! // Same rotation as a matrix, and back again (up to sign).
//! let m = Matrix3::from_quaternion(&q);
//! assert!((m * Vector3::new(1.0, 0.0, 0.0) - v).magnitude() < 1e-5);
//! let r = m.to_quaternion();
//! assert!((r.dot(q).abs() - 1.0).abs() < 1e-3);
//!
//! assert!((q.yaw_degrees() - 67.0).abs() < 1e-2);
//! ```
//!
//! ## Modules
//!
//! - [`fastmath`] — Reciprocal square root by bit manipulation and
//!   Newton–Raphson, range-reduced polynomial sine/cosine, polynomial
//!   arctangent/arcsine. Every other module calls the feature-selected
//!   dispatchers ([`fastmath::reciprocal_sqrt`], [`fastmath::sin_cos`],
//!   [`fastmath::atan2`], ...), never a concrete implementation.
//!
//! - [`traits`] — [`ReciprocalSqrt`], [`Trigonometry`] and
//!   [`InverseTrigonometry`], the interface each strategy implements.
//!
//! - [`vector`] — [`Vector3`] and [`Vector2`] with the usual algebra.
//!
//! - [`quaternion`] — [`Quaternion`], scalar-first `(w, x, y, z)`, Hamilton
//!   product. Construct from axis-angle, 3-2-1 Euler angles, a pair of
//!   vectors or a rotation matrix. Vector rotation, Euler extraction with
//!   gimbal-lock clamping, and cheap sin/cos/tan of the Euler angles.
//!
//! - [`matrix`] — Row-major [`Matrix3`] and [`Matrix2`]: arithmetic,
//!   transpose, adjugate, determinant, inverse ([`MatrixError`] on singular
//!   input), and the numerically stable quaternion ⇄ matrix conversion.
//!
//! ## Cargo features
//!
//! | Feature                        | Default  | Description |
//! |--------------------------------|----------|-------------|
//! | `std`                          | yes      | Hardware FPU via system libm, `std::error::Error` for [`MatrixError`] |
//! | `libm`                         | baseline | Pure-Rust software float fallback |
//! | `fast-reciprocal-sqrt`         | no       | Bit-trick `1/√x`, one Newton step (rel. error < 7e-4) |
//! | `fast-reciprocal-sqrt-refined` | no       | Bit-trick `1/√x`, two Newton steps (rel. error < 1e-6) |
//! | `fast-trigonometry`            | no       | Polynomial sin/cos (abs. error < 1e-6 on ±4π) |
//! | `fast-inverse-trigonometry`    | no       | Polynomial atan2/asin/acos (abs. error < 1.2e-5 rad) |
//! | `fast-math`                    | no       | All fast paths, refined `1/√x` |
//!
//! Feature selection only changes accuracy and speed, never a signature.

// Unit tests always link std so `format!` and the inherent float methods
// are available under `--no-default-features`.
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub mod fastmath;
pub mod matrix;
pub mod quaternion;
pub mod traits;
pub mod vector;

pub use matrix::{Matrix2, Matrix3, MatrixError};
pub use quaternion::{Quaternion, DEGREES_TO_RADIANS, RADIANS_TO_DEGREES};
pub use traits::{InverseTrigonometry, ReciprocalSqrt, Trigonometry};
pub use vector::{Vector2, Vector3};
