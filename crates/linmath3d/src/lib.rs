#![deny(missing_docs)]
//! Small 3D linear-algebra kernel for placing and projecting geometry.
//!
//! This crate provides:
//! - 3D vectors and 4D homogeneous vectors (`vector` module)
//! - Row-major 3x3 and 4x4 matrices with the scale, translate, rotate,
//!   perspective and look-at constructors (`matrix` module)
//! - Degree/radian helpers ([`angle`]) and opt-in input checks ([`validate`])
//!
//! # Conventions
//!
//! Matrices are stored **row-major**: element (row `r`, column `c`) is
//! `e[r * n + c]`, and transforms apply to column vectors (`M * v`).
//! Consumers expecting column-major data (OpenGL, `glam`) must transpose at
//! the boundary, e.g. with `to_cols_array` or the `glam` conversions, or by
//! passing `transpose = GL_TRUE` to `glUniformMatrix4fv`.
//!
//! The numeric operations never fail. Degenerate inputs such as a zero
//! vector passed to `normalize` propagate NaN or infinity instead.
//!
//! ```
//! use linmath3d::{Mat4F32, Vec3F32};
//!
//! let model = Mat4F32::from_translation(0.0, 0.0, -5.0)
//!     * Mat4F32::from_axis_angle_degrees(Vec3F32::Y, 90.0);
//! let p = model.transform_point3(Vec3F32::X);
//! assert!((p.z - -6.0).abs() < 1e-5);
//! ```

pub mod angle;

mod error;
mod matrix;
mod vector;

pub mod validate;

pub use error::Math3dError;
pub use matrix::{Mat3F32, Mat3F64, Mat4F32, Mat4F64};
pub use vector::{Vec3F32, Vec3F64, Vec4F32, Vec4F64};

// Unsuffixed aliases bound to the precision selected by the `f64` feature.

/// Scalar type of the unsuffixed aliases.
#[cfg(not(feature = "f64"))]
pub type Real = f32;
/// 3D vector of the configured precision.
#[cfg(not(feature = "f64"))]
pub type Vec3 = Vec3F32;
/// 4D vector of the configured precision.
#[cfg(not(feature = "f64"))]
pub type Vec4 = Vec4F32;
/// 3x3 matrix of the configured precision.
#[cfg(not(feature = "f64"))]
pub type Mat3 = Mat3F32;
/// 4x4 matrix of the configured precision.
#[cfg(not(feature = "f64"))]
pub type Mat4 = Mat4F32;

/// Scalar type of the unsuffixed aliases.
#[cfg(feature = "f64")]
pub type Real = f64;
/// 3D vector of the configured precision.
#[cfg(feature = "f64")]
pub type Vec3 = Vec3F64;
/// 4D vector of the configured precision.
#[cfg(feature = "f64")]
pub type Vec4 = Vec4F64;
/// 3x3 matrix of the configured precision.
#[cfg(feature = "f64")]
pub type Mat3 = Mat3F64;
/// 4x4 matrix of the configured precision.
#[cfg(feature = "f64")]
pub type Mat4 = Mat4F64;
