//! Matrix types module.
//!
//! This module provides the row-major matrix types of the kernel:
//! - Mat3F32 / Mat3F64: 3x3 matrix
//! - Mat4F32 / Mat4F64: 4x4 matrix with the transform constructors

#[macro_use]
mod mat;

mod mat3;
mod mat4;

pub use {mat3::Mat3F32, mat3::Mat3F64};
pub use {mat4::Mat4F32, mat4::Mat4F64};
