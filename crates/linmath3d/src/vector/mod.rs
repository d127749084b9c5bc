//! Vector types module.
//!
//! This module provides the vector types of the kernel:
//! - Vec3F32 / Vec3F64: 3D vector
//! - Vec4F32 / Vec4F64: 4D homogeneous vector

#[macro_use]
mod vec;

mod vec3;
mod vec4;

pub use {vec3::Vec3F32, vec3::Vec3F64};
pub use {vec4::Vec4F32, vec4::Vec4F64};
