//! 4D homogeneous vector (single and double precision).

use super::vec3::{Vec3F32, Vec3F64};

macro_rules! impl_vec4_ops {
    ($name:ident, $vec3:ident) => {
        impl $name {
            /// Homogeneous point: `w = 1`, so translations apply.
            #[inline]
            #[must_use]
            pub const fn from_point(p: $vec3) -> Self {
                Self::new(p.x, p.y, p.z, 1.0)
            }

            /// Homogeneous direction: `w = 0`, so translations are ignored.
            #[inline]
            #[must_use]
            pub const fn from_direction(d: $vec3) -> Self {
                Self::new(d.x, d.y, d.z, 0.0)
            }

            /// Drops the `w` component without a perspective divide.
            #[inline]
            #[must_use]
            pub const fn truncate(self) -> $vec3 {
                $vec3::new(self.x, self.y, self.z)
            }
        }
    };
}

define_vector_type!(
    /// 4D homogeneous vector (single precision).
    Vec4F32,
    glam::Vec4,
    f32,
    [f32; 4],
    [x, y, z, w]
);
impl_vec4_ops!(Vec4F32, Vec3F32);

define_vector_type!(
    /// 4D homogeneous vector (double precision).
    Vec4F64,
    glam::DVec4,
    f64,
    [f64; 4],
    [x, y, z, w]
);
impl_vec4_ops!(Vec4F64, Vec3F64);
