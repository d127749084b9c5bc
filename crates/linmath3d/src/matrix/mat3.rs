//! 3x3 matrix (single and double precision).

use crate::{Vec3F32, Vec3F64};

macro_rules! impl_mat3_ops {
    ($name:ident, $vec3:ident) => {
        impl $name {
            /// Create a matrix from its three rows.
            #[inline]
            #[must_use]
            pub const fn from_rows(r0: $vec3, r1: $vec3, r2: $vec3) -> Self {
                Self::from_array([r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z])
            }

            /// Matrix-vector product `self * v`, with `v` as a column vector.
            #[inline]
            #[must_use]
            pub fn mul_vec3(self, v: $vec3) -> $vec3 {
                let e = &self.e;
                $vec3::new(
                    e[0] * v.x + e[1] * v.y + e[2] * v.z,
                    e[3] * v.x + e[4] * v.y + e[5] * v.z,
                    e[6] * v.x + e[7] * v.y + e[8] * v.z,
                )
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec3> for $name {
            type Output = $vec3;

            #[inline]
            fn mul(self, rhs: $vec3) -> Self::Output {
                self.mul_vec3(rhs)
            }
        }
    };
}

define_matrix_type!(
    /// 3x3 matrix (single precision), row-major.
    Mat3F32,
    f32,
    3,
    glam::Mat3
);
impl_mat3_ops!(Mat3F32, Vec3F32);

define_matrix_type!(
    /// 3x3 matrix (double precision), row-major.
    Mat3F64,
    f64,
    3,
    glam::DMat3
);
impl_mat3_ops!(Mat3F64, Vec3F64);
