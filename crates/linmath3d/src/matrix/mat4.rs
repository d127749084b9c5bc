//! 4x4 matrix (single and double precision) and the transform constructors.
//!
//! All constructors produce matrices meant to be applied to column vectors
//! (`M * v`). To chain transforms, pre-multiply: `t * r * s` scales first,
//! then rotates, then translates.
//!
//! Angle units are not uniform and this is on purpose: the Euler and
//! axis-angle rotations take **degrees**, the perspective field of view
//! takes **radians**.

use crate::angle;
use crate::{Mat3F32, Mat3F64, Vec3F32, Vec3F64, Vec4F32, Vec4F64};

macro_rules! impl_mat4_ops {
    ($name:ident, $scalar:ty, $mat3:ident, $vec3:ident, $vec4:ident, $to_rad:path) => {
        impl $name {
            /// Matrix with every element set to `n`.
            ///
            /// Each element receives the floating-point value `n`; this is a
            /// per-element assignment, not a byte fill, so any `n` works.
            #[inline]
            #[must_use]
            pub const fn fill(n: $scalar) -> Self {
                Self::from_array([n; 16])
            }

            /// Identity matrix, same as [`Self::IDENTITY`].
            #[inline]
            #[must_use]
            pub const fn identity() -> Self {
                Self::IDENTITY
            }

            /// Create a matrix from its four rows.
            #[inline]
            #[must_use]
            pub const fn from_rows(r0: $vec4, r1: $vec4, r2: $vec4, r3: $vec4) -> Self {
                Self::from_array([
                    r0.x, r0.y, r0.z, r0.w, //
                    r1.x, r1.y, r1.z, r1.w, //
                    r2.x, r2.y, r2.z, r2.w, //
                    r3.x, r3.y, r3.z, r3.w,
                ])
            }

            /// Embed a 3x3 linear map in the upper-left block of an identity
            /// matrix. Translation is zero and the bottom row is `(0, 0, 0, 1)`.
            #[inline]
            #[must_use]
            pub const fn from_mat3(m: $mat3) -> Self {
                let e = m.e;
                Self::from_array([
                    e[0], e[1], e[2], 0.0, //
                    e[3], e[4], e[5], 0.0, //
                    e[6], e[7], e[8], 0.0, //
                    0.0, 0.0, 0.0, 1.0,
                ])
            }

            /// The upper-left 3x3 block (the linear part of an affine transform).
            #[inline]
            #[must_use]
            pub const fn upper_left3(self) -> $mat3 {
                let e = self.e;
                $mat3::from_array([e[0], e[1], e[2], e[4], e[5], e[6], e[8], e[9], e[10]])
            }

            /// Matrix-vector product `self * v`, with `v` as a column vector.
            #[inline]
            #[must_use]
            pub fn mul_vec4(self, v: $vec4) -> $vec4 {
                let e = &self.e;
                $vec4::new(
                    e[0] * v.x + e[1] * v.y + e[2] * v.z + e[3] * v.w,
                    e[4] * v.x + e[5] * v.y + e[6] * v.z + e[7] * v.w,
                    e[8] * v.x + e[9] * v.y + e[10] * v.z + e[11] * v.w,
                    e[12] * v.x + e[13] * v.y + e[14] * v.z + e[15] * v.w,
                )
            }

            /// Transform a point (`w = 1`). No perspective divide is applied.
            #[inline]
            #[must_use]
            pub fn transform_point3(self, p: $vec3) -> $vec3 {
                self.mul_vec4($vec4::from_point(p)).truncate()
            }

            /// Transform a direction (`w = 0`), ignoring translation.
            #[inline]
            #[must_use]
            pub fn transform_vector3(self, d: $vec3) -> $vec3 {
                self.mul_vec4($vec4::from_direction(d)).truncate()
            }

            /// Scaling transform: `diag(x, y, z, 1)`.
            #[must_use]
            pub const fn from_scale(x: $scalar, y: $scalar, z: $scalar) -> Self {
                let mut out = Self::fill(0.0);
                out.e[0] = x;
                out.e[5] = y;
                out.e[10] = z;
                out.e[15] = 1.0;
                out
            }

            /// Translation transform: identity with `(x, y, z)` in the last column.
            #[must_use]
            pub const fn from_translation(x: $scalar, y: $scalar, z: $scalar) -> Self {
                let mut out = Self::IDENTITY;
                out.e[3] = x;
                out.e[7] = y;
                out.e[11] = z;
                out
            }

            /// Rotation from Euler angles in **degrees**.
            ///
            /// The result equals `Rx(x) * Ry(y) * Rz(z)`: applied to a column
            /// vector it rotates about z first, then y, then x.
            #[must_use]
            pub fn from_euler_degrees(x: $scalar, y: $scalar, z: $scalar) -> Self {
                let (sx, cx) = $to_rad(x).sin_cos();
                let (sy, cy) = $to_rad(y).sin_cos();
                let (sz, cz) = $to_rad(z).sin_cos();

                Self::from_array([
                    cy * cz,
                    -cy * sz,
                    sy,
                    0.0,
                    sx * sy * cz + cx * sz,
                    -sx * sy * sz + cx * cz,
                    -sx * cy,
                    0.0,
                    -cx * sy * cz + sx * sz,
                    cx * sy * sz + sx * cz,
                    cx * cy,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                ])
            }

            /// Same as [`Self::from_euler_degrees`] with the angles packed in a
            /// vector.
            #[inline]
            #[must_use]
            pub fn from_euler_degrees_vec3(angles: $vec3) -> Self {
                Self::from_euler_degrees(angles.x, angles.y, angles.z)
            }

            /// Right-handed rotation of `angle` **degrees** about `axis`
            /// (Rodrigues' formula).
            ///
            /// The axis is normalized here, so any non-zero length works. A zero
            /// axis yields a NaN matrix.
            #[must_use]
            pub fn from_axis_angle_degrees(axis: $vec3, angle: $scalar) -> Self {
                let v = axis.normalize();
                let (s, c) = $to_rad(angle).sin_cos();
                let t = 1.0 - c;

                Self::from_array([
                    c + v.x * v.x * t,
                    -v.z * s + v.x * v.y * t,
                    v.y * s + v.x * v.z * t,
                    0.0,
                    v.z * s + v.y * v.x * t,
                    c + v.y * v.y * t,
                    -v.x * s + v.y * v.z * t,
                    0.0,
                    -v.y * s + v.z * v.x * t,
                    v.x * s + v.z * v.y * t,
                    c + v.z * v.z * t,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                ])
            }

            /// Symmetric perspective projection.
            ///
            /// `fov_y` is the vertical field of view in **radians**. Maps view
            /// space (camera looking down `-z`) to clip space with depth in
            /// `[-1, 1]` after the divide. Requires `near > 0` and
            /// `near != far`; other values give a degenerate or non-finite
            /// matrix.
            #[must_use]
            pub fn perspective(fov_y: $scalar, aspect: $scalar, near: $scalar, far: $scalar) -> Self {
                let ct = 1.0 / (fov_y / 2.0).tan();

                let mut out = Self::fill(0.0);
                out.e[0] = ct / aspect;
                out.e[5] = ct;
                out.e[10] = (far + near) / (near - far);
                out.e[11] = (2.0 * far * near) / (near - far);
                out.e[14] = -1.0;
                out
            }

            /// View transform for a camera at `eye` looking at `center`.
            ///
            /// The rows of the rotation block are side, up and negated front,
            /// so the camera looks down `-z` in view space. If the view
            /// direction is parallel to `up` (or `eye == center`) the result is
            /// NaN.
            #[must_use]
            pub fn look_at(eye: $vec3, center: $vec3, up: $vec3) -> Self {
                let f = (center - eye).normalize();
                let s = f.cross(up).normalize();
                let u = s.cross(f);

                Self::from_array([
                    s.x,
                    s.y,
                    s.z,
                    -s.dot(eye),
                    u.x,
                    u.y,
                    u.z,
                    -u.dot(eye),
                    -f.x,
                    -f.y,
                    -f.z,
                    f.dot(eye),
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                ])
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec4> for $name {
            type Output = $vec4;

            #[inline]
            fn mul(self, rhs: $vec4) -> Self::Output {
                self.mul_vec4(rhs)
            }
        }
    };
}

define_matrix_type!(
    /// 4x4 matrix (single precision), row-major.
    Mat4F32,
    f32,
    4,
    glam::Mat4
);
impl_mat4_ops!(Mat4F32, f32, Mat3F32, Vec3F32, Vec4F32, angle::deg_to_rad_f32);

define_matrix_type!(
    /// 4x4 matrix (double precision), row-major.
    Mat4F64,
    f64,
    4,
    glam::DMat4
);
impl_mat4_ops!(Mat4F64, f64, Mat3F64, Vec3F64, Vec4F64, angle::deg_to_rad_f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_mat4_eq(a: &Mat4F64, b: &Mat4F64, epsilon: f64) {
        for i in 0..16 {
            assert_relative_eq!(a.e[i], b.e[i], epsilon = epsilon);
        }
    }

    #[test]
    fn test_mat4f32_mul_vec4() {
        let m = Mat4F32::IDENTITY;
        let v = Vec4F32::new(1.0, 2.0, 3.0, 4.0);
        let result = m * v;
        assert_eq!(result, v);
    }

    #[test]
    fn test_fill() {
        let m = Mat4F32::fill(2.5);
        assert!(m.e.iter().all(|&x| x == 2.5));
        assert_eq!(Mat4F32::fill(0.0), Mat4F32::ZERO);
    }

    #[test]
    fn test_identity() {
        let m = Mat4F64::identity();
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(m.get(r, c), if r == c { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_from_scale() {
        let m = Mat4F32::from_scale(2.0, 3.0, 4.0);
        let p = m * Vec4F32::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(p, Vec4F32::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn test_from_translation() {
        let m = Mat4F32::from_translation(1.0, 2.0, 3.0);
        assert_eq!((m.e[3], m.e[7], m.e[11]), (1.0, 2.0, 3.0));
        let p = m * Vec4F32::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p, Vec4F32::new(1.0, 2.0, 3.0, 1.0));
        // directions are not translated
        let d = m.transform_vector3(Vec3F32::X);
        assert_eq!(d, Vec3F32::X);
    }

    #[test]
    fn test_axis_angle_x_90() {
        let m = Mat4F64::from_axis_angle_degrees(Vec3F64::X, 90.0);
        let v = m.upper_left3() * Vec3F64::Y;
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_axis_angle_zero_is_identity() {
        let axis = Vec3F64::new(1.0, -2.0, 0.5).normalize();
        let m = Mat4F64::from_axis_angle_degrees(axis, 0.0);
        assert_mat4_eq(&m, &Mat4F64::IDENTITY, 1e-12);
    }

    #[test]
    fn test_axis_angle_unnormalized_axis() {
        let a = Mat4F64::from_axis_angle_degrees(Vec3F64::new(0.0, 0.0, 7.0), 30.0);
        let b = Mat4F64::from_axis_angle_degrees(Vec3F64::Z, 30.0);
        assert_mat4_eq(&a, &b, 1e-12);
    }

    #[test]
    fn test_axis_angle_zero_axis_is_nan() {
        let m = Mat4F32::from_axis_angle_degrees(Vec3F32::ZERO, 45.0);
        assert!(m.e[0].is_nan());
        assert_eq!(m.e[15], 1.0);
    }

    #[test]
    fn test_euler_matches_composition() {
        let (x, y, z) = (30.0, -45.0, 60.0);
        let expected = Mat4F64::from_axis_angle_degrees(Vec3F64::X, x)
            * Mat4F64::from_axis_angle_degrees(Vec3F64::Y, y)
            * Mat4F64::from_axis_angle_degrees(Vec3F64::Z, z);
        let m = Mat4F64::from_euler_degrees(x, y, z);
        assert_mat4_eq(&m, &expected, 1e-12);
        assert_eq!(m, Mat4F64::from_euler_degrees_vec3(Vec3F64::new(x, y, z)));
    }

    #[test]
    fn test_euler_single_axis() {
        let m = Mat4F64::from_euler_degrees(0.0, 0.0, 90.0);
        let v = m.transform_point3(Vec3F64::X);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perspective() {
        let m = Mat4F32::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        assert_eq!(m.e[0], m.e[5]);
        assert_relative_eq!(m.e[5], 1.0, epsilon = 1e-6);
        assert_eq!(m.e[14], -1.0);
        assert!(m.e[11].is_finite() && m.e[11] < 0.0);
        assert_relative_eq!(m.e[10], -101.0 / 99.0, epsilon = 1e-6);
        assert_relative_eq!(m.e[11], -200.0 / 99.0, epsilon = 1e-6);
        assert_eq!(m.e[15], 0.0);
    }

    #[test]
    fn test_perspective_depth_range() {
        let (near, far) = (0.5, 50.0);
        let m = Mat4F64::perspective(1.0, 16.0 / 9.0, near, far);
        let n = m * Vec4F64::new(0.0, 0.0, -near, 1.0);
        let f = m * Vec4F64::new(0.0, 0.0, -far, 1.0);
        assert_relative_eq!(n.z / n.w, -1.0, epsilon = 1e-12);
        assert_relative_eq!(f.z / f.w, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perspective_equal_planes_not_finite() {
        let m = Mat4F32::perspective(1.0, 1.0, 2.0, 2.0);
        assert!(!m.e[10].is_finite());
    }

    #[test]
    fn test_look_at() {
        let eye = Vec3F64::new(0.0, 0.0, 5.0);
        let m = Mat4F64::look_at(eye, Vec3F64::ZERO, Vec3F64::Y);
        let expected = Mat4F64::from_array([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, -5.0, //
            0.0, 0.0, 0.0, 1.0,
        ]);
        assert_mat4_eq(&m, &expected, 1e-12);
        // the eye lands on the view-space origin
        let p = m.transform_point3(eye);
        assert_relative_eq!(p.length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_look_at_parallel_up_is_nan() {
        let m = Mat4F32::look_at(Vec3F32::ZERO, Vec3F32::Y, Vec3F32::Y);
        assert!(m.e[0].is_nan());
    }

    #[test]
    fn test_from_mat3_roundtrip() {
        let m = Mat4F32::from_axis_angle_degrees(Vec3F32::new(1.0, 1.0, 0.0), 33.0);
        assert_eq!(Mat4F32::from_mat3(m.upper_left3()), m);
    }

    #[test]
    fn test_from_rows() {
        let m = Mat4F32::from_rows(
            Vec4F32::new(1.0, 0.0, 0.0, 1.0),
            Vec4F32::new(0.0, 1.0, 0.0, 2.0),
            Vec4F32::new(0.0, 0.0, 1.0, 3.0),
            Vec4F32::new(0.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(m, Mat4F32::from_translation(1.0, 2.0, 3.0));
    }
}
