//! 3D vector (single and double precision).

macro_rules! impl_vec3_ops {
    ($name:ident, $scalar:ty) => {
        impl $name {
            /// Unit vector along the x axis.
            pub const X: Self = Self::new(1.0, 0.0, 0.0);

            /// Unit vector along the y axis.
            pub const Y: Self = Self::new(0.0, 1.0, 0.0);

            /// Unit vector along the z axis.
            pub const Z: Self = Self::new(0.0, 0.0, 1.0);

            /// Right-handed cross product `self × rhs`.
            ///
            /// The result is orthogonal to both inputs and anti-commutative:
            /// `a.cross(b) == -b.cross(a)`.
            #[inline]
            #[must_use]
            pub fn cross(self, rhs: Self) -> Self {
                Self {
                    x: self.y * rhs.z - self.z * rhs.y,
                    y: self.z * rhs.x - self.x * rhs.z,
                    z: self.x * rhs.y - self.y * rhs.x,
                }
            }

            /// Returns the vector divided by its length.
            ///
            /// The zero vector has no direction: the division by zero yields
            /// NaN components. No check is made, callers that may pass a zero
            /// vector should test the length first.
            #[inline]
            #[must_use]
            pub fn normalize(self) -> Self {
                let len = self.length();
                Self {
                    x: self.x / len,
                    y: self.y / len,
                    z: self.z / len,
                }
            }

            /// Returns a vector pointing along `self` with length `len`.
            ///
            /// The original magnitude is discarded. A negative `len` gives the
            /// antiparallel vector of magnitude `|len|`. Inherits the NaN
            /// behaviour of [`Self::normalize`] for the zero vector.
            #[inline]
            #[must_use]
            pub fn scale(self, len: $scalar) -> Self {
                self.normalize() * len
            }
        }
    };
}

define_vector_type!(
    /// 3D vector (single precision).
    Vec3F32,
    glam::Vec3,
    f32,
    [f32; 3],
    [x, y, z]
);
impl_vec3_ops!(Vec3F32, f32);

define_vector_type!(
    /// 3D vector (double precision).
    Vec3F64,
    glam::DVec3,
    f64,
    [f64; 3],
    [x, y, z]
);
impl_vec3_ops!(Vec3F64, f64);
