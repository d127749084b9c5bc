//! Macro to define a square matrix type.
//!
//! We provide a small `macro_rules!` helper so both precisions and both
//! sizes share the storage, product and conversion code.
//!
//! The generated types store their elements in a flat **row-major** array:
//! element (row `r`, column `c`) lives at index `r * dim + c`. `glam` and
//! OpenGL expect column-major data, so every conversion towards them goes
//! through a transpose. The mathematical matrix is always preserved.
//!
//! # Arguments
//!
//! * `name`        - The name of the matrix type.
//! * `scalar`      - The scalar type.
//! * `dim`         - The number of rows (and columns).
//! * `glam_type`   - The `glam` matrix type of the same size and precision.
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $scalar:ty,
        $dim:literal,
        $glam_type:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            /// Elements in row-major order.
            pub e: [$scalar; $dim * $dim],
        }

        impl $name {
            /// Number of rows and columns.
            pub const DIM: usize = $dim;

            /// Matrix with every element set to zero.
            pub const ZERO: Self = Self {
                e: [0.0; $dim * $dim],
            };

            /// Identity matrix.
            pub const IDENTITY: Self = {
                let mut e = [0.0; $dim * $dim];
                let mut i = 0;
                while i < $dim {
                    e[i * $dim + i] = 1.0;
                    i += 1;
                }
                Self { e }
            };

            /// Create a matrix from a row-major array.
            #[inline]
            #[must_use]
            pub const fn from_array(e: [$scalar; $dim * $dim]) -> Self {
                Self { e }
            }

            /// Row-major array of the elements.
            #[inline]
            #[must_use]
            pub const fn to_array(self) -> [$scalar; $dim * $dim] {
                self.e
            }

            /// Column-major array of the elements, as expected by `glam` or
            /// by OpenGL uploads without the transpose flag.
            #[inline]
            #[must_use]
            pub fn to_cols_array(self) -> [$scalar; $dim * $dim] {
                self.transpose().e
            }

            /// Element at `row`, `col`.
            ///
            /// # Panics
            ///
            /// Panics if `row` or `col` is not smaller than the dimension.
            #[inline]
            #[must_use]
            pub fn get(&self, row: usize, col: usize) -> $scalar {
                assert!(row < $dim && col < $dim, "index out of bounds");
                self.e[row * $dim + col]
            }

            /// Transpose the matrix.
            #[inline]
            #[must_use]
            pub fn transpose(self) -> Self {
                let mut out = Self::ZERO;
                for r in 0..$dim {
                    for c in 0..$dim {
                        out.e[c * $dim + r] = self.e[r * $dim + c];
                    }
                }
                out
            }

            /// Matrix product `self * rhs`.
            ///
            /// `out(r, c) = sum_k self(r, k) * rhs(k, c)`. Applying the result to
            /// a column vector applies `rhs` first, then `self`.
            #[inline]
            #[must_use]
            pub fn mul_mat(self, rhs: Self) -> Self {
                let mut out = Self::ZERO;
                for r in 0..$dim {
                    for c in 0..$dim {
                        let mut acc = 0.0;
                        for k in 0..$dim {
                            acc += self.e[r * $dim + k] * rhs.e[k * $dim + c];
                        }
                        out.e[r * $dim + c] = acc;
                    }
                }
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        // Conversions to and from row-major arrays.
        impl From<[$scalar; $dim * $dim]> for $name {
            #[inline]
            fn from(e: [$scalar; $dim * $dim]) -> Self {
                Self::from_array(e)
            }
        }

        impl From<$name> for [$scalar; $dim * $dim] {
            #[inline]
            fn from(m: $name) -> Self {
                m.e
            }
        }

        impl TryFrom<&[$scalar]> for $name {
            type Error = $crate::Math3dError;

            fn try_from(slice: &[$scalar]) -> Result<Self, Self::Error> {
                let e = <[$scalar; $dim * $dim]>::try_from(slice).map_err(|_| {
                    $crate::Math3dError::InvalidLength {
                        expected: $dim * $dim,
                        actual: slice.len(),
                    }
                })?;
                Ok(Self { e })
            }
        }

        // Conversions to and from the column-major glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self::from_array(m.transpose().to_cols_array())
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                <$glam_type>::from_cols_array(&m.to_cols_array())
            }
        }

        // Matrix-matrix multiplication.
        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                self.mul_mat(rhs)
            }
        }
    };
}
