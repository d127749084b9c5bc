//! Macro to define a vector type.
//!
//! Both precisions share one template so the component-wise arithmetic is
//! written once. The arithmetic is spelled out per component instead of
//! delegating to `glam`, which is only used at the conversion boundary:
//! `glam` normalizes as `v * (1 / len)`, which rounds twice, while
//! `normalize` here computes `v / len` with a single rounding per component.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `glam_type` - The matching glam type, used for conversions only.
//! * `scalar` - The scalar type.
//! * `array` - The array type.
//! * `fields` - The fields of the vector.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $glam_type:ty, $scalar:ty, $array:ty, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            $(
                #[doc = concat!("The `", stringify!($field), "` component.")]
                pub $field: $scalar
            ),+
        }

        impl $name {
            /// Create a new vector from its components.
            #[inline]
            #[must_use]
            pub const fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector from an array.
            #[inline]
            #[must_use]
            pub const fn from_array(arr: $array) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            #[must_use]
            pub const fn to_array(self) -> $array {
                [$(self.$field),+]
            }

            /// Zero vector.
            pub const ZERO: Self = Self {
                $($field: 0.0 as $scalar),+
            };

            /// Dot product between two vectors.
            #[inline]
            #[must_use]
            pub fn dot(self, rhs: Self) -> $scalar {
                0.0 $(+ self.$field * rhs.$field)+
            }

            /// Euclidean length (magnitude) of the vector.
            ///
            /// Returns `0.0` for the zero vector.
            #[inline]
            #[must_use]
            pub fn length(self) -> $scalar {
                self.dot(self).sqrt()
            }

            /// Returns `true` if every component is finite.
            #[inline]
            #[must_use]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }
        }

        // Conversions to and from the glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        // Conversions to and from arrays.
        impl From<$array> for $name {
            #[inline]
            fn from(arr: $array) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for $array {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        // Component-wise arithmetic.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Mul<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name> for $scalar {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::Div<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $scalar) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}
