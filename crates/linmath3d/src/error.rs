/// An error type for the fallible edges of the kernel.
///
/// The numeric operations themselves never fail; these variants are produced
/// by slice conversions and by the opt-in checks in [`crate::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Math3dError {
    /// Error when a slice does not hold exactly one matrix worth of elements.
    #[error("Invalid length: expected {expected} elements, got {actual}")]
    InvalidLength {
        /// The number of elements the matrix needs.
        expected: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// Error when a vector that must define a direction has zero length.
    #[error("Vector has zero length")]
    ZeroLengthVector,

    /// Error when a vector has non-finite components or its length overflows.
    #[error("Vector has non-finite components or length")]
    NonFiniteVector,

    /// Error when the clip planes cannot produce a valid projection.
    #[error("Invalid clip planes: near ({near}) must be positive and differ from far ({far})")]
    InvalidClipPlanes {
        /// The near plane distance.
        near: f64,
        /// The far plane distance.
        far: f64,
    },

    /// Error when the aspect ratio is zero or not finite.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f64),

    /// Error when the vertical field of view is outside `(0, pi)` radians.
    #[error("Invalid field of view: {0} rad (expected radians in (0, pi))")]
    InvalidFieldOfView(f64),

    /// Error when the eye and the target of a view transform coincide.
    #[error("Eye and center coincide")]
    CoincidentEyeCenter,

    /// Error when the up vector is parallel to the view direction.
    #[error("Up vector is parallel to the view direction")]
    ParallelUpVector,
}
