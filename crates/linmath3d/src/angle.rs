//! Angle constants and unit conversions.

/// Archimedes' constant (single precision).
pub const PI_F32: f32 = std::f32::consts::PI;

/// Archimedes' constant (double precision).
pub const PI_F64: f64 = std::f64::consts::PI;

/// Convert degrees to radians (single precision).
#[inline]
#[must_use]
pub fn deg_to_rad_f32(deg: f32) -> f32 {
    deg * (PI_F32 / 180.0)
}

/// Convert radians to degrees (single precision).
#[inline]
#[must_use]
pub fn rad_to_deg_f32(rad: f32) -> f32 {
    rad * (180.0 / PI_F32)
}

/// Convert degrees to radians (double precision).
#[inline]
#[must_use]
pub fn deg_to_rad_f64(deg: f64) -> f64 {
    deg * (PI_F64 / 180.0)
}

/// Convert radians to degrees (double precision).
#[inline]
#[must_use]
pub fn rad_to_deg_f64(rad: f64) -> f64 {
    rad * (180.0 / PI_F64)
}
