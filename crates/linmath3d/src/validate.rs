//! Opt-in checks for inputs that make the kernel produce NaN or infinite
//! matrices.
//!
//! The kernel operations never call into this module. Callers that take
//! camera parameters or rotation axes from untrusted sources can run these
//! checks once, outside the hot path, before building their matrices.
//!
//! Checks operate on the configured precision ([`Real`], [`Vec3`]).

use crate::{Math3dError, Real, Vec3};

/// Checks that `v` can be normalized: its length is finite and non-zero.
///
/// Guards [`Vec3::normalize`], [`Vec3::scale`] and the axis of
/// [`crate::Mat4::from_axis_angle_degrees`].
pub fn check_direction(v: Vec3) -> Result<(), Math3dError> {
    let len = v.length();
    if !len.is_finite() {
        log::debug!("rejecting direction {v:?}: length {len}");
        return Err(Math3dError::NonFiniteVector);
    }
    if len == 0.0 {
        log::debug!("rejecting direction {v:?}: zero length");
        return Err(Math3dError::ZeroLengthVector);
    }
    Ok(())
}

/// Checks the arguments of [`crate::Mat4::perspective`].
///
/// `fov_y` is in radians and must lie in `(0, pi)`, `aspect` must be finite
/// and non-zero, `near` must be finite, positive and different from `far`.
/// The non-zero matrix terms are then evaluated in the configured precision
/// and must all be finite.
pub fn check_perspective(
    fov_y: Real,
    aspect: Real,
    near: Real,
    far: Real,
) -> Result<(), Math3dError> {
    let fov = f64::from(fov_y);
    if fov.is_nan() || fov <= 0.0 || fov >= std::f64::consts::PI {
        log::debug!("rejecting perspective: fov_y {fov} rad");
        return Err(Math3dError::InvalidFieldOfView(fov));
    }

    let ratio = f64::from(aspect);
    if ratio == 0.0 || !ratio.is_finite() {
        log::debug!("rejecting perspective: aspect {ratio}");
        return Err(Math3dError::InvalidAspectRatio(ratio));
    }

    let clip = Math3dError::InvalidClipPlanes {
        near: f64::from(near),
        far: f64::from(far),
    };
    if !near.is_finite() || near <= 0.0 || near == far || !far.is_finite() {
        log::debug!("rejecting perspective: near {near}, far {far}");
        return Err(clip);
    }

    let ct = 1.0 / (fov_y / 2.0).tan();
    if !ct.is_finite() {
        log::debug!("rejecting perspective: fov_y {fov} rad overflows the focal term");
        return Err(Math3dError::InvalidFieldOfView(fov));
    }
    if !(ct / aspect).is_finite() {
        log::debug!("rejecting perspective: aspect {ratio} overflows the x scale");
        return Err(Math3dError::InvalidAspectRatio(ratio));
    }

    let depth_scale = (far + near) / (near - far);
    let depth_offset = (2.0 * far * near) / (near - far);
    if !depth_scale.is_finite() || !depth_offset.is_finite() {
        log::debug!("rejecting perspective: near {near}, far {far} overflow the depth terms");
        return Err(clip);
    }

    Ok(())
}

/// Checks the arguments of [`crate::Mat4::look_at`].
///
/// `eye`, `center` and their difference must be finite, `eye` and `center`
/// must differ, `up` must be a valid direction that is not parallel to
/// `center - eye`.
pub fn check_look_at(eye: Vec3, center: Vec3, up: Vec3) -> Result<(), Math3dError> {
    let front = center - eye;
    match check_direction(front) {
        Err(Math3dError::ZeroLengthVector) => {
            log::debug!("rejecting look_at: eye {eye:?} coincides with center {center:?}");
            return Err(Math3dError::CoincidentEyeCenter);
        }
        Err(err) => {
            log::debug!("rejecting look_at: eye {eye:?}, center {center:?}");
            return Err(err);
        }
        Ok(()) => {}
    }
    check_direction(up)?;

    let side = front.normalize().cross(up.normalize());
    if side.length() <= Real::EPSILON {
        log::debug!("rejecting look_at: up {up:?} parallel to front {front:?}");
        return Err(Math3dError::ParallelUpVector);
    }

    Ok(())
}
