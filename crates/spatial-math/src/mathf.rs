// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Process-wide constants and scalar helpers shared by the vector, matrix,
//! and quaternion modules.
//!
//! All values are `f32`; none of the constants can be changed at runtime.

use std::f32::consts::TAU;

use crate::EulerOrder;

/// Degeneracy threshold used for near-zero and near-parallel checks.
///
/// This is not a precision target. It marks the point below which a length,
/// sine, or `1 - cos` is treated as zero and the caller's fallback branch
/// runs instead of a division.
pub const EPSILON: f32 = 1e-6;

/// Euler order used when callers do not name one.
pub const DEFAULT_EULER_ORDER: EulerOrder = EulerOrder::Zyx;

/// `rotation_to` treats unit vectors with a dot product below this as opposite.
pub const ANTIPARALLEL_DOT: f32 = -0.999999;

/// `rotation_to` treats unit vectors with a dot product above this as equal.
pub const PARALLEL_DOT: f32 = 0.999999;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// NaN inputs pass through unchanged.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Returns true when `a` and `b` differ by at most `EPSILON`, scaled by the
/// larger magnitude once either value exceeds 1.
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON * 1.0_f32.max(a.abs()).max(b.abs())
}

/// `acos` with its argument clamped into the function's domain.
///
/// Unit-length inputs can drift a few ULP past ±1 in float32; clamping keeps
/// those from turning into NaN.
pub(crate) fn acos_clamped(value: f32) -> f32 {
    clamp(value, -1.0, 1.0).acos()
}
