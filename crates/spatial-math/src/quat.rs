// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::mathf::{self, acos_clamped, ANTIPARALLEL_DOT, EPSILON, PARALLEL_DOT};
use crate::{EulerOrder, Mat3, MathError, Vec3};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * Angles are radians unless a method says otherwise ([`Quat::from_euler`]
///   takes degrees).
/// * Unit length is not enforced. `multiply`, `add`, `subtract`, `divide`,
///   and `scale` can all leave the quaternion non-unit; call
///   [`Quat::normalize`] when a rotation is required downstream.
/// * Methods taking `&mut self` mutate in place and return the receiver for
///   chaining. [`Quat::slerp`], [`Quat::sqlerp`], [`Quat::lerp`], and
///   [`Quat::calculate_w`] return a new value and leave their inputs alone.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Quat {
    data: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<Quat>() == 16);

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    ///
    /// Components are taken verbatim; use [`Quat::set_axis_angle`] for
    /// axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar (W) component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Borrows the raw component buffer.
    pub fn as_array(&self) -> &[f32; 4] {
        &self.data
    }

    /// Mutably borrows the raw component buffer.
    pub fn as_mut_array(&mut self) -> &mut [f32; 4] {
        &mut self.data
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.data = [x, y, z, w];
        self
    }

    /// Copies the components of `other` into `self`.
    pub fn copy(&mut self, other: &Self) -> &mut Self {
        self.data = other.data;
        self
    }

    /// Resets to the identity rotation.
    pub fn set_identity(&mut self) -> &mut Self {
        self.data = Self::IDENTITY.data;
        self
    }

    /// Sets the rotation of `rad` radians about `axis`.
    ///
    /// `axis` must already be unit length. It is not normalised here; a
    /// scaled axis yields a quaternion whose vector part is scaled too.
    pub fn set_axis_angle(&mut self, axis: &Vec3, rad: f32) -> &mut Self {
        let (s, c) = (rad * 0.5).sin_cos();
        self.data = [s * axis.x(), s * axis.y(), s * axis.z(), c];
        self
    }

    /// Writes the rotation axis into `out_axis` and returns the angle in
    /// radians, within `[0, 2π]`.
    ///
    /// A null rotation has no meaningful axis: when `sin(angle / 2)` is at or
    /// below [`EPSILON`] the axis is reported as `(1, 0, 0)`.
    ///
    /// # Examples
    /// ```
    /// use spatial_math::{Quat, Vec3};
    /// let mut q = Quat::IDENTITY;
    /// q.set_axis_angle(&Vec3::UNIT_Y, 1.25);
    ///
    /// let mut axis = Vec3::ZERO;
    /// let angle = q.get_axis_angle(&mut axis);
    /// assert!((angle - 1.25).abs() < 1e-5);
    /// assert!(axis.approx_eq(&Vec3::UNIT_Y));
    /// ```
    pub fn get_axis_angle(&self, out_axis: &mut Vec3) -> f32 {
        let rad = acos_clamped(self.w()) * 2.0;
        let s = (rad * 0.5).sin();
        if s > EPSILON {
            out_axis.set(self.x() / s, self.y() / s, self.z() / s);
        } else {
            trace!(rad, "null rotation; reporting +X as the axis");
            out_axis.copy(&Vec3::UNIT_X);
        }
        rad
    }

    /// Owned form of [`Quat::get_axis_angle`].
    pub fn to_axis_angle(&self) -> (Vec3, f32) {
        let mut axis = Vec3::ZERO;
        let angle = self.get_axis_angle(&mut axis);
        (axis, angle)
    }

    /// Angular distance in radians between two unit quaternions.
    ///
    /// Both operands must be unit length; other inputs give meaningless
    /// results.
    pub fn get_angle(&self, other: &Self) -> f32 {
        let d = self.dot(other);
        acos_clamped(2.0 * d * d - 1.0)
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data)
            .map(|(&a, b)| a * b)
            .sum()
    }

    /// Replaces `self` with the Hamilton product `self * other`.
    ///
    /// Applied to a vector, the result rotates by `other` first and then by
    /// `self`. Quaternion multiplication is non-commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use spatial_math::{Quat, Vec3};
    /// let mut yaw = Quat::IDENTITY;
    /// yaw.set_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    /// let mut pitch = Quat::IDENTITY;
    /// pitch.set_axis_angle(&Vec3::UNIT_X, FRAC_PI_2);
    ///
    /// let mut a = yaw;
    /// a.multiply(&pitch);
    /// let mut b = pitch;
    /// b.multiply(&yaw);
    /// assert!(!a.approx_eq(&b));
    /// ```
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        self.data = [
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        ];
        self
    }

    /// Composes with a rotation of `rad` radians about the X axis
    /// (`self * rx(rad)`).
    pub fn rotate_x(&mut self, rad: f32) -> &mut Self {
        let [ax, ay, az, aw] = self.data;
        let (bx, bw) = (rad * 0.5).sin_cos();

        self.data = [
            ax * bw + aw * bx,
            ay * bw + az * bx,
            az * bw - ay * bx,
            aw * bw - ax * bx,
        ];
        self
    }

    /// Composes with a rotation of `rad` radians about the Y axis
    /// (`self * ry(rad)`).
    pub fn rotate_y(&mut self, rad: f32) -> &mut Self {
        let [ax, ay, az, aw] = self.data;
        let (by, bw) = (rad * 0.5).sin_cos();

        self.data = [
            ax * bw - az * by,
            ay * bw + aw * by,
            az * bw + ax * by,
            aw * bw - ay * by,
        ];
        self
    }

    /// Composes with a rotation of `rad` radians about the Z axis
    /// (`self * rz(rad)`).
    pub fn rotate_z(&mut self, rad: f32) -> &mut Self {
        let [ax, ay, az, aw] = self.data;
        let (bz, bw) = (rad * 0.5).sin_cos();

        self.data = [
            ax * bw + ay * bz,
            ay * bw - ax * bz,
            az * bw + aw * bz,
            aw * bw - az * bz,
        ];
        self
    }

    /// Returns a copy whose W is rebuilt from X, Y, Z assuming unit length.
    ///
    /// The radicand goes through `abs` so float drift that pushes
    /// `1 - x² - y² - z²` slightly negative still yields a finite W.
    pub fn calculate_w(&self) -> Self {
        let [x, y, z, _] = self.data;
        Self::new(x, y, z, (1.0 - x * x - y * y - z * z).abs().sqrt())
    }

    /// Adds `other` component-wise.
    pub fn add(&mut self, other: &Self) -> &mut Self {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a += b;
        }
        self
    }

    /// Subtracts `other` component-wise.
    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a -= b;
        }
        self
    }

    /// Divides by `other` component-wise. Zero divisors follow IEEE-754.
    pub fn divide(&mut self, other: &Self) -> &mut Self {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a /= b;
        }
        self
    }

    /// Scales every component by `scalar`.
    pub fn scale(&mut self, scalar: f32) -> &mut Self {
        for a in &mut self.data {
            *a *= scalar;
        }
        self
    }

    /// Spherical linear interpolation toward `other`; returns a new value.
    ///
    /// The path always takes the shorter arc: when the operands' dot product
    /// is negative, `other` is negated first. When they are within
    /// [`EPSILON`] of parallel the sine of the angle is too small to divide
    /// by, and the components are blended linearly instead.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut end = *other;
        let mut cosom = self.dot(other);
        if cosom < 0.0 {
            cosom = -cosom;
            end.scale(-1.0);
        }

        let (scale0, scale1) = if 1.0 - cosom > EPSILON {
            let omega = cosom.acos();
            let sinom = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sinom,
                (t * omega).sin() / sinom,
            )
        } else {
            trace!(cosom, "near-parallel slerp; blending linearly");
            (1.0 - t, t)
        };

        let mut out = *self;
        for (a, b) in out.data.iter_mut().zip(end.data) {
            *a = scale0 * *a + scale1 * b;
        }
        out
    }

    /// Component-wise linear interpolation toward `other`; returns a new,
    /// un-normalised value.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut out = *self;
        for (a, b) in out.data.iter_mut().zip(other.data) {
            *a += t * (b - *a);
        }
        out
    }

    /// Cubic spherical interpolation through `self`, `b`, `c`, `d`; returns a
    /// new value.
    ///
    /// Computed as `slerp(slerp(self, d, t), slerp(b, c, t), 2t(1 - t))`.
    pub fn sqlerp(&self, b: &Self, c: &Self, d: &Self, t: f32) -> Self {
        let outer = self.slerp(d, t);
        let inner = b.slerp(c, t);
        outer.slerp(&inner, 2.0 * t * (1.0 - t))
    }

    /// Replaces `self` with its inverse, `conjugate / squared_length`.
    ///
    /// The zero quaternion has no inverse and becomes zero.
    pub fn invert(&mut self) -> &mut Self {
        let dot = self.squared_length();
        let inv_dot = if dot == 0.0 {
            trace!("inverting zero quaternion; result is zero");
            0.0
        } else {
            1.0 / dot
        };
        let [x, y, z, w] = self.data;
        self.data = [-x * inv_dot, -y * inv_dot, -z * inv_dot, w * inv_dot];
        self
    }

    /// Negates the vector part. For unit quaternions this is the inverse.
    pub fn conjugate(&mut self) -> &mut Self {
        let [x, y, z, w] = self.data;
        self.data = [-x, -y, -z, w];
        self
    }

    /// Sets `self` from a rotation matrix laid out as [`Mat3::from_quat`]
    /// writes it.
    ///
    /// Uses Shoemake's method: branch on the trace and, when it is not
    /// positive, on the largest diagonal element, so the divisor is never
    /// close to zero. The result is **not** normalised, and the matrix is not
    /// checked for orthonormality.
    pub fn from_mat3(&mut self, m: &Mat3) -> &mut Self {
        let m = m.as_array();
        let trace = m[0] + m[4] + m[8];

        if trace > 0.0 {
            // |w| > 1/2
            let root = (trace + 1.0).sqrt();
            let w = 0.5 * root;
            let inv = 0.5 / root;
            self.data = [
                (m[5] - m[7]) * inv,
                (m[6] - m[2]) * inv,
                (m[1] - m[3]) * inv,
                w,
            ];
        } else {
            // |w| <= 1/2; pivot on the largest diagonal term.
            let mut i = 0;
            if m[4] > m[0] {
                i = 1;
            }
            if m[8] > m[i * 3 + i] {
                i = 2;
            }
            let j = (i + 1) % 3;
            let k = (i + 2) % 3;

            let root = (m[i * 3 + i] - m[j * 3 + j] - m[k * 3 + k] + 1.0).sqrt();
            self.data[i] = 0.5 * root;
            let inv = 0.5 / root;
            self.data[3] = (m[j * 3 + k] - m[k * 3 + j]) * inv;
            self.data[j] = (m[j * 3 + i] + m[i * 3 + j]) * inv;
            self.data[k] = (m[k * 3 + i] + m[i * 3 + k]) * inv;
        }
        self
    }

    /// Sets `self` from Euler angles in **degrees** and an order name such as
    /// `"xyz"`.
    ///
    /// Fails with [`MathError::UnknownEulerOrder`] when `order` is not one of
    /// the six axis permutations; the receiver is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use spatial_math::{MathError, Quat};
    /// let mut q = Quat::IDENTITY;
    /// q.from_euler(90.0, 0.0, 0.0, "xyz")?;
    /// assert!((q.x() - core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    ///
    /// assert!(q.from_euler(0.0, 0.0, 0.0, "abc").is_err());
    /// # Ok::<(), MathError>(())
    /// ```
    pub fn from_euler(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        order: &str,
    ) -> Result<&mut Self, MathError> {
        let order: EulerOrder = order.parse()?;
        Ok(self.from_euler_order(x, y, z, order))
    }

    /// Typed form of [`Quat::from_euler`]; angles in degrees.
    ///
    /// Order `Xyz` yields `qx * qy * qz`, and likewise for the other five.
    pub fn from_euler_order(&mut self, x: f32, y: f32, z: f32, order: EulerOrder) -> &mut Self {
        let half_to_rad = core::f32::consts::PI / 360.0;
        let (sx, cx) = (x * half_to_rad).sin_cos();
        let (sy, cy) = (y * half_to_rad).sin_cos();
        let (sz, cz) = (z * half_to_rad).sin_cos();

        self.data = match order {
            EulerOrder::Xyz => [
                sx * cy * cz + cx * sy * sz,
                cx * sy * cz - sx * cy * sz,
                cx * cy * sz + sx * sy * cz,
                cx * cy * cz - sx * sy * sz,
            ],
            EulerOrder::Xzy => [
                sx * cy * cz - cx * sy * sz,
                cx * sy * cz - sx * cy * sz,
                cx * cy * sz + sx * sy * cz,
                cx * cy * cz + sx * sy * sz,
            ],
            EulerOrder::Yxz => [
                sx * cy * cz + cx * sy * sz,
                cx * sy * cz - sx * cy * sz,
                cx * cy * sz - sx * sy * cz,
                cx * cy * cz + sx * sy * sz,
            ],
            EulerOrder::Yzx => [
                sx * cy * cz + cx * sy * sz,
                cx * sy * cz + sx * cy * sz,
                cx * cy * sz - sx * sy * cz,
                cx * cy * cz - sx * sy * sz,
            ],
            EulerOrder::Zxy => [
                sx * cy * cz - cx * sy * sz,
                cx * sy * cz + sx * cy * sz,
                cx * cy * sz + sx * sy * cz,
                cx * cy * cz - sx * sy * sz,
            ],
            EulerOrder::Zyx => [
                sx * cy * cz - cx * sy * sz,
                cx * sy * cz + sx * cy * sz,
                cx * cy * sz - sx * sy * cz,
                cx * cy * cz + sx * sy * sz,
            ],
        };
        self
    }

    /// Euclidean norm of the four components.
    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Squared Euclidean norm of the four components.
    pub fn squared_length(&self) -> f32 {
        self.dot(self)
    }

    /// Sets the shortest rotation taking unit vector `a` onto unit vector `b`.
    ///
    /// - Opposite vectors: a half turn about an axis perpendicular to `a`,
    ///   taken from `+X × a`, or `+Y × a` when `a` lies along X.
    /// - Equal vectors: identity.
    /// - Otherwise: axis `a × b`, `w = 1 + a·b`, normalised.
    ///
    /// Neither input is checked for unit length.
    pub fn rotation_to(&mut self, a: &Vec3, b: &Vec3) -> &mut Self {
        let dot = a.dot(b);
        if dot < ANTIPARALLEL_DOT {
            let mut axis = Vec3::UNIT_X;
            axis.cross(a);
            if axis.length() < EPSILON {
                axis.copy(&Vec3::UNIT_Y).cross(a);
            }
            axis.normalize();
            trace!(dot, ?axis, "antiparallel rotation_to; half turn");
            self.set_axis_angle(&axis, core::f32::consts::PI)
        } else if dot > PARALLEL_DOT {
            self.set_identity()
        } else {
            let mut axis = *a;
            axis.cross(b);
            self.data = [axis.x(), axis.y(), axis.z(), 1.0 + dot];
            self.normalize()
        }
    }

    /// Scales to unit length in place.
    ///
    /// The zero quaternion stays zero rather than becoming NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let len_sq = self.squared_length();
        let inv = if len_sq > 0.0 { 1.0 / len_sq.sqrt() } else { 0.0 };
        self.scale(inv)
    }

    /// Sets the rotation that maps the basis `(right, up, -view)` onto
    /// `(+X, +Y, +Z)`.
    ///
    /// The three vectors are written as the columns of a [`Mat3`], converted
    /// with [`Quat::from_mat3`], then normalised. Inputs must be mutually
    /// perpendicular unit vectors; this is not checked.
    pub fn set_axes(&mut self, view: &Vec3, right: &Vec3, up: &Vec3) -> &mut Self {
        let basis = Mat3::new([
            right.x(),
            up.x(),
            -view.x(),
            right.y(),
            up.y(),
            -view.y(),
            right.z(),
            up.z(),
            -view.z(),
        ]);
        self.from_mat3(&basis).normalize()
    }

    /// Component-wise [`mathf::approx_eq`].
    ///
    /// `q` and `-q` encode the same rotation but do not compare equal here.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data)
            .all(|(&a, b)| mathf::approx_eq(a, b))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "quat({x}, {y}, {z}, {w})")
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
