// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::mathf;
use crate::{Mat3, Quat};

/// Three-component float32 vector.
///
/// * Components may represent points or directions depending on the caller.
/// * Operations mutate the receiver in place and return it for chaining;
///   use `Copy` to keep the original.
/// * The backing `[f32; 3]` is exposed through [`Vec3::as_array`] and
///   [`Vec3::as_mut_array`], and the type is [`Pod`] for buffer casts.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    data: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<Vec3>() == 12);

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
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

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Borrows the raw component buffer.
    pub fn as_array(&self) -> &[f32; 3] {
        &self.data
    }

    /// Mutably borrows the raw component buffer.
    pub fn as_mut_array(&mut self) -> &mut [f32; 3] {
        &mut self.data
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.data = [x, y, z];
        self
    }

    /// Copies the components of `other` into `self`.
    pub fn copy(&mut self, other: &Self) -> &mut Self {
        self.data = other.data;
        self
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

    /// Multiplies by `other` component-wise.
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a *= b;
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

    /// Negates every component.
    pub fn negate(&mut self) -> &mut Self {
        for a in &mut self.data {
            *a = -*a;
        }
        self
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Replaces `self` with the right-handed cross product `self × other`.
    pub fn cross(&mut self, other: &Self) -> &mut Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        self.data = [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx];
        self
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Squared Euclidean length.
    pub fn squared_length(&self) -> f32 {
        self.dot(self)
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f32 {
        let mut delta = *other;
        delta.subtract(self).length()
    }

    /// Scales the vector to unit length.
    ///
    /// Any nonzero length is normalized, however small. The zero vector is
    /// left unchanged rather than becoming NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len > 0.0 {
            return self.scale(1.0 / len);
        }
        trace!("normalize of zero-length vec3 left unchanged");
        self
    }

    /// Linear interpolation toward `other`; returns a new vector.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ax + t * (bx - ax), ay + t * (by - ay), az + t * (bz - az))
    }

    /// Transforms `self` as a row vector: `self = self * m`.
    pub fn transform_mat3(&mut self, m: &Mat3) -> &mut Self {
        let [x, y, z] = self.data;
        let d = m.as_array();
        self.data = [
            x * d[0] + y * d[3] + z * d[6],
            x * d[1] + y * d[4] + z * d[7],
            x * d[2] + y * d[5] + z * d[8],
        ];
        self
    }

    /// Rotates `self` by the quaternion `q` (assumed unit length).
    pub fn transform_quat(&mut self, q: &Quat) -> &mut Self {
        let [qx, qy, qz, qw] = q.to_array();
        let [x, y, z] = self.data;

        // uv = q.xyz × v, uuv = q.xyz × uv
        let uvx = qy * z - qz * y;
        let uvy = qz * x - qx * z;
        let uvz = qx * y - qy * x;
        let uuvx = qy * uvz - qz * uvy;
        let uuvy = qz * uvx - qx * uvz;
        let uuvz = qx * uvy - qy * uvx;

        let w2 = qw * 2.0;
        self.data = [
            x + uvx * w2 + uuvx * 2.0,
            y + uvy * w2 + uuvy * 2.0,
            z + uvz * w2 + uuvz * 2.0,
        ];
        self
    }

    /// Component-wise [`mathf::approx_eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data)
            .all(|(&a, b)| mathf::approx_eq(a, b))
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use spatial_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}
