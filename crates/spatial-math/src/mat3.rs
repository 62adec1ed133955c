// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::Quat;

/// Row-major 3×3 matrix (`index = row * 3 + col`).
///
/// - Rotations follow the row-vector convention (`v' = v * M`), so row `i`
///   of a rotation matrix is the image of basis axis `i`.
/// - No orthonormality is enforced; the type is a numeric carrier for
///   rotation data passed to and from [`Quat`].
///
/// # Examples
/// ```
/// use spatial_math::{Mat3, Quat, Vec3};
/// let mut q = Quat::IDENTITY;
/// q.rotate_z(core::f32::consts::FRAC_PI_2);
///
/// let mut v = Vec3::UNIT_X;
/// v.transform_mat3(&Mat3::from_quat(&q));
/// assert!(v.approx_eq(&Vec3::UNIT_Y));
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    data: [f32; 9],
}

const _: () = assert!(std::mem::size_of::<Mat3>() == 36);

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, // row 0
        0.0, 1.0, 0.0, // row 1
        0.0, 0.0, 1.0, // row 2
    ]);

    /// Creates a matrix from row-major data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Returns the element at `row`, `col`.
    ///
    /// # Panics
    /// Panics if `row * 3 + col` is outside `0..9`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 3 + col]
    }

    /// Returns the matrix as a row-major array.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    /// Borrows the raw row-major buffer.
    pub fn as_array(&self) -> &[f32; 9] {
        &self.data
    }

    /// Mutably borrows the raw row-major buffer.
    pub fn as_mut_array(&mut self) -> &mut [f32; 9] {
        &mut self.data
    }

    /// Builds the rotation matrix of `q` in the layout
    /// [`Quat::from_mat3`] reads.
    ///
    /// `q` is used as given; a non-unit quaternion produces a scaled matrix.
    pub fn from_quat(q: &Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::new([
            1.0 - yy - zz,
            yx + wz,
            zx - wy,
            yx - wz,
            1.0 - xx - zz,
            zy + wx,
            zx + wy,
            zy - wx,
            1.0 - xx - yy,
        ])
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        self.data.swap(1, 3);
        self.data.swap(2, 6);
        self.data.swap(5, 7);
        self
    }

    /// Replaces `self` with `self * rhs`.
    ///
    /// Under the row-vector convention the product applies `self` first and
    /// `rhs` second: `v * (A * B) == (v * A) * B`.
    pub fn multiply(&mut self, rhs: &Self) -> &mut Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[row * 3 + col] = sum;
            }
        }
        self.data = out;
        self
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self { data: value }
    }
}
