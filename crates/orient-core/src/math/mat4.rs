// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Quat, Vec3, EPSILON_DET};

/// Column‑major 4×4 matrix.
///
/// - Stored in column‑major order to align with GPU uploads.
/// - Represents affine transforms and projections; [`Mat4::transform_point`]
///   treats points homogeneously (`w = 1`, no divide) while
///   [`Mat4::project_point`] performs the perspective divide.
///
/// # Examples
/// ```
/// use orient_core::math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and inversions accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a rotation matrix from an axis and angle in radians.
    ///
    /// A zero-length axis yields the identity rotation.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle(axis, angle))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Constructs a matrix from a quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Ordering: `R = R_y(yaw) * R_x(pitch) * R_z(roll)`.
    pub fn rotation_from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_y(yaw)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_z(roll))
    }

    /// Right-handed perspective projection with clip-space depth in `[-1, 1]`.
    ///
    /// `fov_y` is the full vertical field of view in radians. The camera looks
    /// down `-Z`.
    #[rustfmt::skip]
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let nf = 1.0 / (near - far);
        Self::new([
            f / aspect, 0.0, 0.0,                    0.0,
            0.0,        f,   0.0,                    0.0,
            0.0,        0.0, (far + near) * nf,      -1.0,
            0.0,        0.0, 2.0 * far * near * nf,  0.0,
        ])
    }

    /// Right-handed orthographic projection with clip-space depth in `[-1, 1]`.
    #[rustfmt::skip]
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let w = 1.0 / (right - left);
        let h = 1.0 / (top - bottom);
        let d = 1.0 / (far - near);
        Self::new([
            2.0 * w,               0.0,                   0.0,                 0.0,
            0.0,                   2.0 * h,               0.0,                 0.0,
            0.0,                   0.0,                   -2.0 * d,            0.0,
            -(right + left) * w,   -(top + bottom) * h,   -(far + near) * d,   1.0,
        ])
    }

    /// Right-handed view matrix placing the camera at `eye` looking at `target`.
    #[rustfmt::skip]
    pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let f = target.sub(eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(&f);
        Self::new([
            s.x(),         u.x(),         -f.x(),       0.0,
            s.y(),         u.y(),         -f.y(),       0.0,
            s.z(),         u.z(),         -f.z(),       0.0,
            -s.dot(eye),   -u.dot(eye),   f.dot(eye),   1.0,
        ])
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Returns row `r` (0..4) as `[m_r0, m_r1, m_r2, m_r3]`.
    ///
    /// # Panics
    /// Panics if `r >= 4`.
    pub fn row(&self, r: usize) -> [f32; 4] {
        [self.at(r, 0), self.at(r, 1), self.at(r, 2), self.at(r, 3)]
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use orient_core::math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3);
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3);
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3);

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a point and divides by the resulting `w`.
    ///
    /// Used to unproject clip-space corners through an inverse projection.
    /// A zero `w` yields non-finite components.
    pub fn project_point(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);
        let w = self.at(3, 0) * x + self.at(3, 1) * y + self.at(3, 2) * z + self.at(3, 3);
        self.transform_point(point).scale(1.0 / w)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// The result is not renormalized; scale in the matrix scales the vector.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }

    /// Determinant of the full 4×4 matrix.
    pub fn determinant(&self) -> f32 {
        self.gauss_jordan().0
    }

    /// Returns the inverse, or `None` when the matrix is singular.
    ///
    /// A matrix counts as singular when `|det| <= EPSILON_DET` or when the
    /// determinant is not finite.
    ///
    /// # Examples
    /// ```
    /// use orient_core::math::{Mat4, Vec3};
    /// let m = Mat4::translation(1.0, 2.0, 3.0).multiply(&Mat4::scale(2.0, 2.0, 2.0));
    /// let inv = m.try_inverse().unwrap();
    /// let p = Vec3::new(3.0, 4.0, 5.0);
    /// assert_eq!(inv.transform_point(&p).to_array(), [1.0, 1.0, 1.0]);
    /// assert!(Mat4::scale(1.0, 0.0, 1.0).try_inverse().is_none());
    /// ```
    pub fn try_inverse(&self) -> Option<Self> {
        let (det, inverse) = self.gauss_jordan();
        if !det.is_finite() || det.abs() <= EPSILON_DET {
            return None;
        }
        inverse
    }

    // Gauss-Jordan elimination with partial pivoting. Returns the determinant
    // (product of pivots, sign-corrected for row swaps) and the inverse when
    // every pivot is non-zero.
    fn gauss_jordan(&self) -> (f32, Option<Self>) {
        let mut a = [[0.0_f32; 4]; 4];
        let mut inv = [[0.0_f32; 4]; 4];
        for r in 0..4 {
            a[r] = self.row(r);
            inv[r][r] = 1.0;
        }

        let mut det = 1.0_f32;
        for col in 0..4 {
            let mut pivot = col;
            for r in (col + 1)..4 {
                if a[r][col].abs() > a[pivot][col].abs() {
                    pivot = r;
                }
            }
            if a[pivot][col] == 0.0 {
                return (0.0, None);
            }
            if pivot != col {
                a.swap(pivot, col);
                inv.swap(pivot, col);
                det = -det;
            }

            let p = a[col][col];
            det *= p;
            let inv_p = 1.0 / p;
            for k in 0..4 {
                a[col][k] *= inv_p;
                inv[col][k] *= inv_p;
            }

            for r in 0..4 {
                if r == col {
                    continue;
                }
                let factor = a[r][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..4 {
                    a[r][k] -= factor * a[col][k];
                    inv[r][k] -= factor * inv[col][k];
                }
            }
        }

        let mut out = [0.0; 16];
        for (row, values) in inv.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                out[col * 4 + row] = *value;
            }
        }
        (det, Some(Self::new(out)))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}
