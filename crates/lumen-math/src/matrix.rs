// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `Mat4` type and associated operations.

use approx::AbsDiffEq;

use super::error::MatrixError;
use super::vector::{Vec3, Vec4};
use super::{lu, EPSILON};
use std::fmt;
use std::ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign};

/// A 4x4 column-major matrix, used for 3D affine transformations.
///
/// The matrix is stored as four [`Vec4`] columns; `cols[0]` is the first
/// column. The public [`get`](Mat4::get)/[`set`](Mat4::set) accessors take
/// zero-based `(row, col)` pairs with row-major semantics and resolve them
/// onto the column-major storage, so callers never deal with the layout.
/// The memory layout is compatible with modern graphics APIs, which consume
/// column-major matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a new matrix from four row vectors.
    ///
    /// This is the transpose of [`from_cols`](Mat4::from_cols) applied to
    /// the same four vectors; the two constructors are deliberately distinct
    /// and not interchangeable.
    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_cols(
            Vec4::new(r0.x, r1.x, r2.x, r3.x),
            Vec4::new(r0.y, r1.y, r2.y, r3.y),
            Vec4::new(r0.z, r1.z, r2.z, r3.z),
            Vec4::new(r0.w, r1.w, r2.w, r3.w),
        )
    }

    /// Creates a new matrix from a nested 4x4 array, one inner array per row.
    #[inline]
    pub fn from_rows_array(rows: [[f32; 4]; 4]) -> Self {
        Self::from_rows(
            Vec4::from(rows[0]),
            Vec4::from(rows[1]),
            Vec4::from(rows[2]),
            Vec4::from(rows[3]),
        )
    }

    /// Creates a new matrix from 16 flat values consumed in row-major order.
    #[inline]
    pub fn from_row_major_array(a: [f32; 16]) -> Self {
        Self::from_rows(
            Vec4::new(a[0], a[1], a[2], a[3]),
            Vec4::new(a[4], a[5], a[6], a[7]),
            Vec4::new(a[8], a[9], a[10], a[11]),
            Vec4::new(a[12], a[13], a[14], a[15]),
        )
    }

    /// Returns a row of the matrix as a `Vec4`.
    ///
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.cols[0].get(index),
            y: self.cols[1].get(index),
            z: self.cols[2].get(index),
            w: self.cols[3].get(index),
        }
    }

    /// Retrieves the element at the given zero-based `(row, col)` position.
    ///
    /// # Panics
    /// Panics if either index is outside `[0, 3]`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "Index out of bounds for Mat4");
        self.cols[col].get(row)
    }

    /// Sets the element at the given zero-based `(row, col)` position.
    ///
    /// # Panics
    /// Panics if either index is outside `[0, 3]`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < 4 && col < 4, "Index out of bounds for Mat4");
        match row {
            0 => self.cols[col].x = value,
            1 => self.cols[col].y = value,
            2 => self.cols[col].z = value,
            _ => self.cols[col].w = value,
        }
    }

    /// Returns the entries as a nested 4x4 array, one inner array per row.
    #[inline]
    pub fn to_rows_array(&self) -> [[f32; 4]; 4] {
        let r0 = self.get_row(0);
        let r1 = self.get_row(1);
        let r2 = self.get_row(2);
        let r3 = self.get_row(3);
        [
            [r0.x, r0.y, r0.z, r0.w],
            [r1.x, r1.y, r1.z, r1.w],
            [r2.x, r2.y, r2.z, r2.w],
            [r3.x, r3.y, r3.z, r3.w],
        ]
    }

    /// Returns the entries as 16 flat values in row-major order.
    #[inline]
    pub fn to_row_major_array(&self) -> [f32; 16] {
        let r0 = self.get_row(0);
        let r1 = self.get_row(1);
        let r2 = self.get_row(2);
        let r3 = self.get_row(3);
        [
            r0.x, r0.y, r0.z, r0.w, r1.x, r1.y, r1.z, r1.w, r2.x, r2.y, r2.z, r2.w, r3.x, r3.y,
            r3.z, r3.w,
        ]
    }

    /// Returns the entries as 16 flat values in column-major order, the
    /// layout graphics pipelines consume.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let [c0, c1, c2, c3] = self.cols;
        [
            c0.x, c0.y, c0.z, c0.w, c1.x, c1.y, c1.z, c1.w, c2.x, c2.y, c2.z, c2.w, c3.x, c3.y,
            c3.z, c3.w,
        ]
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(v.x, v.y, v.z, 1.0),
            ],
        }
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(scale.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scale.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scale.z, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a rotation around the X-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, c, s, 0.0),
                Vec4::new(0.0, -s, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(c, 0.0, -s, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(s, 0.0, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a rotation around the Z-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(c, s, 0.0, 0.0),
                Vec4::new(-s, c, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    ///
    /// Transposition is self-inverse: `m.transpose().transpose() == m` exactly.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            self.get_row(0),
            self.get_row(1),
            self.get_row(2),
            self.get_row(3),
        )
    }

    // One term of the block Laplace expansion: the 2x2 minor taken from
    // columns {0,1} on rows (j,k), times the 2x2 minor from columns {2,3}
    // on the complementary rows (m,n).
    #[inline]
    fn block_minor_product(&self, j: usize, k: usize, m: usize, n: usize) -> f32 {
        let a = self.cols[0].get(j) * self.cols[1].get(k) - self.cols[0].get(k) * self.cols[1].get(j);
        let b = self.cols[2].get(m) * self.cols[3].get(n) - self.cols[2].get(n) * self.cols[3].get(m);
        a * b
    }

    /// Computes the determinant of the matrix.
    ///
    /// Uses the closed-form Laplace expansion over complementary 2x2 blocks
    /// rather than recursive cofactor expansion: six products of minors over
    /// the row pairs (0,1), (0,2), (0,3), (1,2), (1,3), (2,3) accumulated
    /// with alternating signs. A determinant of 0 means the matrix is not
    /// invertible.
    pub fn determinant(&self) -> f32 {
        self.block_minor_product(0, 1, 2, 3) - self.block_minor_product(0, 2, 1, 3)
            + self.block_minor_product(0, 3, 1, 2)
            + self.block_minor_product(1, 2, 0, 3)
            - self.block_minor_product(1, 3, 0, 2)
            + self.block_minor_product(2, 3, 0, 1)
    }

    /// Computes the inverse of the matrix.
    ///
    /// The matrix is factored by LU decomposition with partial pivoting and
    /// the inverse is assembled from the factors; the input is left
    /// untouched. If factorization encounters a zero or near-zero pivot the
    /// matrix is reported as singular via [`MatrixError::Singular`] so
    /// callers can recover, rather than receiving a NaN-filled result.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] when the matrix is not invertible.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        lu::invert(self)
    }

    /// Compares two matrices for approximate equality using the crate-wide
    /// [`EPSILON`](crate::EPSILON).
    ///
    /// All 16 pairwise absolute differences must be below the tolerance.
    #[inline]
    pub fn approx_eq(&self, other: Self) -> bool {
        self.cols[0].approx_eq(other.cols[0])
            && self.cols[1].approx_eq(other.cols[1])
            && self.cols[2].approx_eq(other.cols[2])
            && self.cols[3].approx_eq(other.cols[3])
    }
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`.
    ///
    /// This is the full standard 4x4 product. Composition is associative
    /// but not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut cols = [Vec4::ZERO; 4];
        for (out_col, rhs_col) in cols.iter_mut().zip(rhs.cols) {
            *out_col = self.cols[0] * rhs_col.x
                + self.cols[1] * rhs_col.y
                + self.cols[2] * rhs_col.z
                + self.cols[3] * rhs_col.w;
        }
        Self { cols }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a homogeneous vector by the affine part of this matrix.
    ///
    /// The result's x, y, z are the upper-left 3x3 linear combination of the
    /// vector's x, y, z; the translation/projection column takes no part.
    /// The result's `w` is `rhs.w` scaled by the matrix's `(3,3)` entry
    /// alone, with no cross-terms from x, y, z. Matrices composed purely of
    /// rotation and scale transform points and directions as usual; for a
    /// full homogeneous multiply including translation, compose matrices
    /// instead.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        let linear = self.cols[0].truncate() * rhs.x
            + self.cols[1].truncate() * rhs.y
            + self.cols[2].truncate() * rhs.z;
        Vec4::new(linear.x, linear.y, linear.z, rhs.w * self.cols[3].w)
    }
}

impl Mul<Vec3> for Mat4 {
    type Output = Vec3;
    /// Transforms a direction by this matrix.
    ///
    /// The vector is promoted to homogeneous form with `w = 0`, transformed,
    /// and truncated back to 3D.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        (self * Vec4::from_vec3(rhs, 0.0)).truncate()
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    /// Multiplies every entry of the matrix by a scalar.
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_cols(
            self.cols[0] * rhs,
            self.cols[1] * rhs,
            self.cols[2] * rhs,
            self.cols[3] * rhs,
        )
    }
}

impl Mul<Mat4> for f32 {
    type Output = Mat4;
    /// Multiplies a scalar by a matrix.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f32> for Mat4 {
    /// Rebinds `self` to `self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Mat4 {
    type Output = Self;
    /// Divides every entry of the matrix by a scalar.
    ///
    /// Division by zero follows IEEE semantics and produces infinities or NaN.
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl DivAssign<f32> for Mat4 {
    /// Rebinds `self` to `self / rhs`.
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat4 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.cols[0].abs_diff_eq(&other.cols[0], epsilon)
            && self.cols[1].abs_diff_eq(&other.cols[1], epsilon)
            && self.cols[2].abs_diff_eq(&other.cols[2], epsilon)
            && self.cols[3].abs_diff_eq(&other.cols[3], epsilon)
    }
}

impl fmt::Display for Mat4 {
    /// Formats the matrix as its four rows, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r0 = self.get_row(0);
        let r1 = self.get_row(1);
        let r2 = self.get_row(2);
        let r3 = self.get_row(3);
        write!(f, "[{r0}\n {r1}\n {r2}\n {r3}]")
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_identity_default() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        assert_eq!(Mat4::IDENTITY.get(0, 0), 1.0);
        assert_eq!(Mat4::IDENTITY.get(0, 3), 0.0);
        assert_eq!(Mat4::IDENTITY.get(3, 3), 1.0);
    }

    #[test]
    fn test_from_rows_and_from_cols_are_transposes() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        let c = Vec4::new(9.0, 10.0, 11.0, 12.0);
        let d = Vec4::new(13.0, 14.0, 15.0, 16.0);

        let by_rows = Mat4::from_rows(a, b, c, d);
        let by_cols = Mat4::from_cols(a, b, c, d);

        assert_eq!(by_rows, by_cols.transpose());
        assert_eq!(by_cols, by_rows.transpose());
        assert_ne!(by_rows, by_cols);
    }

    #[test]
    fn test_constructor_forms_agree() {
        let flat = [
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ];
        let nested = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];

        let from_flat = Mat4::from_row_major_array(flat);
        let from_nested = Mat4::from_rows_array(nested);
        let from_vecs = Mat4::from_rows(
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(5.0, 6.0, 7.0, 8.0),
            Vec4::new(9.0, 10.0, 11.0, 12.0),
            Vec4::new(13.0, 14.0, 15.0, 16.0),
        );

        assert_eq!(from_flat, from_nested);
        assert_eq!(from_flat, from_vecs);
    }

    #[test]
    fn test_get_set() {
        let mut m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);

        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 3), 4.0);
        assert_eq!(m.get(2, 1), 10.0);
        assert_eq!(m.get(3, 0), 13.0);

        m.set(2, 1, 99.0);
        assert_eq!(m.get(2, 1), 99.0);
        assert_eq!(m.get(1, 2), 7.0); // Symmetric position untouched
    }

    #[test]
    #[should_panic]
    fn test_get_row_out_of_bounds() {
        let _ = Mat4::IDENTITY.get_row(4);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        let _ = Mat4::IDENTITY.get(0, 4);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds() {
        let mut m = Mat4::IDENTITY;
        m.set(4, 0, 1.0);
    }

    #[test]
    fn test_array_exports() {
        let nested = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        let m = Mat4::from_rows_array(nested);

        assert_eq!(m.to_rows_array(), nested);
        assert_eq!(m.to_row_major_array()[..4], [1.0, 2.0, 3.0, 4.0]);
        // The column-major export of a matrix is the row-major export of its
        // transpose.
        assert_eq!(m.to_cols_array(), m.transpose().to_row_major_array());
        assert_eq!(
            Mat4::from_row_major_array(m.to_row_major_array()),
            m
        );
    }

    #[test]
    fn test_transpose_involution() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 9.0, 7.0],
        ]);
        assert_eq!(m.transpose().transpose(), m);

        let t = m.transpose();
        assert_eq!(t.get(1, 3), m.get(3, 1));
        assert_eq!(t.get(2, 2), m.get(2, 2)); // Diagonal unchanged
    }

    #[test]
    fn test_mul_identity() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 9.0, 7.0],
        ]);
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn test_mul_mat4() {
        let a = Mat4::from_rows_array([
            [1.0, 2.0, 0.0, 0.0],
            [3.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let b = Mat4::from_rows_array([
            [5.0, 6.0, 0.0, 0.0],
            [7.0, 8.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let expected = Mat4::from_rows_array([
            [19.0, 22.0, 0.0, 0.0],
            [43.0, 50.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        assert_eq!(a * b, expected);
        assert_ne!(a * b, b * a); // Not commutative
    }

    #[test]
    fn test_mul_associative() {
        let a = Mat4::from_rotation_x(0.3);
        let b = Mat4::from_rotation_y(0.5);
        let c = Mat4::from_scale(Vec3::new(1.0, 2.0, 0.5));

        assert!(((a * b) * c).approx_eq(a * (b * c)));
    }

    #[test]
    fn test_rotation_composition() {
        let m = Mat4::from_rotation_z(0.4) * Mat4::from_rotation_z(0.6);
        assert!(m.approx_eq(Mat4::from_rotation_z(1.0)));
    }

    #[test]
    fn test_mul_vec4_affine_rule() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 100.0],
            [4.0, 5.0, 6.0, 200.0],
            [7.0, 8.0, 9.0, 300.0],
            [50.0, 60.0, 70.0, 2.0],
        ]);
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);

        // x, y, z come from the upper-left 3x3 only: the fourth column and
        // the bottom row take no part, and w is scaled by entry (3,3) alone.
        assert_eq!(m * v, Vec4::new(6.0, 15.0, 24.0, 2.0));

        // A direction (w = 0) keeps w = 0
        let d = Vec4::new(1.0, 1.0, 1.0, 0.0);
        assert_eq!((m * d).w, 0.0);
    }

    #[test]
    fn test_mul_vec4_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 7.0);
        assert_eq!(Mat4::IDENTITY * v, v);
    }

    #[test]
    fn test_mul_vec4_translation_inert() {
        let m = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let p = Vec4::new(1.0, 2.0, 3.0, 1.0);
        // Translation lives in the fourth column, which the vector
        // transform deliberately ignores.
        assert_eq!(m * p, p);
    }

    #[test]
    fn test_mul_vec3() {
        let m = Mat4::from_rotation_z(FRAC_PI_2);
        assert!((m * Vec3::X).approx_eq(Vec3::Y));

        let s = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(s * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_scalar_multiplication() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let doubled = Mat4::from_rows_array([
            [2.0, 4.0, 6.0, 8.0],
            [10.0, 12.0, 14.0, 16.0],
            [18.0, 20.0, 22.0, 24.0],
            [26.0, 28.0, 30.0, 32.0],
        ]);

        assert_eq!(m * 2.0, doubled);
        assert_eq!(2.0 * m, doubled); // Commutative
    }

    #[test]
    fn test_scalar_division() {
        let m = Mat4::from_rows_array([
            [2.0, 4.0, 6.0, 8.0],
            [10.0, 12.0, 14.0, 16.0],
            [18.0, 20.0, 22.0, 24.0],
            [26.0, 28.0, 30.0, 32.0],
        ]);
        let halved = m / 2.0;
        assert_eq!(halved.get(0, 0), 1.0);
        assert_eq!(halved.get(3, 3), 16.0);
    }

    #[test]
    fn test_compound_assignment() {
        let mut m = Mat4::IDENTITY;
        m *= 4.0;
        assert_eq!(m.get(0, 0), 4.0);
        m /= 4.0;
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::ZERO.determinant(), 0.0);

        // Scale matrix: determinant is the product of the diagonal
        let s = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(s.determinant(), 24.0);

        // Lower-triangular: still the product of the diagonal
        let t = Mat4::from_rows_array([
            [2.0, 0.0, 0.0, 0.0],
            [1.0, 3.0, 0.0, 0.0],
            [4.0, 5.0, 1.0, 0.0],
            [7.0, 8.0, 9.0, 1.0],
        ]);
        assert_eq!(t.determinant(), 6.0);

        // A row swap flips the sign
        let p = Mat4::from_rows_array([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(p.determinant(), -1.0);

        // Rotations preserve volume
        assert!(approx_eq(Mat4::from_rotation_y(PI / 5.0).determinant(), 1.0));

        // Singular matrix
        assert_eq!(Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)).determinant(), 0.0);
    }

    #[test]
    fn test_determinant_of_transpose() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 9.0, 7.0],
        ]);
        assert!(approx_eq(m.determinant(), m.transpose().determinant()));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_rotation_y(FRAC_PI_4)
            * Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0));

        let inv = m.inverse().expect("Matrix should be invertible");
        assert!((m * inv).approx_eq(Mat4::IDENTITY), "M * inv(M) should be Identity");
        assert!((inv * m).approx_eq(Mat4::IDENTITY), "inv(M) * M should be Identity");
    }

    #[test]
    fn test_inverse_does_not_mutate_input() {
        let m = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        let copy = m;
        let _ = m.inverse().expect("Matrix should be invertible");
        assert_eq!(m, copy);
    }

    #[test]
    fn test_inverse_singular() {
        let singular = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(singular.inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn test_approx_eq_all_entries() {
        let m = Mat4::IDENTITY;
        let mut close = m;
        close.set(2, 3, 1.0e-6);
        assert!(m.approx_eq(close));

        // A single out-of-tolerance entry fails the whole comparison
        let mut far = m;
        far.set(2, 3, 0.1);
        assert!(!m.approx_eq(far));
    }

    #[test]
    fn test_column_indexing() {
        let mut m = Mat4::IDENTITY;
        assert_eq!(m[0], Vec4::X);
        assert_eq!(m[3], Vec4::W);
        m[3] = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m.get(0, 3), 1.0);
        assert_eq!(m.get(2, 3), 3.0);
    }

    #[test]
    #[should_panic]
    fn test_column_indexing_out_of_bounds() {
        let _ = Mat4::IDENTITY[4];
    }

    #[test]
    fn test_display() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let expected = "[[1, 2, 3, 4]\n [5, 6, 7, 8]\n [9, 10, 11, 12]\n [13, 14, 15, 16]]";
        assert_eq!(m.to_string(), expected);
    }
}
