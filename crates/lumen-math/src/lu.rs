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

//! Dense LU factorization with partial pivoting, specialized for 4x4 matrices.
//!
//! This backs [`Mat4::inverse`](crate::Mat4::inverse): factor the matrix as
//! `PA = LU` with row pivoting, then assemble the inverse column by column
//! from the factors. All scratch state lives on the stack of the calling
//! thread, so concurrent inversions never share anything.

use super::error::MatrixError;
use super::matrix::Mat4;
use super::EPSILON;

const N: usize = 4;

/// The result of factoring a matrix as `PA = LU`.
///
/// `lu` holds both factors packed into one array: the strict lower triangle
/// holds the multipliers of unit-diagonal `L`, the upper triangle (diagonal
/// included) holds `U`. `pivots[k]` records the row swapped into position
/// `k` at elimination step `k`.
struct LuFactors {
    lu: [[f32; N]; N],
    pivots: [usize; N],
}

/// Factors `a` (row-major) in place into packed `LU` form with partial pivoting.
///
/// At each elimination step the remaining row with the largest-magnitude
/// entry in the pivot column is swapped into the pivot position. A pivot
/// whose magnitude falls below [`EPSILON`] means the matrix is singular or
/// numerically indistinguishable from singular.
fn factor(mut a: [[f32; N]; N]) -> Result<LuFactors, MatrixError> {
    let mut pivots = [0usize; N];

    for k in 0..N {
        let mut pivot_row = k;
        let mut pivot_mag = a[k][k].abs();
        for r in (k + 1)..N {
            let mag = a[r][k].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = r;
            }
        }

        if pivot_mag < EPSILON {
            log::debug!("LU factorization stalled at step {k}: best pivot magnitude {pivot_mag}");
            return Err(MatrixError::Singular);
        }

        pivots[k] = pivot_row;
        if pivot_row != k {
            a.swap(k, pivot_row);
        }

        let inv_pivot = 1.0 / a[k][k];
        for r in (k + 1)..N {
            let multiplier = a[r][k] * inv_pivot;
            a[r][k] = multiplier;
            for c in (k + 1)..N {
                a[r][c] -= multiplier * a[k][c];
            }
        }
    }

    Ok(LuFactors { lu: a, pivots })
}

impl LuFactors {
    /// Solves `A x = b` using the packed factors: permute `b`, then forward-
    /// and back-substitute.
    fn solve(&self, mut b: [f32; N]) -> [f32; N] {
        // Replay the factorization's row swaps on the right-hand side.
        for k in 0..N {
            b.swap(k, self.pivots[k]);
        }

        // Forward substitution with the unit lower triangle.
        for r in 1..N {
            for c in 0..r {
                b[r] -= self.lu[r][c] * b[c];
            }
        }

        // Back substitution with the upper triangle.
        for r in (0..N).rev() {
            for c in (r + 1)..N {
                b[r] -= self.lu[r][c] * b[c];
            }
            b[r] /= self.lu[r][r];
        }

        b
    }
}

/// Computes the inverse of `m`, solving `A x = e_k` for each basis column.
pub(crate) fn invert(m: &Mat4) -> Result<Mat4, MatrixError> {
    let factors = factor(m.to_rows_array())?;

    let mut inverse = [[0.0f32; N]; N];
    for (k, basis_column) in inverse.iter_mut().enumerate() {
        let mut e = [0.0f32; N];
        e[k] = 1.0;
        *basis_column = factors.solve(e);
    }

    // Each solve produced a column; the accumulator holds them as rows.
    Ok(Mat4::from_rows_array(inverse).transpose())
}

// --- Tests ---
