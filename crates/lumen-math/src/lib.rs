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

//! # Lumen Math
//!
//! A small, fixed-size linear algebra kernel for 3D scene and rendering
//! computations: 3- and 4-component `f32` vectors and a 4x4 matrix, with
//! the arithmetic, comparison, and decomposition operations needed to
//! compose transforms, project geometry, and evaluate lighting math.
//!
//! All types are plain `Copy` value types. Every operation returns a new
//! value; nothing is mutated in place except through the explicit
//! [`Mat4::set`] accessor. There is no shared state and no allocation, so
//! every operation is safe to call from any number of threads.
//!
//! Matrix inversion goes through an internal LU factorization with partial
//! pivoting and reports non-invertible inputs as a recoverable
//! [`MatrixError::Singular`] instead of producing a NaN-filled result.

#![warn(missing_docs)]

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
///
/// This is the single tolerance shared by every approximate-equality check
/// in the crate (`Vec3::approx_eq`, `Vec4::approx_eq`, `Mat4::approx_eq`)
/// and by the near-zero pivot test during matrix inversion.
pub const EPSILON: f32 = 1e-5;

// --- Declare Sub-Modules ---

pub mod error;
pub mod matrix;
pub mod vector;

mod lu;

// --- Re-export Principal Types ---

pub use self::error::MatrixError;
pub use self::matrix::Mat4;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use lumen_math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the crate's default [`EPSILON`].
///
/// Note that this is a tolerance comparison, not an equivalence relation:
/// it is reflexive and symmetric but not transitive.
///
/// # Examples
///
/// ```
/// use lumen_math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
