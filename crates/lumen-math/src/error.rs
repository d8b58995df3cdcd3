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

//! Defines the error types for matrix decomposition and inversion.

use std::fmt;

/// An error produced by a matrix decomposition or inversion routine.
///
/// This is the kernel's only recoverable failure: bad indices are caller
/// programming errors and panic at the call site, while ordinary floating
/// edge cases (division by zero, NaN) propagate IEEE semantics untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix is singular, or numerically close enough to singular that
    /// factorization found no usable pivot, and cannot be inverted.
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Singular => {
                write!(f, "Matrix is singular and cannot be inverted")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

// --- Tests ---
