//! Band-3 matrix storage and second-difference operator construction.
//!
//! ## Purpose
//!
//! This module provides the fixed-width banded storage used by the smoothing
//! solver, together with the construction of the spacing-aware
//! second-difference (curvature) operator and the normal-equations matrix
//! `W + λ·DᵗD`.
//!
//! ## Design notes
//!
//! * **Explicit rows**: Bands are stored as rows of `[T; 3]` rather than a
//!   flat stride-3 array, eliminating manual offset arithmetic.
//! * **Non-uniform spacing**: First and second differences are scaled by the
//!   reciprocal knot spacings, not unit-spacing stencils.
//! * **Structural zeros**: Rows with no defined difference (the final one or
//!   two) are stored as zero rows, which lets the closed-form band products
//!   below run without boundary branches on the high end.
//!
//! ## Key concepts
//!
//! * **Curvature operator**: `D = V2·Δ·V1·Δ`, three nonzero entries per row.
//! * **Normal matrix**: symmetric band of `W + λ·DᵗD`; only the diagonal and
//!   two upper off-diagonals are stored per row.
//!
//! ## Invariants
//!
//! * `curvature_operator` writes every row of its output; rows `m-2` and
//!   `m-1` are always zero.
//! * The normal matrix diagonal is strictly positive for strictly increasing
//!   knots with at least one positive weight per solve.
//!
//! ## Non-goals
//!
//! * General banded matrices (bandwidth is fixed at 3).
//! * Factorization or solving (see [`crate::math::cholesky`]).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// ============================================================================
// Band3 Storage
// ============================================================================

/// Banded matrix storage with three stored values per row.
///
/// The meaning of the three slots depends on the matrix held:
///
/// * curvature operator `D`: `[D(i,i), D(i,i+1), D(i,i+2)]`
/// * symmetric normal matrix: `[A(i,i), A(i,i+1), A(i,i+2)]`
/// * lower Cholesky factor `L`: `[L(i,i-2), L(i,i-1), L(i,i)]`
#[derive(Debug, Clone)]
pub struct Band3<T> {
    rows: Vec<[T; 3]>,
}

impl<T: Float> Band3<T> {
    /// Create an empty band matrix.
    #[inline]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Resize to `len` rows, all zeroed. Never shrinks capacity.
    #[inline]
    pub fn reset(&mut self, len: usize) {
        self.rows.clear();
        self.rows.resize(len, [T::zero(); 3]);
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Float> Default for Band3<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Band3<T> {
    type Output = [T; 3];
    #[inline]
    fn index(&self, row: usize) -> &[T; 3] {
        &self.rows[row]
    }
}

impl<T> IndexMut<usize> for Band3<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T; 3] {
        &mut self.rows[row]
    }
}

// ============================================================================
// Difference Scalings
// ============================================================================

/// Compute the reciprocal-spacing scalings for first and second differences.
///
/// `v1[i] = 1 / (xi[i+1] - xi[i])` for all but the last row, else `0`.
/// `v2[i] = 1 / (xi[i+2] - xi[i])` for all but the last two rows, else `0`.
///
/// All three slices must have the same length.
pub fn difference_scalings<T: Float>(xi: &[T], v1: &mut [T], v2: &mut [T]) {
    let m = xi.len();
    debug_assert_eq!(v1.len(), m);
    debug_assert_eq!(v2.len(), m);

    for i in 0..m {
        v1[i] = if i + 1 < m {
            T::one() / (xi[i + 1] - xi[i])
        } else {
            T::zero()
        };
        v2[i] = if i + 2 < m {
            T::one() / (xi[i + 2] - xi[i])
        } else {
            T::zero()
        };
    }
}

// ============================================================================
// Curvature Operator
// ============================================================================

/// Build the banded second-difference operator `D = V2·Δ·V1·Δ`.
///
/// Row `i` applies `v2[i] * (v1[i+1]·(f[i+2] - f[i+1]) - v1[i]·(f[i+1] - f[i]))`,
/// folding the two difference levels into a single 3-wide stencil:
///
/// ```text
/// D(i, i)   =  v2[i] · v1[i]
/// D(i, i+1) = -v2[i] · (v1[i] + v1[i+1])
/// D(i, i+2) =  v2[i] · v1[i+1]
/// ```
///
/// The final two rows carry no second difference and are zeroed.
pub fn curvature_operator<T: Float>(v1: &[T], v2: &[T], da: &mut Band3<T>) {
    let m = v1.len();
    debug_assert_eq!(v2.len(), m);
    da.reset(m);

    for i in 0..m.saturating_sub(2) {
        da[i][0] = v2[i] * v1[i];
        da[i][1] = -v2[i] * (v1[i] + v1[i + 1]);
        da[i][2] = v2[i] * v1[i + 1];
    }
}

// ============================================================================
// Normal Matrix Assembly
// ============================================================================

/// Assemble the symmetric normal matrix `W + λ·DᵗD` in band-3 storage.
///
/// Row `i` stores `[A(i,i), A(i,i+1), A(i,i+2)]`. The band product of `D`
/// with its transpose is expanded in closed form; rows `0` and `1` lack the
/// contributions of rows `i-2` and `i-1` of `D` and are special-cased. The
/// zeroed trailing rows of `D` make the general formula valid up to the last
/// row without further branching.
pub fn normal_matrix<T: Float>(da: &Band3<T>, w: &[T], lambda: T, dtd: &mut Band3<T>) {
    let m = da.len();
    debug_assert_eq!(w.len(), m);
    dtd.reset(m);
    if m == 0 {
        return;
    }

    dtd[0][0] = lambda * da[0][0] * da[0][0] + w[0];
    dtd[0][1] = lambda * da[0][0] * da[0][1];
    dtd[0][2] = lambda * da[0][0] * da[0][2];

    if m > 1 {
        dtd[1][0] = lambda * (da[0][1] * da[0][1] + da[1][0] * da[1][0]) + w[1];
        dtd[1][1] = lambda * (da[0][1] * da[0][2] + da[1][0] * da[1][1]);
        dtd[1][2] = lambda * da[1][0] * da[1][2];
    }

    for i in 2..m {
        dtd[i][0] = lambda
            * (da[i - 2][2] * da[i - 2][2] + da[i - 1][1] * da[i - 1][1] + da[i][0] * da[i][0])
            + w[i];
        dtd[i][1] = lambda * (da[i - 1][1] * da[i - 1][2] + da[i][0] * da[i][1]);
        dtd[i][2] = lambda * da[i][0] * da[i][2];
    }
}
