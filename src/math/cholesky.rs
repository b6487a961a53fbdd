//! Banded Cholesky factorization and substitution.
//!
//! ## Purpose
//!
//! This module factors the symmetric positive-definite band-3 normal matrix
//! into a lower-triangular band-3 factor `L` with `L·Lᵗ = A`, and solves the
//! normal equations by forward and backward substitution. The recurrence is
//! specialized to this bandwidth; it is not a general banded factorization.
//!
//! ## Design notes
//!
//! * **Boundary rows**: Rows `0` and `1` have no `L(i,i-2)`/`L(i,i-1)`
//!   predecessors and are handled individually; the stored factor keeps zero
//!   fill in those slots. Backward substitution mirrors this for the final
//!   two rows.
//! * **Pivot check**: A non-positive (or NaN) squared pivot aborts the
//!   factorization with [`WhittakerError::NumericalInstability`] instead of
//!   letting NaN propagate through the solve.
//!
//! ## Invariants
//!
//! * After a successful `factor`, every diagonal entry `L(i,i)` is strictly
//!   positive, so the substitutions never divide by zero.
//!
//! ## Non-goals
//!
//! * Pivoting or regularization fallback (the caller's weights and penalty
//!   keep the matrix positive definite for valid inputs).
//! * General bandwidths.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::banded::Band3;
use crate::primitives::errors::WhittakerError;

// ============================================================================
// Factorization
// ============================================================================

/// Factor the symmetric band-3 matrix `dtd` into its lower Cholesky factor.
///
/// `dtd` rows store `[A(i,i), A(i,i+1), A(i,i+2)]`; the output rows store
/// `[L(i,i-2), L(i,i-1), L(i,i)]`. Fails with `NumericalInstability` at the
/// first row whose pivot is not strictly positive.
pub fn factor<T: Float>(dtd: &Band3<T>, ca: &mut Band3<T>) -> Result<(), WhittakerError> {
    let m = dtd.len();
    ca.reset(m);

    for i in 0..m {
        let l2 = if i >= 2 {
            dtd[i - 2][2] / ca[i - 2][2]
        } else {
            T::zero()
        };
        let l1 = if i >= 1 {
            (dtd[i - 1][1] - l2 * ca[i - 1][1]) / ca[i - 1][2]
        } else {
            T::zero()
        };
        let pivot = dtd[i][0] - l1 * l1 - l2 * l2;

        // NaN pivots fail this comparison as well.
        if !(pivot > T::zero()) {
            return Err(WhittakerError::NumericalInstability { row: i });
        }

        ca[i][0] = l2;
        ca[i][1] = l1;
        ca[i][2] = pivot.sqrt();
    }

    Ok(())
}

// ============================================================================
// Substitution
// ============================================================================

/// Solve `L·za = b` by forward substitution.
///
/// Rows `0` and `1` lack one or both sub-diagonal terms; the zero fill in
/// `ca` makes the general recurrence start at row 2.
pub fn forward_substitute<T: Float>(ca: &Band3<T>, b: &[T], za: &mut [T]) {
    let m = ca.len();
    debug_assert_eq!(b.len(), m);
    debug_assert_eq!(za.len(), m);
    if m == 0 {
        return;
    }

    za[0] = b[0] / ca[0][2];
    if m > 1 {
        za[1] = (b[1] - ca[1][1] * za[0]) / ca[1][2];
    }
    for i in 2..m {
        za[i] = (b[i] - ca[i][1] * za[i - 1] - ca[i][0] * za[i - 2]) / ca[i][2];
    }
}

/// Solve `Lᵗ·zb = za` by backward substitution.
///
/// `Lᵗ(i, i+1) = L(i+1, i)` and `Lᵗ(i, i+2) = L(i+2, i)`; the final two rows
/// lack one or both super-diagonal terms and are handled individually.
pub fn back_substitute<T: Float>(ca: &Band3<T>, za: &[T], zb: &mut [T]) {
    let m = ca.len();
    debug_assert_eq!(za.len(), m);
    debug_assert_eq!(zb.len(), m);
    if m == 0 {
        return;
    }

    zb[m - 1] = za[m - 1] / ca[m - 1][2];
    if m > 1 {
        zb[m - 2] = (za[m - 2] - ca[m - 1][1] * zb[m - 1]) / ca[m - 2][2];
    }
    for i in (0..m.saturating_sub(2)).rev() {
        zb[i] = (za[i] - ca[i + 1][1] * zb[i + 1] - ca[i + 2][0] * zb[i + 2]) / ca[i][2];
    }
}
