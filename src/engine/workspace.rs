//! Workspace of reusable solver buffers.
//!
//! ## Purpose
//!
//! This module provides a pre-allocated workspace for the per-channel
//! smoothing solves. Every channel of a call needs the same set of length-`m`
//! working arrays; reusing one workspace across channel iterations and across
//! calls keeps the steady-state path allocation-free.
//!
//! ## Design notes
//!
//! * **Centralized ownership**: One struct holds every scratch sequence the
//!   pipeline needs, from the augmented knot table to the substitution
//!   vectors.
//! * **Staging output**: Channel results accumulate in `out` and are copied
//!   to the caller's buffer only after every channel has solved, so a failure
//!   never leaves partially-written results.
//!
//! ## Invariants
//!
//! * Buffer capacity is monotonically non-decreasing.
//! * Every buffer is fully overwritten before being read in a channel
//!   iteration; no state leaks between channels or calls.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::banded::Band3;
use crate::primitives::buffer::Slot;

// ============================================================================
// Workspace
// ============================================================================

/// Pre-allocated scratch buffers for the smoothing solver.
#[derive(Debug, Clone)]
pub struct WhittakerWorkspace<T> {
    /// Augmented knot abscissas (length `m`).
    pub xi: Slot<T>,
    /// Augmented observations for the current channel (length `m`).
    pub yi: Slot<T>,
    /// Observation weights: `1` for samples, `0` for the query row.
    pub w: Slot<T>,
    /// First-difference reciprocal spacings.
    pub v1: Slot<T>,
    /// Second-difference reciprocal spacings.
    pub v2: Slot<T>,
    /// Weighted right-hand side `W·y`.
    pub b: Slot<T>,
    /// Forward-substitution intermediate.
    pub za: Slot<T>,
    /// Smoothed values at every augmented row.
    pub zb: Slot<T>,
    /// Curvature operator `D` in band-3 storage.
    pub da: Band3<T>,
    /// Normal matrix `W + λ·DᵗD` in band-3 storage.
    pub dtd: Band3<T>,
    /// Lower Cholesky factor in band-3 storage.
    pub ca: Band3<T>,
    /// Per-channel result staging buffer (length `y_stride`).
    pub out: Slot<T>,
}

impl<T: Float> WhittakerWorkspace<T> {
    /// Create an empty workspace; buffers grow on first use.
    pub fn new() -> Self {
        Self {
            xi: Slot::new(),
            yi: Slot::new(),
            w: Slot::new(),
            v1: Slot::new(),
            v2: Slot::new(),
            b: Slot::new(),
            za: Slot::new(),
            zb: Slot::new(),
            da: Band3::new(),
            dtd: Band3::new(),
            ca: Band3::new(),
            out: Slot::new(),
        }
    }

    /// Size every length-`m` vector buffer for the current solve, zeroed.
    ///
    /// Band buffers are sized by the construction routines themselves.
    pub fn reset(&mut self, m: usize) {
        self.xi.fill_with(m, T::zero());
        self.yi.fill_with(m, T::zero());
        self.w.fill_with(m, T::zero());
        self.v1.fill_with(m, T::zero());
        self.v2.fill_with(m, T::zero());
        self.b.fill_with(m, T::zero());
        self.za.fill_with(m, T::zero());
        self.zb.fill_with(m, T::zero());
    }
}

impl<T: Float> Default for WhittakerWorkspace<T> {
    fn default() -> Self {
        Self::new()
    }
}
