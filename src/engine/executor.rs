//! Execution engine for the per-channel smoothing solves.
//!
//! ## Purpose
//!
//! This module orchestrates the full Whittaker–Eilers pipeline for every
//! interleaved channel: knot augmentation, difference-operator construction,
//! normal-matrix assembly, banded Cholesky factorization, substitution, and
//! result extraction at the query row.
//!
//! ## Design notes
//!
//! * **Insertion trick**: The query abscissa becomes an extra knot with zero
//!   observation weight; the fitted value at that row is the interpolated
//!   result. Extrapolation needs no special handling: the query simply lands
//!   at slot `0` or `n`.
//! * **Knot collision**: A query exactly equal to an existing abscissa would
//!   give the augmented table a zero spacing. In that case the un-augmented
//!   system is solved with uniform unit weights and the matched row is read
//!   instead.
//! * **Staged output**: Results accumulate in the workspace and reach the
//!   caller's buffer only after every channel succeeds.
//!
//! ## Key concepts
//!
//! * **Channel independence**: The `y_stride` solves share nothing but the
//!   knot table; each is a fresh `O(n)` banded solve.
//! * **Tie-break**: The query is inserted before the first knot strictly
//!   greater than it.
//!
//! ## Invariants
//!
//! * Inputs are already validated (handled by `validator`): abscissas are
//!   strictly increasing, lengths agree, `y_stride >= 1`.
//! * The weight vector of an augmented solve has exactly one zero, at the
//!   inserted row.
//!
//! ## Non-goals
//!
//! * This module does not validate input data.
//! * This module does not provide batch multi-query evaluation; the
//!   factorization depends on the query position and cannot be reused.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::workspace::WhittakerWorkspace;
use crate::math::banded::{curvature_operator, difference_scalings, normal_matrix};
use crate::math::cholesky::{back_substitute, factor, forward_substitute};
use crate::primitives::errors::WhittakerError;

// ============================================================================
// Query Placement
// ============================================================================

/// Where the query abscissa lands relative to the knot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRow {
    /// Insert the query before the knot at this index (`n` appends).
    Insert(usize),
    /// The query coincides exactly with the knot at this index.
    Coincident(usize),
}

/// Locate the query abscissa within a strictly increasing knot table.
///
/// Returns `Insert(i)` where `i` is the index of the first knot strictly
/// greater than `x` (`n` when `x` is at or beyond the last knot), or
/// `Coincident(k)` when `x` equals a knot exactly.
pub fn locate_query<T: Float>(x: T, x_table: &[T]) -> QueryRow {
    for (k, &knot) in x_table.iter().enumerate() {
        if knot == x {
            return QueryRow::Coincident(k);
        }
        if knot > x {
            return QueryRow::Insert(k);
        }
    }
    QueryRow::Insert(x_table.len())
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates the per-channel smoothing solves.
pub struct Executor;

impl Executor {
    /// Interpolate at `x` for every interleaved channel.
    ///
    /// Inputs must already be validated. On success the first `y_stride`
    /// slots of `result` hold one smoothed value per channel; on error
    /// `result` is untouched.
    pub fn run<T: Float>(
        x: T,
        x_table: &[T],
        y_table: &[T],
        y_stride: usize,
        lambda: T,
        ws: &mut WhittakerWorkspace<T>,
        result: &mut [T],
    ) -> Result<(), WhittakerError> {
        let n = x_table.len();
        let row = locate_query(x, x_table);
        let m = match row {
            QueryRow::Insert(_) => n + 1,
            QueryRow::Coincident(_) => n,
        };

        ws.out.fill_with(y_stride, T::zero());

        for channel in 0..y_stride {
            ws.reset(m);
            let answer_row = Self::augment(x, x_table, y_table, y_stride, channel, row, ws);
            Self::solve_channel(lambda, ws)?;
            ws.out[channel] = ws.zb[answer_row];
        }

        result[..y_stride].copy_from_slice(&ws.out);
        Ok(())
    }

    /// Fill the augmented knot, observation, and weight tables for one
    /// channel. Returns the row holding the query.
    fn augment<T: Float>(
        x: T,
        x_table: &[T],
        y_table: &[T],
        y_stride: usize,
        channel: usize,
        row: QueryRow,
        ws: &mut WhittakerWorkspace<T>,
    ) -> usize {
        let n = x_table.len();
        match row {
            QueryRow::Insert(idx) => {
                for k in 0..n {
                    let slot = if k < idx { k } else { k + 1 };
                    ws.xi[slot] = x_table[k];
                    ws.yi[slot] = y_table[k * y_stride + channel];
                    ws.w[slot] = T::one();
                }
                // Query row: zero placeholder observation, zero weight.
                ws.xi[idx] = x;
                ws.yi[idx] = T::zero();
                ws.w[idx] = T::zero();
                idx
            }
            QueryRow::Coincident(k) => {
                ws.xi.copy_from(x_table);
                for i in 0..n {
                    ws.yi[i] = y_table[i * y_stride + channel];
                    ws.w[i] = T::one();
                }
                k
            }
        }
    }

    /// Run the banded solve for the tables currently in the workspace.
    fn solve_channel<T: Float>(
        lambda: T,
        ws: &mut WhittakerWorkspace<T>,
    ) -> Result<(), WhittakerError> {
        difference_scalings(&ws.xi, &mut ws.v1, &mut ws.v2);
        curvature_operator(&ws.v1, &ws.v2, &mut ws.da);
        normal_matrix(&ws.da, &ws.w, lambda, &mut ws.dtd);
        factor(&ws.dtd, &mut ws.ca)?;

        for i in 0..ws.yi.len() {
            ws.b[i] = ws.w[i] * ws.yi[i];
        }
        forward_substitute(&ws.ca, &ws.b, &mut ws.za);
        back_substitute(&ws.ca, &ws.za, &mut ws.zb);
        Ok(())
    }
}
