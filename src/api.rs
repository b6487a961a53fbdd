//! High-level API for Whittaker smoothing interpolation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the smoothing strength, and a model type that
//! performs interpolation while owning a reusable solver workspace.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a sensible default for the single
//!   tunable (`lambda = 1.0`).
//! * **Validated**: The smoothing strength is checked at `build()`; data is
//!   checked on every call.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Allocation-aware**: The model owns its workspace, so repeated calls
//!   reuse scratch buffers; `interpolate_into` additionally reuses the
//!   caller's result buffer.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Whittaker::new()`.
//! 2. Optionally set `.lambda(..)`.
//! 3. Call `.build()` to obtain a [`WhittakerModel`].
//! 4. Call `.interpolate(..)` or `.interpolate_into(..)` per query point.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::Executor;
use crate::engine::validator::Validator;
use crate::engine::workspace::WhittakerWorkspace;

// Publicly re-exported types
pub use crate::primitives::errors::WhittakerError;

// ============================================================================
// Sizing Rule
// ============================================================================

/// Minimum number of knots needed to fit a polynomial of the given degree.
///
/// Returns `max(degree + 1, 2)`: a degree-`d` polynomial has `d + 1`
/// coefficients, and the smoothing fit always needs at least two knots.
///
/// ```
/// use whittaker_rs::prelude::*;
///
/// assert_eq!(required_data_points(0), 2);
/// assert_eq!(required_data_points(1), 2);
/// assert_eq!(required_data_points(3), 4);
/// ```
#[inline]
pub fn required_data_points(degree: usize) -> usize {
    core::cmp::max(degree + 1, 2)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring Whittaker smoothing interpolation.
///
/// Usually referred to through the prelude alias `Whittaker`:
///
/// ```
/// use whittaker_rs::prelude::*;
///
/// let mut model = Whittaker::new().lambda(1.0).build()?;
/// let y = model.interpolate(1.5, &[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0], 1)?;
/// assert!(y[0] > 2.0 && y[0] < 3.0);
/// # Result::<(), WhittakerError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct WhittakerBuilder<T: Float> {
    /// Smoothing strength; `None` selects the default of `1.0`.
    lambda: Option<T>,
}

impl<T: Float> WhittakerBuilder<T> {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self { lambda: None }
    }

    /// Set the smoothing strength `λ` (must be finite and `> 0`).
    ///
    /// Larger values trade fidelity to the samples for smoothness; the
    /// default is `1.0`.
    pub fn lambda(mut self, lambda: T) -> Self {
        self.lambda = Some(lambda);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<WhittakerModel<T>, WhittakerError> {
        let lambda = self.lambda.unwrap_or_else(T::one);
        Validator::validate_lambda(lambda)?;
        Ok(WhittakerModel {
            lambda,
            workspace: WhittakerWorkspace::new(),
        })
    }
}

impl<T: Float> Default for WhittakerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured Whittaker smoothing interpolator.
///
/// The model owns a scratch workspace that is reused across the per-channel
/// solves of a call and across calls, which is why the interpolation methods
/// take `&mut self`.
#[derive(Debug, Clone)]
pub struct WhittakerModel<T: Float> {
    /// Smoothing strength.
    lambda: T,
    /// Reusable solver buffers.
    workspace: WhittakerWorkspace<T>,
}

impl<T: Float> WhittakerModel<T> {
    /// The configured smoothing strength.
    #[inline]
    pub fn lambda(&self) -> T {
        self.lambda
    }

    /// Interpolate at `x`, returning one smoothed value per channel.
    ///
    /// `x_table` holds `n` strictly increasing knot abscissas; `y_table`
    /// holds `n * y_stride` channel-interleaved observations (channel `c`'s
    /// sample `k` at index `k * y_stride + c`). The query may lie outside
    /// the knot range; extrapolation is handled by the same insertion step.
    ///
    /// ```
    /// use whittaker_rs::prelude::*;
    ///
    /// // Two interleaved channels over the same knots.
    /// let x_table = [0.0f64, 1.0, 2.0];
    /// let y_table = [0.0, 10.0, 1.0, 11.0, 2.0, 12.0];
    ///
    /// let mut model = Whittaker::new().build()?;
    /// let y = model.interpolate(0.5, &x_table, &y_table, 2)?;
    /// assert!((y[0] - 0.5).abs() < 1e-9);
    /// assert!((y[1] - 10.5).abs() < 1e-9);
    /// # Result::<(), WhittakerError>::Ok(())
    /// ```
    pub fn interpolate(
        &mut self,
        x: T,
        x_table: &[T],
        y_table: &[T],
        y_stride: usize,
    ) -> Result<Vec<T>, WhittakerError> {
        let mut result = Vec::new();
        result.resize(y_stride, T::zero());
        self.interpolate_into(x, x_table, y_table, y_stride, &mut result)?;
        Ok(result)
    }

    /// Interpolate at `x` into a caller-provided buffer.
    ///
    /// `result` must have length at least `y_stride`; its first `y_stride`
    /// slots are overwritten on success and left untouched on error.
    pub fn interpolate_into(
        &mut self,
        x: T,
        x_table: &[T],
        y_table: &[T],
        y_stride: usize,
        result: &mut [T],
    ) -> Result<(), WhittakerError> {
        Validator::validate_inputs(x_table, y_table, y_stride)?;
        Validator::validate_scalar(x, "x")?;
        Validator::validate_output_len(result.len(), y_stride)?;

        Executor::run(
            x,
            x_table,
            y_table,
            y_stride,
            self.lambda,
            &mut self.workspace,
            result,
        )
    }
}
