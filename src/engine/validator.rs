//! Input validation for smoothing interpolation.
//!
//! ## Purpose
//!
//! This module provides validation for interpolation inputs and
//! configuration. It checks array lengths, channel stride, finite values,
//! and the strict monotonicity of the knot abscissas.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Structural checks**: stride positivity, length product, minimum knots.
//! * **Finite checks**: No NaN/Inf in tables or the query abscissa.
//! * **Monotonicity**: Duplicate or out-of-order abscissas are rejected here
//!   so the solver never sees a zero knot spacing.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WhittakerError;

/// Minimum number of knots for the second-difference smoothing fit.
pub const MIN_KNOTS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for interpolation inputs and configuration.
///
/// Provides static methods returning `Result<(), WhittakerError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the knot table, observation table, and channel stride.
    pub fn validate_inputs<T: Float>(
        x_table: &[T],
        y_table: &[T],
        y_stride: usize,
    ) -> Result<(), WhittakerError> {
        // Check 1: Positive channel count
        if y_stride == 0 {
            return Err(WhittakerError::InvalidStride);
        }

        // Check 2: Non-empty arrays
        if x_table.is_empty() || y_table.is_empty() {
            return Err(WhittakerError::EmptyInput);
        }

        // Check 3: Channel-interleaved length product
        let n = x_table.len();
        if y_table.len() != n * y_stride {
            return Err(WhittakerError::MismatchedInputs {
                x_len: n,
                y_len: y_table.len(),
                y_stride,
            });
        }

        // Check 4: Sufficient knots for the smoothing fit
        if n < MIN_KNOTS {
            return Err(WhittakerError::TooFewPoints {
                got: n,
                min: MIN_KNOTS,
            });
        }

        // Check 5: All values finite
        for (i, &val) in x_table.iter().enumerate() {
            if !val.is_finite() {
                return Err(WhittakerError::InvalidNumericValue(format!(
                    "x_table[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y_table.iter().enumerate() {
            if !val.is_finite() {
                return Err(WhittakerError::InvalidNumericValue(format!(
                    "y_table[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 6: Strictly increasing abscissas
        for i in 0..n - 1 {
            if x_table[i] >= x_table[i + 1] {
                return Err(WhittakerError::NonIncreasingAbscissas { index: i });
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), WhittakerError> {
        if !val.is_finite() {
            return Err(WhittakerError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing strength parameter.
    pub fn validate_lambda<T: Float>(lambda: T) -> Result<(), WhittakerError> {
        if !lambda.is_finite() || lambda <= T::zero() {
            return Err(WhittakerError::InvalidLambda(
                lambda.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a caller-provided output buffer against the channel count.
    pub fn validate_output_len(len: usize, y_stride: usize) -> Result<(), WhittakerError> {
        if len < y_stride {
            return Err(WhittakerError::OutputTooSmall {
                got: len,
                need: y_stride,
            });
        }
        Ok(())
    }
}
