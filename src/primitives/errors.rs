//! Error types for Whittaker smoothing interpolation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running the smoothing interpolator, covering input validation,
//! builder-time parameter constraints, and numerical failure of the banded
//! Cholesky factorization.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs.
//!   expected lengths, the failing matrix row).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite
//!    values, unsorted abscissas.
//! 2. **Parameter validation**: Non-positive or non-finite smoothing
//!    strength.
//! 3. **Numerical failure**: A non-positive Cholesky pivot, reported instead
//!    of propagating NaN through the solve.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Whittaker smoothing interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum WhittakerError {
    /// Input arrays are empty; interpolation requires at least 2 knots.
    EmptyInput,

    /// `y_table` length must equal `x_table.len() * y_stride`.
    MismatchedInputs {
        /// Number of knots in `x_table`.
        x_len: usize,
        /// Number of elements in `y_table`.
        y_len: usize,
        /// Number of interleaved channels.
        y_stride: usize,
    },

    /// Channel count `y_stride` must be at least 1.
    InvalidStride,

    /// Number of knots is below the minimum requirement.
    TooFewPoints {
        /// Number of knots provided.
        got: usize,
        /// Minimum required knots.
        min: usize,
    },

    /// Knot abscissas must be strictly increasing (duplicates included).
    NonIncreasingAbscissas {
        /// Index `i` such that `x_table[i] >= x_table[i + 1]`.
        index: usize,
    },

    /// Input data or query abscissa contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Smoothing strength must be finite and strictly positive.
    InvalidLambda(f64),

    /// Caller-provided result buffer is shorter than `y_stride`.
    OutputTooSmall {
        /// Length of the buffer provided.
        got: usize,
        /// Required length (`y_stride`).
        need: usize,
    },

    /// The banded normal matrix lost positive definiteness during
    /// factorization (non-positive pivot).
    NumericalInstability {
        /// Matrix row at which the pivot failed.
        row: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WhittakerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs {
                x_len,
                y_len,
                y_stride,
            } => {
                write!(
                    f,
                    "Length mismatch: y_table has {y_len} values, expected {x_len} knots * {y_stride} channels"
                )
            }
            Self::InvalidStride => write!(f, "Invalid y_stride: 0 (must be at least 1)"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few knots: got {got}, need at least {min}")
            }
            Self::NonIncreasingAbscissas { index } => {
                write!(f, "Knot abscissas not strictly increasing at index {index}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidLambda(lambda) => {
                write!(f, "Invalid lambda: {lambda} (must be finite and > 0)")
            }
            Self::OutputTooSmall { got, need } => {
                write!(f, "Result buffer too small: got {got}, need {need}")
            }
            Self::NumericalInstability { row } => {
                write!(
                    f,
                    "Numerical instability: non-positive Cholesky pivot at row {row}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for WhittakerError {}
