//! # Whittaker–Eilers Smoothing Interpolation for Rust
//!
//! Penalized least-squares interpolation at an arbitrary query point from a
//! table of irregularly spaced samples.
//!
//! ## What is Whittaker–Eilers smoothing?
//!
//! The Whittaker–Eilers smoother fits a curve through weighted observations
//! by minimizing
//!
//! ```text
//! S(z) = Σ wᵢ (zᵢ - yᵢ)²  +  λ · |D z|²
//! ```
//!
//! where `D` is a second-difference operator scaled for non-uniform knot
//! spacing and `λ` controls the trade-off between fidelity and smoothness.
//! Because the penalty couples only neighboring knots, the normal equations
//! form a narrow banded system that factors and solves in `O(n)`.
//!
//! This crate evaluates that fit exactly at one query abscissa using the
//! *insertion trick*: the query point joins the knot table as an extra knot
//! with zero observation weight, and the fitted value at that row is the
//! interpolated result. Queries outside the sample range extrapolate through
//! the same mechanism.
//!
//! **Key properties:**
//! - Handles irregular knot spacing without resampling
//! - Exact recovery of affine trends (the curvature penalty vanishes)
//! - `O(n)` per channel via a specialized band-3 Cholesky factorization
//! - Any number of interleaved dependent-value channels per call
//!
//! ## Quick Start
//!
//! ```rust
//! use whittaker_rs::prelude::*;
//!
//! let x_table = [0.0, 1.0, 2.0, 3.0];
//! let y_table = [0.0, 1.0, 4.0, 9.0];
//!
//! // Build the model
//! let mut model = Whittaker::new()
//!     .lambda(1.0)    // Smoothing strength (1.0 is the default)
//!     .build()?;
//!
//! // One smoothed value per channel at the query abscissa
//! let y = model.interpolate(1.5, &x_table, &y_table, 1)?;
//! assert!(y[0] > 2.0 && y[0] < 3.0);
//! # Result::<(), WhittakerError>::Ok(())
//! ```
//!
//! ## Channels
//!
//! `y_table` may interleave several dependent-value series over the same
//! knots: channel `c`'s sample `k` lives at index `k * y_stride + c`, and
//! `interpolate` returns one value per channel. Each channel is solved
//! independently; interleaved results are identical to `y_stride` separate
//! single-channel calls.
//!
//! ## Choosing `lambda`
//!
//! `λ` is the single consequential tunable. Small values track the samples
//! closely (as `λ → 0` the fit approaches the data at the knots); large
//! values flatten the curve toward the best affine trend. The default `1.0`
//! matches the reference behavior.
//!
//! ## Result and Error Handling
//!
//! Interpolation returns `Result<Vec<T>, WhittakerError>`. Invalid inputs
//! (mismatched lengths, a zero channel stride, unsorted or duplicate
//! abscissas, non-finite values) are rejected up front; a loss of positive
//! definiteness during factorization surfaces as
//! `WhittakerError::NumericalInstability` rather than NaN output. The `?`
//! operator is idiomatic:
//!
//! ```rust
//! use whittaker_rs::prelude::*;
//! # let x_table = [0.0, 1.0, 2.0, 3.0];
//! # let y_table = [0.0, 1.0, 4.0, 9.0];
//!
//! let mut model = Whittaker::new().build()?;
//! let y = model.interpolate(2.5, &x_table, &y_table, 1)?;
//! # Result::<(), WhittakerError>::Ok(())
//! ```
//!
//! For repeated queries against pre-sized output storage, use
//! [`api::WhittakerModel::interpolate_into`] with a caller-provided buffer.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! whittaker_rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Whittaker, E. T. (1923). "On a New Method of Graduation"
//! - Eilers, P. H. C. (2003). "A Perfect Smoother"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and the reusable buffer abstraction.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains band-3 matrix storage, the spacing-aware second-difference
// operator, normal-matrix assembly, and the banded Cholesky solver.
mod math;

// Layer 3: Engine - orchestration and execution control.
//
// Contains input validation, the reusable workspace, and the per-channel
// execution pipeline.
mod engine;

// High-level fluent API for smoothing interpolation.
//
// Provides the `Whittaker` builder and the `WhittakerModel` type.
pub mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use whittaker_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        required_data_points, WhittakerBuilder as Whittaker, WhittakerError, WhittakerModel,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
