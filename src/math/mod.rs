//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure linear-algebra building blocks of the
//! smoothing solver:
//! - Band-3 matrix storage and the second-difference operator
//! - Banded Cholesky factorization and substitution
//!
//! These are reusable mathematical pieces with no orchestration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Band-3 storage, difference scalings, curvature operator, normal matrix.
pub mod banded;

/// Banded Cholesky factorization and forward/backward substitution.
pub mod cholesky;
