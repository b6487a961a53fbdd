//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides fundamental building blocks used throughout the crate:
//! - Error types for configuration, validation, and numerical failures
//! - Reusable buffer abstractions for allocation-free steady state
//!
//! These have no knowledge of the smoothing algorithm itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for smoothing interpolation.
pub mod errors;

/// Reusable buffer abstractions.
pub mod buffer;
