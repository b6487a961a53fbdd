//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing solves:
//! - Input validation
//! - Reusable scratch workspace
//! - The per-channel execution pipeline
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Reusable solver buffers.
pub mod workspace;

/// Per-channel execution pipeline.
pub mod executor;
