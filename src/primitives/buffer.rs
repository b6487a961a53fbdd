//! Memory management and buffer recycling for the smoothing solver.
//!
//! ## Purpose
//!
//! This module provides a reusable vector wrapper (`Slot`) used to build the
//! solver workspace. The per-channel working arrays all share the same length
//! `m = n + 1`, so recycling them across channel iterations (and across
//! calls) removes nearly all allocation from the steady-state path.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: `fill_with` grows the underlying vector on demand
//!   but never shrinks it, so capacity stabilizes at the largest `m` seen.
//! * **Overwrite Semantics**: Every element is rewritten on reset; no stale
//!   data survives between channels.
//!
//! ## Invariants
//!
//! * Capacity is monotonically non-decreasing.
//! * After `fill_with(len, v)`, the slot has logical length exactly `len`.
//!
//! ## Non-goals
//!
//! * Thread-local caching (a workspace is explicitly owned by its model).
//! * Dynamic shrinking or memory reclamation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};

// ============================================================================
// Slot - Reusable Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T: Copy> Slot<T> {
    /// Create an empty slot.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Resize the slot to `len` elements, all set to `value`.
    ///
    /// Grows the underlying vector if needed; never shrinks capacity.
    #[inline]
    pub fn fill_with(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }

    /// Resize the slot to hold a copy of `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &[T]) {
        self.0.clear();
        self.0.extend_from_slice(src);
    }

    /// Consume the slot and return the underlying vector.
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Copy> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
