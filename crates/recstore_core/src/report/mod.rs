//! Derived views over record collections.
//!
//! # Responsibility
//! - Compute aggregates (sums, grouped sums, rankings, distinct values) on
//!   demand from a store's current records.
//!
//! # Invariants
//! - Every helper is stateless and recomputed per call; nothing is cached,
//!   so a view can never go stale relative to the store.

pub mod aggregate;
