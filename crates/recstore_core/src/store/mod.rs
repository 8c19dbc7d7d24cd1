//! Generic in-memory record storage.
//!
//! # Responsibility
//! - Provide the ordered, id-keyed collection every domain model is kept in.
//! - Keep serialization details of the snapshot format inside this boundary.
//!
//! # Invariants
//! - All record ids in a store are pairwise distinct after every operation.
//! - Insertion order is the only ordering the store maintains.

pub mod record_store;
