//! Domain models stored and queried through the record store.
//!
//! # Responsibility
//! - Define the record contract (`StoreRecord`) and every concrete record
//!   type with its declared patch shape.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `RecordId`.
//! - Updates are shallow merges over a fixed, declared field set; nested
//!   records are replaced wholesale.

pub mod cart;
pub mod contact;
pub mod movie;
pub mod order;
pub mod record;
