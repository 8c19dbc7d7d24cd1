//! Record identity and shallow-merge contracts.
//!
//! # Responsibility
//! - Define the identifier type shared by every stored record.
//! - Define the `StoreRecord` contract the generic store operates through.
//!
//! # Invariants
//! - `record_id` is assigned by the store at creation and stays stable for
//!   the record lifetime.
//! - `merge` is a shallow merge: only fields named in the patch change, and
//!   nested records are replaced wholesale, never merged recursively.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable integer identifier for every record in a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = u64;

/// Contract between a record type and the generic [`RecordStore`].
///
/// Each record type declares a fixed field set and an explicit patch shape,
/// so updates go through a declared merge function instead of dynamic
/// property sets.
///
/// [`RecordStore`]: crate::store::record_store::RecordStore
pub trait StoreRecord: Clone + Serialize + DeserializeOwned {
    /// Partial-field shape accepted by shallow-merge updates.
    type Patch;

    /// Returns the record's stable identifier.
    fn record_id(&self) -> RecordId;

    /// Assigns the identifier. Called exactly once by the store on create.
    fn assign_record_id(&mut self, id: RecordId);

    /// Applies a shallow merge of `patch` into this record.
    ///
    /// # Contract
    /// - Every field named in the patch overwrites the corresponding
    ///   top-level field.
    /// - Fields not named in the patch are preserved unchanged.
    /// - Nested-record fields named in the patch are replaced wholesale;
    ///   callers must pass the full nested structure to change any part
    ///   of it.
    fn merge(&mut self, patch: Self::Patch);
}

/// Domain-range violation raised at the point of assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field value falls outside its declared closed range.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} value {value} is outside [{min}, {max}]"),
        }
    }
}

impl Error for ValidationError {}
