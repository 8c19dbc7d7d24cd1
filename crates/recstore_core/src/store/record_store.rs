//! Generic in-memory record store with JSON snapshot import/export.
//!
//! # Responsibility
//! - Maintain an ordered, id-keyed record collection with deterministic CRUD.
//! - Provide linear-scan queries and atomic snapshot import/export.
//!
//! # Invariants
//! - Record ids are pairwise distinct after every operation, including
//!   import.
//! - Created records are appended; insertion order is preserved by every
//!   operation except `delete` of the record itself.
//! - A fresh id is `1 + max(id)` over current records, or 1 when empty.

use crate::model::record::{RecordId, StoreRecord};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Snapshot encode/decode failure for [`RecordStore::import_json`] and
/// [`RecordStore::export_json`].
///
/// Import failures leave the store untouched.
#[derive(Debug)]
pub enum FormatError {
    /// Input is not valid JSON at all.
    Decode(serde_json::Error),
    /// Input parsed, but the top level is not a sequence.
    NotASequence,
    /// A sequence element is not a mapping.
    NotAMapping { index: usize },
    /// A mapping element does not decode to the record type.
    InvalidRecord {
        index: usize,
        source: serde_json::Error,
    },
    /// Two decoded records share the same id.
    DuplicateId(RecordId),
    /// Snapshot serialization failed.
    Encode(serde_json::Error),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "snapshot is not valid JSON: {err}"),
            Self::NotASequence => write!(f, "snapshot top level must be a sequence of records"),
            Self::NotAMapping { index } => {
                write!(f, "snapshot element {index} is not a mapping")
            }
            Self::InvalidRecord { index, source } => {
                write!(f, "snapshot element {index} does not match the record shape: {source}")
            }
            Self::DuplicateId(id) => write!(f, "snapshot contains duplicate record id {id}"),
            Self::Encode(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for FormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) | Self::Encode(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
            Self::NotASequence | Self::NotAMapping { .. } | Self::DuplicateId(_) => None,
        }
    }
}

/// Ordered in-memory collection of records keyed by unique id.
///
/// The store has exactly one mode of operation (open for CRUD) and is owned
/// by whichever component constructs it; pass it by reference instead of
/// keeping a process-wide singleton. It assumes exclusive single-threaded
/// access — concurrent callers must add their own mutual-exclusion boundary
/// (e.g. wrap the whole store in a `Mutex`).
///
/// Lookup is a linear scan in insertion order; no index is maintained.
#[derive(Debug, Clone)]
pub struct RecordStore<T: StoreRecord> {
    records: Vec<T>,
}

impl<T: StoreRecord> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreRecord> RecordStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record under a fresh unique id and returns it.
    ///
    /// # Contract
    /// - The assigned id is `1 + max(id)` over current records, or 1 when
    ///   the store is empty; any id carried by the draft is overwritten.
    /// - Never fails for well-formed input; missing optional fields are the
    ///   record constructor's responsibility to default.
    pub fn create(&mut self, mut record: T) -> &T {
        record.assign_record_id(self.next_id());
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Returns the record with `id`, or `None` when absent.
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.record_id() == id)
    }

    /// Shallow-merges `patch` into the record with `id`.
    ///
    /// # Contract
    /// - Returns `None` when no record has that id; absence is never raised
    ///   as an error.
    /// - Merge semantics are those of [`StoreRecord::merge`]: named fields
    ///   overwrite, unnamed fields are preserved, nested records are
    ///   replaced wholesale.
    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> Option<&T> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.record_id() == id)?;
        record.merge(patch);
        Some(&*record)
    }

    /// Removes the record with `id`, reporting whether a removal occurred.
    ///
    /// Absence is not an error; the store is left unchanged and `false` is
    /// returned.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.record_id() != id);
        self.records.len() < before
    }

    /// Lazily yields records satisfying `predicate`, in insertion order.
    ///
    /// Each call performs a fresh full linear scan, so the query is
    /// restartable; the store is not mutated by iteration.
    pub fn query<P>(&self, mut predicate: P) -> impl Iterator<Item = &T>
    where
        P: FnMut(&T) -> bool,
    {
        self.records.iter().filter(move |record| predicate(record))
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the whole store to a canonical JSON array snapshot.
    ///
    /// Field order is stable (record field declaration order), so equal
    /// stores produce identical snapshots.
    pub fn export_json(&self) -> Result<String, FormatError> {
        serde_json::to_string(&self.records).map_err(FormatError::Encode)
    }

    /// Replaces the store contents from a JSON array snapshot, atomically.
    ///
    /// # Contract
    /// - The text must decode to a sequence of mappings matching the record
    ///   shape, with pairwise-distinct ids; otherwise a [`FormatError`] is
    ///   returned and the store is left unchanged.
    /// - On success returns the number of imported records; subsequent
    ///   `create` calls continue from the imported maximum id.
    pub fn import_json(&mut self, text: &str) -> Result<usize, FormatError> {
        let parsed: serde_json::Value =
            serde_json::from_str(text).map_err(FormatError::Decode)?;
        let serde_json::Value::Array(items) = parsed else {
            return Err(FormatError::NotASequence);
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !item.is_object() {
                return Err(FormatError::NotAMapping { index });
            }
            let record: T = serde_json::from_value(item)
                .map_err(|source| FormatError::InvalidRecord { index, source })?;
            records.push(record);
        }

        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.record_id()) {
                return Err(FormatError::DuplicateId(record.record_id()));
            }
        }

        let count = records.len();
        self.records = records;
        Ok(count)
    }

    fn next_id(&self) -> RecordId {
        self.records
            .iter()
            .map(StoreRecord::record_id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
