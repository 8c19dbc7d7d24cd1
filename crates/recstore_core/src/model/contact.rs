//! Contact domain model.
//!
//! # Responsibility
//! - Define the contact record with its nested address and tag list.
//! - Provide the explicit patch shape for shallow-merge updates.
//!
//! # Invariants
//! - `address` is replaced wholesale by a merge, never field-merged.
//! - Missing list/nested fields default to empty rather than failing.

use crate::model::record::{RecordId, StoreRecord};
use serde::{Deserialize, Serialize};

/// Nested postal address carried by a [`Contact`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub zip: String,
}

impl Address {
    pub fn new(city: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            zip: zip.into(),
        }
    }
}

/// One contact-book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned stable identifier.
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    /// Free-form labels, order-preserving.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Replaced wholesale on merge; see [`ContactPatch`].
    #[serde(default)]
    pub address: Address,
}

impl Contact {
    /// Creates a draft contact with defaulted tags and address.
    ///
    /// The `id` starts at 0 and is assigned by the store on create.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            phone: phone.into(),
            tags: Vec::new(),
            address: Address::default(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }
}

/// Partial-field update for [`Contact`].
///
/// `None` preserves the existing value; `Some` overwrites the whole field,
/// including the nested `address`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tags: Option<Vec<String>>,
    pub address: Option<Address>,
}

impl StoreRecord for Contact {
    type Patch = ContactPatch;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn assign_record_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn merge(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}
