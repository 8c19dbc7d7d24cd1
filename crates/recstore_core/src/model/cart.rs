//! Cart domain model: catalog products and cart lines.
//!
//! # Responsibility
//! - Define the catalog product shape and the cart line record.
//!
//! # Invariants
//! - `price_at_add` snapshots the catalog price when the line is first
//!   created and is never rewritten by later quantity changes.

use crate::model::record::{RecordId, StoreRecord};
use serde::{Deserialize, Serialize};

/// Catalog entry the cart resolves product ids against.
///
/// Products are reference data, not store records; the catalog is owned by
/// the cart service and never mutated by cart operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One cart line with snapshot pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Store-assigned stable identifier.
    pub id: RecordId,
    pub product_id: String,
    pub qty: u32,
    /// Catalog price captured when the line was created.
    pub price_at_add: f64,
}

impl LineItem {
    /// Creates a draft line. The `id` is assigned by the store on create.
    pub fn new(product_id: impl Into<String>, qty: u32, price_at_add: f64) -> Self {
        Self {
            id: 0,
            product_id: product_id.into(),
            qty,
            price_at_add,
        }
    }

    /// Line cost at the snapshot price.
    pub fn subtotal(&self) -> f64 {
        f64::from(self.qty) * self.price_at_add
    }
}

/// Partial-field update for [`LineItem`].
///
/// Only the quantity is patchable; product identity and the price snapshot
/// are fixed for the line lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemPatch {
    pub qty: Option<u32>,
}

impl StoreRecord for LineItem {
    type Patch = LineItemPatch;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn assign_record_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn merge(&mut self, patch: LineItemPatch) {
        if let Some(qty) = patch.qty {
            self.qty = qty;
        }
    }
}
