//! Sales order domain model.
//!
//! # Responsibility
//! - Define the order record consumed by the report helpers.

use crate::model::record::{RecordId, StoreRecord};
use serde::{Deserialize, Serialize};

/// One sales order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned stable identifier.
    pub id: RecordId,
    pub product: String,
    pub qty: u32,
    pub unit_price: f64,
    pub region: String,
}

impl Order {
    /// Creates a draft order. The `id` is assigned by the store on create.
    pub fn new(
        product: impl Into<String>,
        qty: u32,
        unit_price: f64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            product: product.into(),
            qty,
            unit_price,
            region: region.into(),
        }
    }

    /// Line revenue, computed on demand.
    pub fn subtotal(&self) -> f64 {
        f64::from(self.qty) * self.unit_price
    }
}

/// Partial-field update for [`Order`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub product: Option<String>,
    pub qty: Option<u32>,
    pub unit_price: Option<f64>,
    pub region: Option<String>,
}

impl StoreRecord for Order {
    type Patch = OrderPatch;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn assign_record_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn merge(&mut self, patch: OrderPatch) {
        if let Some(product) = patch.product {
            self.product = product;
        }
        if let Some(qty) = patch.qty {
            self.qty = qty;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(region) = patch.region {
            self.region = region;
        }
    }
}
