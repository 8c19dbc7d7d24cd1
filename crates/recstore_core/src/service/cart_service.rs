//! Shopping-cart use-case service.
//!
//! # Responsibility
//! - Resolve product ids against a fixed catalog and maintain cart lines.
//! - Keep snapshot pricing: a line's price is captured at first add.
//!
//! # Invariants
//! - At most one line per product id; repeated adds merge quantities.
//! - Setting a quantity of zero removes the line.
//! - The catalog is reference data and is never mutated by cart calls.

use crate::model::cart::{LineItem, LineItemPatch, Product};
use crate::model::record::RecordId;
use crate::store::record_store::RecordStore;
use log::debug;

/// Cart facade over a [`RecordStore`] of line items.
pub struct CartService {
    catalog: Vec<Product>,
    lines: RecordStore<LineItem>,
}

impl CartService {
    /// Creates an empty cart over the given product catalog.
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            lines: RecordStore::new(),
        }
    }

    /// Adds `qty` of a product to the cart.
    ///
    /// # Contract
    /// - Unknown product ids return `false` and leave the cart unchanged.
    /// - An existing line for the product gains `qty`; its snapshot price
    ///   is kept from the first add.
    /// - A new line snapshots the current catalog price.
    pub fn add_item(&mut self, product_id: &str, qty: u32) -> bool {
        let Some(product) = self.catalog.iter().find(|p| p.id == product_id) else {
            debug!("event=cart_add module=service status=unknown_product product_id={product_id}");
            return false;
        };

        match self.find_line(product_id) {
            Some((line_id, current_qty)) => {
                let _ = self.lines.update(
                    line_id,
                    LineItemPatch {
                        qty: Some(current_qty + qty),
                    },
                );
            }
            None => {
                self.lines
                    .create(LineItem::new(product_id, qty, product.price));
            }
        }
        debug!("event=cart_add module=service status=ok product_id={product_id} qty={qty}");
        true
    }

    /// Removes the line for a product, reporting whether a removal occurred.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        match self.find_line(product_id) {
            Some((line_id, _)) => self.lines.delete(line_id),
            None => false,
        }
    }

    /// Sets the quantity for a product's line.
    ///
    /// # Contract
    /// - `qty == 0` removes the line.
    /// - Returns `false` when the product has no line in the cart.
    pub fn update_quantity(&mut self, product_id: &str, qty: u32) -> bool {
        let Some((line_id, _)) = self.find_line(product_id) else {
            return false;
        };
        if qty == 0 {
            self.lines.delete(line_id)
        } else {
            self.lines
                .update(line_id, LineItemPatch { qty: Some(qty) })
                .is_some()
        }
    }

    /// Cart total at snapshot prices, computed on demand.
    pub fn total(&self) -> f64 {
        crate::report::aggregate::sum_by(self.lines.records(), LineItem::subtotal)
    }

    /// Cart lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        self.lines.records()
    }

    /// Resolves a product from the catalog.
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == product_id)
    }

    fn find_line(&self, product_id: &str) -> Option<(RecordId, u32)> {
        self.lines
            .query(|line| line.product_id == product_id)
            .map(|line| (line.id, line.qty))
            .next()
    }
}
