//! Core domain logic for recstore.
//! This crate is the single source of truth for store invariants.

pub mod logging;
pub mod model;
pub mod report;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cart::{LineItem, LineItemPatch, Product};
pub use model::contact::{Address, Contact, ContactPatch};
pub use model::movie::{Movie, MoviePatch, RATING_MAX, RATING_MIN};
pub use model::order::{Order, OrderPatch};
pub use model::record::{RecordId, StoreRecord, ValidationError};
pub use report::aggregate::{
    distinct_by, group_sum, rank_groups, sum_by, sum_by_filtered, top_group,
};
pub use service::cart_service::CartService;
pub use service::contact_service::{ContactService, ContactSummary};
pub use store::record_store::{FormatError, RecordStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
