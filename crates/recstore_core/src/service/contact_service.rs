//! Contact use-case service.
//!
//! # Responsibility
//! - Provide contact create/get/update/delete/search entry points.
//! - Normalize search queries before scanning the store.
//!
//! # Invariants
//! - Name search is case-insensitive substring matching over the current
//!   store contents, in insertion order.
//! - A blank (empty or whitespace-only) query yields no results.

use crate::model::contact::{Contact, ContactPatch};
use crate::model::record::RecordId;
use crate::store::record_store::{FormatError, RecordStore};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Reduced projection returned by name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
}

/// Contact-book facade over a [`RecordStore`] of contacts.
pub struct ContactService {
    store: RecordStore<Contact>,
}

impl ContactService {
    /// Creates a service over an empty store.
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    /// Adds a contact and returns its assigned id.
    pub fn create_contact(&mut self, contact: Contact) -> RecordId {
        let id = self.store.create(contact).id;
        debug!("event=contact_created module=service status=ok id={id}");
        id
    }

    /// Gets one contact by id.
    pub fn get_contact(&self, id: RecordId) -> Option<&Contact> {
        self.store.get(id)
    }

    /// Shallow-merges a patch into the contact with `id`.
    ///
    /// Returns `None` when the id is unknown; absence is never raised.
    pub fn update_contact(&mut self, id: RecordId, patch: ContactPatch) -> Option<&Contact> {
        let updated = self.store.update(id, patch);
        if updated.is_some() {
            debug!("event=contact_updated module=service status=ok id={id}");
        }
        updated
    }

    /// Deletes the contact with `id`, reporting whether a removal occurred.
    pub fn delete_contact(&mut self, id: RecordId) -> bool {
        let removed = self.store.delete(id);
        debug!("event=contact_deleted module=service status=ok id={id} removed={removed}");
        removed
    }

    /// Case-insensitive name search returning reduced summaries.
    ///
    /// The query is whitespace-normalized and lowercased before matching;
    /// results come back in insertion order.
    pub fn find_by_name(&self, query: &str) -> Vec<ContactSummary> {
        let Some(needle) = normalize_query(query) else {
            return Vec::new();
        };
        self.store
            .query(|contact| contact.name.to_lowercase().contains(&needle))
            .map(|contact| ContactSummary {
                id: contact.id,
                name: contact.name.clone(),
                phone: contact.phone.clone(),
            })
            .collect()
    }

    /// Serializes the whole contact book to a JSON snapshot.
    pub fn export_json(&self) -> Result<String, FormatError> {
        self.store.export_json()
    }

    /// Replaces the contact book from a JSON snapshot, atomically.
    pub fn import_json(&mut self, text: &str) -> Result<usize, FormatError> {
        let count = self.store.import_json(text)?;
        debug!("event=contacts_imported module=service status=ok count={count}");
        Ok(count)
    }

    /// Read access to the underlying store, for derived views.
    pub fn store(&self) -> &RecordStore<Contact> {
        &self.store
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes a search query for matching.
///
/// Collapses whitespace runs, trims, and lowercases; returns `None` for
/// blank queries.
fn normalize_query(query: &str) -> Option<String> {
    let collapsed = WHITESPACE_RE.replace_all(query.trim(), " ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}
