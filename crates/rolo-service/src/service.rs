use std::sync::Arc;

use rolo_store::{ContactStore, StoreError};
use rolo_types::{Contact, ContactId};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::input::{ContactDraft, ContactUpdate, PendingUpdate};
use crate::validate::{validate_draft, validate_update_fields};

/// Batch-oriented contact operations with input validation.
///
/// Batches are applied item by item. When an item fails, the items before
/// it stay applied and the error is returned for the failing one.
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn ContactStore> {
        &self.store
    }

    /// Validate and create each draft in order.
    pub fn create_contacts(&self, drafts: &[ContactDraft]) -> ServiceResult<Vec<Contact>> {
        self.create_each(drafts.iter().cloned().map(Ok))
    }

    /// Decode, validate and create each JSON item in order.
    pub fn create_contacts_json(&self, items: Vec<Value>) -> ServiceResult<Vec<Contact>> {
        self.create_each(items.into_iter().map(ContactDraft::from_json))
    }

    /// Validate and apply each update in order.
    pub fn update_contacts(&self, updates: &[ContactUpdate]) -> ServiceResult<Vec<Contact>> {
        let mut updated = Vec::with_capacity(updates.len());
        for update in updates {
            let raw_id = update.id.as_deref().ok_or(ServiceError::MissingId)?;
            let id = self.resolve_existing(raw_id)?;
            updated.push(self.apply_update(&id, update)?);
        }
        info!(count = updated.len(), "contacts updated");
        Ok(updated)
    }

    /// Decode and apply each JSON update item in order.
    ///
    /// Per item: the id must be present, then it must exist, then the
    /// remaining keys are checked.
    pub fn update_contacts_json(&self, items: Vec<Value>) -> ServiceResult<Vec<Contact>> {
        let mut updated = Vec::with_capacity(items.len());
        for item in items {
            let pending = PendingUpdate::from_json(item)?;
            let id = self.resolve_existing(pending.id())?;
            let update = pending.into_update()?;
            updated.push(self.apply_update(&id, &update)?);
        }
        info!(count = updated.len(), "contacts updated");
        Ok(updated)
    }

    /// Delete every listed id and return how many existed.
    ///
    /// Ids that are unknown or not well-formed are skipped.
    pub fn delete_contacts<S: AsRef<str>>(&self, ids: &[S]) -> usize {
        let parsed: Vec<ContactId> = ids
            .iter()
            .filter_map(|raw| ContactId::parse(raw.as_ref()).ok())
            .collect();
        let deleted = self.store.delete_batch(&parsed);
        info!(requested = ids.len(), deleted, "contacts deleted");
        deleted
    }

    /// Substring search; a blank query yields nothing.
    pub fn search_contacts(&self, query: &str) -> Vec<Contact> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let results = self.store.search(query);
        debug!(query, hits = results.len(), "contact search");
        results
    }

    /// Fetch one contact by its string id.
    pub fn get_contact(&self, raw_id: &str) -> ServiceResult<Contact> {
        let id = ContactId::parse(raw_id)
            .map_err(|_| ServiceError::NotFound(raw_id.to_string()))?;
        self.store
            .get(&id)
            .map_err(|StoreError::NotFound(_)| ServiceError::NotFound(raw_id.to_string()))
    }

    /// Every stored contact, ordered by id.
    pub fn list_contacts(&self) -> Vec<Contact> {
        self.store.list()
    }

    fn create_each<I>(&self, drafts: I) -> ServiceResult<Vec<Contact>>
    where
        I: IntoIterator<Item = ServiceResult<ContactDraft>>,
    {
        let mut created = Vec::new();
        for draft in drafts {
            let fields = validate_draft(&draft?)?;
            created.push(self.store.create(fields));
        }
        info!(count = created.len(), "contacts created");
        Ok(created)
    }

    fn apply_update(&self, id: &ContactId, update: &ContactUpdate) -> ServiceResult<Contact> {
        let patch = validate_update_fields(update)?;
        Ok(self.store.update(id, &patch)?)
    }

    fn resolve_existing(&self, raw_id: &str) -> ServiceResult<ContactId> {
        self.get_contact(raw_id).map(|contact| contact.id)
    }
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService")
            .field("contact_count", &self.store.len())
            .finish()
    }
}
