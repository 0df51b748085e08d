use std::sync::{Mutex, MutexGuard};

use rolo_types::{Contact, ContactId, ContactPatch, NewContact};
use tracing::debug;

use crate::audit::IndexAudit;
use crate::error::{StoreError, StoreResult};
use crate::state::StoreState;
use crate::traits::ContactStore;

/// In-memory contact store with name, phone and email indexes.
///
/// The primary map and all three indexes sit behind a single `Mutex`; reads
/// and writes serialize against each other so every operation sees and leaves
/// a consistent set of indexes. Contacts are cloned on the way in and out.
pub struct InMemoryContactStore {
    state: Mutex<StoreState>,
}

impl InMemoryContactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Check every index against the primary map.
    pub fn audit(&self) -> IndexAudit {
        self.lock().audit()
    }

    /// Remove every contact and index entry.
    pub fn clear(&self) {
        self.lock().clear();
        debug!("contact store cleared");
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("lock poisoned")
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for InMemoryContactStore {
    fn create(&self, fields: NewContact) -> Contact {
        let contact = Contact::new(fields);
        let mut state = self.lock();
        state.insert(contact.clone());
        debug!(id = %contact.id, total = state.len(), "contact created");
        contact
    }

    fn get(&self, id: &ContactId) -> StoreResult<Contact> {
        self.lock()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    fn update(&self, id: &ContactId, patch: &ContactPatch) -> StoreResult<Contact> {
        let mut state = self.lock();
        let updated = state
            .modify(id, |contact| patch.apply_to(contact))
            .cloned()
            .ok_or(StoreError::NotFound(*id))?;
        debug!(%id, "contact updated");
        Ok(updated)
    }

    fn delete(&self, id: &ContactId) -> bool {
        let mut state = self.lock();
        let removed = state.remove(id).is_some();
        if removed {
            debug!(%id, total = state.len(), "contact deleted");
        }
        removed
    }

    fn search(&self, query: &str) -> Vec<Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let state = self.lock();
        let ids = state.matching_ids(&needle);
        let results = state.resolve(&ids);
        debug!(query = %needle, hits = results.len(), "contact search");
        results
    }

    fn list(&self) -> Vec<Contact> {
        let state = self.lock();
        let ids = state.sorted_ids();
        state.resolve(&ids)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

impl std::fmt::Debug for InMemoryContactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryContactStore")
            .field("contact_count", &count)
            .finish()
    }
}
