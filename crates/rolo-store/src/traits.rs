use rolo_types::{Contact, ContactId, ContactPatch, NewContact};

use crate::error::StoreResult;

/// Contact storage with derived search indexes.
///
/// All implementations must satisfy these invariants:
/// - Each operation is atomic with respect to every other operation.
/// - After every operation, each stored contact is reachable through its
///   current name tokens, phone string and lowercased email, and no index
///   entry refers to a contact that is not stored.
/// - Inputs are trusted: field format checks belong to the caller.
pub trait ContactStore: Send + Sync {
    /// Store a new contact under a freshly generated id.
    ///
    /// Duplicate phone numbers or emails are allowed.
    fn create(&self, fields: NewContact) -> Contact;

    /// Look up a contact by id.
    ///
    /// Returns `Err(StoreError::NotFound)` if the id is unknown.
    fn get(&self, id: &ContactId) -> StoreResult<Contact>;

    /// Apply a partial update and return the updated contact.
    ///
    /// Returns `Err(StoreError::NotFound)` if the id is unknown.
    fn update(&self, id: &ContactId, patch: &ContactPatch) -> StoreResult<Contact>;

    /// Remove a contact. Returns `true` if it existed.
    fn delete(&self, id: &ContactId) -> bool;

    /// Case-insensitive substring search over name tokens, phones and emails.
    ///
    /// A blank query returns no results.
    fn search(&self, query: &str) -> Vec<Contact>;

    /// Every stored contact.
    fn list(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delete several contacts and return how many existed.
    ///
    /// Each deletion is its own atomic step; unknown ids are skipped.
    fn delete_batch(&self, ids: &[ContactId]) -> usize {
        ids.iter().filter(|id| self.delete(id)).count()
    }
}
