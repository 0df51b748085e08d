use std::collections::{BTreeSet, HashMap};

use rolo_types::{Contact, ContactId};

use crate::audit::{IndexAudit, IndexKind, IndexViolation};

type IdSet = BTreeSet<ContactId>;

/// Lowercase whitespace-delimited tokens of a name.
pub(crate) fn name_tokens(name: &str) -> impl Iterator<Item = String> + '_ {
    name.split_whitespace().map(str::to_lowercase)
}

/// Index key for an email address.
pub(crate) fn email_key(email: &str) -> String {
    email.to_lowercase()
}

/// The primary map plus every derived index.
///
/// Only ever touched while holding the store lock. Fields are private to this
/// module so index maintenance cannot be bypassed.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    primary: HashMap<ContactId, Contact>,
    name_index: HashMap<String, IdSet>,
    phone_index: HashMap<String, IdSet>,
    email_index: HashMap<String, IdSet>,
}

impl StoreState {
    pub(crate) fn len(&self) -> usize {
        self.primary.len()
    }

    pub(crate) fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.primary.get(id)
    }

    pub(crate) fn insert(&mut self, contact: Contact) {
        Self::index(
            &mut self.name_index,
            &mut self.phone_index,
            &mut self.email_index,
            &contact,
        );
        self.primary.insert(contact.id, contact);
    }

    /// Unindex the stored values, let `mutate` change the record, reindex.
    ///
    /// Returns `None` if the id is unknown.
    pub(crate) fn modify<F>(&mut self, id: &ContactId, mutate: F) -> Option<&Contact>
    where
        F: FnOnce(&mut Contact),
    {
        let contact = self.primary.get_mut(id)?;
        Self::unindex(
            &mut self.name_index,
            &mut self.phone_index,
            &mut self.email_index,
            contact,
        );
        mutate(&mut *contact);
        // The id is part of every index entry; it must survive the mutation.
        debug_assert_eq!(&contact.id, id);
        Self::index(
            &mut self.name_index,
            &mut self.phone_index,
            &mut self.email_index,
            contact,
        );
        Some(&*contact)
    }

    pub(crate) fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        let contact = self.primary.remove(id)?;
        Self::unindex(
            &mut self.name_index,
            &mut self.phone_index,
            &mut self.email_index,
            &contact,
        );
        Some(contact)
    }

    pub(crate) fn clear(&mut self) {
        self.primary.clear();
        self.name_index.clear();
        self.phone_index.clear();
        self.email_index.clear();
    }

    /// Ids of every contact with a name token, phone or email containing
    /// `needle`. `needle` must already be lowercase.
    pub(crate) fn matching_ids(&self, needle: &str) -> IdSet {
        let mut ids = IdSet::new();
        for index in [&self.name_index, &self.phone_index, &self.email_index] {
            for (key, owners) in index {
                if key.contains(needle) {
                    ids.extend(owners.iter().copied());
                }
            }
        }
        ids
    }

    /// Copies of the contacts for `ids`, in iteration order, skipping ids no
    /// longer stored.
    pub(crate) fn resolve<'i>(&self, ids: impl IntoIterator<Item = &'i ContactId>) -> Vec<Contact> {
        ids.into_iter()
            .filter_map(|id| self.primary.get(id))
            .cloned()
            .collect()
    }

    pub(crate) fn sorted_ids(&self) -> Vec<ContactId> {
        let mut ids: Vec<ContactId> = self.primary.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Compare every index against what the primary map implies.
    pub(crate) fn audit(&self) -> IndexAudit {
        let mut violations = Vec::new();

        for (kind, index) in self.indexes() {
            for (key, owners) in index {
                if owners.is_empty() {
                    violations.push(IndexViolation::EmptyKey {
                        index: kind,
                        key: key.clone(),
                    });
                }
                for id in owners {
                    let expected = self
                        .primary
                        .get(id)
                        .is_some_and(|contact| Self::keys_for(kind, contact).contains(key));
                    if !expected {
                        violations.push(IndexViolation::Dangling {
                            index: kind,
                            key: key.clone(),
                            id: *id,
                        });
                    }
                }
            }
        }

        for id in self.sorted_ids() {
            let contact = &self.primary[&id];
            for (kind, index) in self.indexes() {
                for key in Self::keys_for(kind, contact) {
                    let present = index.get(&key).is_some_and(|owners| owners.contains(&id));
                    if !present {
                        violations.push(IndexViolation::Missing {
                            index: kind,
                            key,
                            id,
                        });
                    }
                }
            }
        }

        IndexAudit {
            contacts: self.primary.len(),
            name_keys: self.name_index.len(),
            phone_keys: self.phone_index.len(),
            email_keys: self.email_index.len(),
            violations,
        }
    }

    fn indexes(&self) -> [(IndexKind, &HashMap<String, IdSet>); 3] {
        [
            (IndexKind::Name, &self.name_index),
            (IndexKind::Phone, &self.phone_index),
            (IndexKind::Email, &self.email_index),
        ]
    }

    fn keys_for(kind: IndexKind, contact: &Contact) -> Vec<String> {
        match kind {
            IndexKind::Name => name_tokens(&contact.name).collect(),
            IndexKind::Phone => vec![contact.phone.clone()],
            IndexKind::Email => vec![email_key(&contact.email)],
        }
    }

    // Associated functions over disjoint fields so callers can hold a
    // mutable borrow of a primary-map entry at the same time.

    fn index(
        name_index: &mut HashMap<String, IdSet>,
        phone_index: &mut HashMap<String, IdSet>,
        email_index: &mut HashMap<String, IdSet>,
        contact: &Contact,
    ) {
        for token in name_tokens(&contact.name) {
            name_index.entry(token).or_default().insert(contact.id);
        }
        phone_index
            .entry(contact.phone.clone())
            .or_default()
            .insert(contact.id);
        email_index
            .entry(email_key(&contact.email))
            .or_default()
            .insert(contact.id);
    }

    fn unindex(
        name_index: &mut HashMap<String, IdSet>,
        phone_index: &mut HashMap<String, IdSet>,
        email_index: &mut HashMap<String, IdSet>,
        contact: &Contact,
    ) {
        for token in name_tokens(&contact.name) {
            Self::detach(name_index, &token, &contact.id);
        }
        Self::detach(phone_index, &contact.phone, &contact.id);
        Self::detach(email_index, &email_key(&contact.email), &contact.id);
    }

    /// Drop `id` from the set under `key`, removing the key once empty.
    fn detach(index: &mut HashMap<String, IdSet>, key: &str, id: &ContactId) {
        if let Some(owners) = index.get_mut(key) {
            owners.remove(id);
            if owners.is_empty() {
                index.remove(key);
            }
        }
    }
}
