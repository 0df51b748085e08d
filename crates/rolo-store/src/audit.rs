//! Index consistency reports.
//!
//! An [`IndexAudit`] is computed by rebuilding the expected index contents
//! from the primary map and comparing them to the live indexes. A consistent
//! store always produces an audit with no violations.

use std::fmt;

use rolo_types::ContactId;

/// Which derived index an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Name,
    Phone,
    Email,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
            Self::Email => write!(f, "email"),
        }
    }
}

/// A single disagreement between an index and the primary map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexViolation {
    /// The index maps `key` to `id`, but `id` is not stored or its current
    /// values no longer produce `key`.
    Dangling {
        index: IndexKind,
        key: String,
        id: ContactId,
    },
    /// A stored contact produces `key` but the index does not map it to `id`.
    Missing {
        index: IndexKind,
        key: String,
        id: ContactId,
    },
    /// A key remains in the index with no ids attached.
    EmptyKey { index: IndexKind, key: String },
}

impl fmt::Display for IndexViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dangling { index, key, id } => {
                write!(f, "{index} index: '{key}' points at {id} which does not own it")
            }
            Self::Missing { index, key, id } => {
                write!(f, "{index} index: '{key}' is missing {id}")
            }
            Self::EmptyKey { index, key } => write!(f, "{index} index: '{key}' has no ids"),
        }
    }
}

/// Snapshot of index health taken under the store lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexAudit {
    /// Number of contacts in the primary map.
    pub contacts: usize,
    /// Distinct name tokens.
    pub name_keys: usize,
    /// Distinct phone strings.
    pub phone_keys: usize,
    /// Distinct lowercased emails.
    pub email_keys: usize,
    /// Every inconsistency found, primary-map order for `Missing` entries.
    pub violations: Vec<IndexViolation>,
}

impl IndexAudit {
    /// Returns `true` if no violations were found.
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }
}
