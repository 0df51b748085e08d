//! Indexed in-memory contact storage for Rolo.
//!
//! The store owns every [`Contact`](rolo_types::Contact) together with three
//! derived lookup structures used to answer substring searches:
//!
//! - name index: lowercase whitespace-delimited name token -> ids
//! - phone index: raw phone string -> ids
//! - email index: lowercase email -> ids
//!
//! # Design Rules
//!
//! 1. Every record in the primary map is reachable through all of its current
//!    index keys, and no index key points at an id absent from the primary map.
//! 2. The primary map and all indexes live behind one lock; each operation is
//!    a single critical section, so no caller observes a half-updated index.
//! 3. Updates unindex the stored values first, apply the patch, then reindex.
//! 4. Callers receive clones, never references into store state.
//! 5. Search and list results are ordered by [`ContactId`](rolo_types::ContactId).

pub mod audit;
pub mod error;
pub mod memory;
mod state;
pub mod traits;

pub use audit::{IndexAudit, IndexKind, IndexViolation};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryContactStore;
pub use traits::ContactStore;

#[cfg(test)]
mod proptests;
