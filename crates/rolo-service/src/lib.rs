//! Contact service for Rolo.
//!
//! Sits between request adapters and the [`ContactStore`](rolo_store::ContactStore):
//! checks field presence and format, turns raw id strings into
//! [`ContactId`](rolo_types::ContactId)s, and applies batches item by item.
//! The store itself never re-validates what this layer hands it.

pub mod error;
pub mod input;
pub mod service;
pub mod validate;

pub use error::{ServiceError, ServiceResult};
pub use input::{ContactDraft, ContactUpdate, PendingUpdate};
pub use service::ContactService;
