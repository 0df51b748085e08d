//! Foundation types for the Rolo contact directory.
//!
//! Every other Rolo crate depends on `rolo-types`.
//!
//! # Key Types
//!
//! - [`ContactId`] — Opaque UUID identifier assigned at creation
//! - [`Contact`] — A single directory entry (name, phone, email)
//! - [`NewContact`] — An already-validated triple handed to the store
//! - [`ContactPatch`] — A partial field set for updates

pub mod contact;
pub mod error;
pub mod id;

pub use contact::{Contact, ContactPatch, NewContact};
pub use error::TypeError;
pub use id::ContactId;
