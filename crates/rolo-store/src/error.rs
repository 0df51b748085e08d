use rolo_types::ContactId;

/// Errors from contact store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No contact with this id is present.
    #[error("contact not found: {0}")]
    NotFound(ContactId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
