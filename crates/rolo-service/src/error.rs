use rolo_store::StoreError;
use thiserror::Error;

/// Errors reported back to callers of the contact service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A field is missing, blank, or malformed.
    #[error("{0}")]
    Validation(String),

    #[error("Contact ID is required for update")]
    MissingId,

    /// The id is unknown to the store or not a valid contact id.
    #[error("Contact with ID {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
