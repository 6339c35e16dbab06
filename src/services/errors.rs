use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The caller is not a member of the group the operation requires.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested resource was not found, or is not visible to the caller.
    #[error("not found")]
    NotFound,
    /// Caller input failed a declared constraint.
    #[error("{0}")]
    Validation(String),
    /// A conditional create found its precondition violated.
    #[error("already exists")]
    AlreadyExists,
    /// The document store or object store failed.
    #[error("upstream failure: {0}")]
    Upstream(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
