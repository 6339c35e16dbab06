//! Error conversion glue between the domain, form, repository and service
//! layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead of next to the types they convert.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::domain::types::TypeConstraintError;
    use crate::domain::upload::UploadRejection;
    use crate::forms::products::ProductFormError;
    use crate::repository::errors::RepositoryError;
    use crate::services::ServiceError;
    use crate::storage::StorageError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }

    impl From<ProductFormError> for ServiceError {
        fn from(val: ProductFormError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }

    impl From<UploadRejection> for ServiceError {
        fn from(val: UploadRejection) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }

    impl From<StorageError> for ServiceError {
        fn from(val: StorageError) -> Self {
            ServiceError::Upstream(val.to_string())
        }
    }

    impl From<RepositoryError> for ServiceError {
        fn from(val: RepositoryError) -> Self {
            match val {
                RepositoryError::NotFound => ServiceError::NotFound,
                RepositoryError::AlreadyExists => ServiceError::AlreadyExists,
                other => ServiceError::Upstream(other.to_string()),
            }
        }
    }
}
