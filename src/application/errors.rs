use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Errors raised by the customer service operations
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found with id: {0}")]
    NotFound(i64),

    #[error("Customer with email '{0}' already exists")]
    EmailAlreadyExists(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
