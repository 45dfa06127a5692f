use async_trait::async_trait;
use sqlx::SqliteConnection;
use thiserror::Error;

use crate::domain::customer::{Customer, NewCustomer};

/// Errors surfaced by the storage accessor
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("email already stored for another customer")]
    DuplicateEmail,
}

/// Repository trait for the customer table.
///
/// Defines the contract for persisting and retrieving customers. Every
/// method runs against a caller-supplied connection, so a service operation
/// can scope a sequence of calls inside one transaction.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Whether a row with this id exists
    async fn exists_by_id(&self, conn: &mut SqliteConnection, id: i64)
        -> Result<bool, RepositoryError>;

    /// Whether any row holds this email
    async fn exists_by_email(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<bool, RepositoryError>;

    /// Find a customer by its id
    async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<Customer>, RepositoryError>;

    /// Find all customers in primary-key order
    async fn find_all(&self, conn: &mut SqliteConnection)
        -> Result<Vec<Customer>, RepositoryError>;

    /// Insert a new customer and return the stored entity with its
    /// generated id. A unique violation on email maps to
    /// [`RepositoryError::DuplicateEmail`].
    async fn create(
        &self,
        conn: &mut SqliteConnection,
        new: &NewCustomer,
    ) -> Result<Customer, RepositoryError>;

    /// Overwrite the row matching the entity's id. A unique violation on
    /// email maps to [`RepositoryError::DuplicateEmail`].
    async fn update(
        &self,
        conn: &mut SqliteConnection,
        customer: &Customer,
    ) -> Result<(), RepositoryError>;

    /// Delete a customer row by id
    async fn delete_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<(), RepositoryError>;
}
