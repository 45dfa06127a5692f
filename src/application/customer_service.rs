use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::application::dto::{CustomerRequest, CustomerResponse};
use crate::application::errors::CustomerError;
use crate::domain::customer::NewCustomer;
use crate::domain::repositories::{CustomerRepository, RepositoryError};
use crate::infrastructure::repositories::SqliteCustomerRepository;

/// Orchestrates the customer CRUD operations.
///
/// Each operation runs as one scoped transaction: begin, perform the
/// read/write sequence through the repository, commit on success. An early
/// return drops the transaction, which rolls it back.
pub struct CustomerService {
    pool: SqlitePool,
    repo: SqliteCustomerRepository,
}

impl CustomerService {
    /// Creates a service over the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            repo: SqliteCustomerRepository::new(),
        }
    }

    /// Create a customer from the request, failing if the email is taken.
    /// The storage layer assigns the id; both timestamps are stamped here
    /// from one clock reading.
    pub async fn create(
        &self,
        request: CustomerRequest,
    ) -> Result<CustomerResponse, CustomerError> {
        debug!("Creating customer with email: {}", request.email);

        let mut tx = self.pool.begin().await.map_err(RepositoryError::Database)?;

        if self.repo.exists_by_email(&mut tx, &request.email).await? {
            return Err(CustomerError::EmailAlreadyExists(request.email));
        }

        let new = NewCustomer::new(
            request.first_name,
            request.last_name,
            request.email,
            Utc::now(),
        );

        // The pre-check above can lose a race; the unique constraint on the
        // table is authoritative, so a violation here still maps to the
        // conflict error.
        let saved = self.repo.create(&mut tx, &new).await.map_err(|e| match e {
            RepositoryError::DuplicateEmail => CustomerError::EmailAlreadyExists(new.email.clone()),
            other => CustomerError::Repository(other),
        })?;

        tx.commit().await.map_err(RepositoryError::Database)?;

        info!("Customer created with id: {}", saved.id());
        Ok(CustomerResponse::from(&saved))
    }

    /// Fetch a single customer by id
    pub async fn get_by_id(&self, id: i64) -> Result<CustomerResponse, CustomerError> {
        debug!("Fetching customer with id: {}", id);

        let mut tx = self.pool.begin().await.map_err(RepositoryError::Database)?;

        let customer = self
            .repo
            .find_by_id(&mut tx, id)
            .await?
            .ok_or(CustomerError::NotFound(id))?;

        tx.commit().await.map_err(RepositoryError::Database)?;

        Ok(CustomerResponse::from(&customer))
    }

    /// Fetch every stored customer in storage iteration order
    pub async fn get_all(&self) -> Result<Vec<CustomerResponse>, CustomerError> {
        debug!("Fetching all customers");

        let mut tx = self.pool.begin().await.map_err(RepositoryError::Database)?;

        let customers = self.repo.find_all(&mut tx).await?;

        tx.commit().await.map_err(RepositoryError::Database)?;

        Ok(customers.iter().map(CustomerResponse::from).collect())
    }

    /// Overwrite the mutable fields of an existing customer. The id and
    /// creation timestamp are immutable; the modification timestamp is
    /// refreshed as part of the write.
    pub async fn update(
        &self,
        id: i64,
        request: CustomerRequest,
    ) -> Result<CustomerResponse, CustomerError> {
        debug!("Updating customer with id: {}", id);

        let mut tx = self.pool.begin().await.map_err(RepositoryError::Database)?;

        let mut customer = self
            .repo
            .find_by_id(&mut tx, id)
            .await?
            .ok_or(CustomerError::NotFound(id))?;

        // Skipped when the submitted email equals the stored one, so an
        // update that keeps the email never collides with its own row.
        if customer.email() != request.email
            && self.repo.exists_by_email(&mut tx, &request.email).await?
        {
            return Err(CustomerError::EmailAlreadyExists(request.email));
        }

        customer.apply_update(
            request.first_name,
            request.last_name,
            request.email,
            Utc::now(),
        );

        self.repo
            .update(&mut tx, &customer)
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateEmail => {
                    CustomerError::EmailAlreadyExists(customer.email().to_string())
                }
                other => CustomerError::Repository(other),
            })?;

        tx.commit().await.map_err(RepositoryError::Database)?;

        info!("Customer updated with id: {}", customer.id());
        Ok(CustomerResponse::from(&customer))
    }

    /// Remove a customer row for good
    pub async fn delete(&self, id: i64) -> Result<(), CustomerError> {
        debug!("Deleting customer with id: {}", id);

        let mut tx = self.pool.begin().await.map_err(RepositoryError::Database)?;

        if !self.repo.exists_by_id(&mut tx, id).await? {
            return Err(CustomerError::NotFound(id));
        }

        self.repo.delete_by_id(&mut tx, id).await?;

        tx.commit().await.map_err(RepositoryError::Database)?;

        info!("Customer deleted with id: {}", id);
        Ok(())
    }
}
