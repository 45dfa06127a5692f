use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection};

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::repositories::customer_repository::{CustomerRepository, RepositoryError};

/// SQLite implementation of CustomerRepository
///
/// Runs every query on the connection handed in by the caller, so the
/// service layer decides the transaction boundaries.
#[derive(Debug, Default)]
pub struct SqliteCustomerRepository;

impl SqliteCustomerRepository {
    /// Creates a new SqliteCustomerRepository
    pub fn new() -> Self {
        Self
    }
}

/// Row shape of the `customers` table
#[derive(FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    created_dtime: DateTime<Utc>,
    modified_dtime: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::from_persistence(
            row.id,
            row.first_name,
            row.last_name,
            row.email,
            row.created_dtime,
            row.modified_dtime,
        )
    }
}

// The customers table has a single unique constraint (email), so any
// unique violation on a write is an email collision.
fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match err.as_database_error() {
        Some(db) if db.is_unique_violation() => RepositoryError::DuplicateEmail,
        _ => RepositoryError::Database(err),
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn exists_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE id = ?)",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE email = ?)",
        )
        .bind(email)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }

    async fn find_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, email, created_dtime, modified_dtime
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn find_all(
        &self,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, email, created_dtime, modified_dtime
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn create(
        &self,
        conn: &mut SqliteConnection,
        new: &NewCustomer,
    ) -> Result<Customer, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (first_name, last_name, email, created_dtime, modified_dtime)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(new.created_dtime)
        .bind(new.modified_dtime)
        .execute(&mut *conn)
        .await
        .map_err(map_write_error)?;

        Ok(Customer::from_persistence(
            result.last_insert_rowid(),
            new.first_name.clone(),
            new.last_name.clone(),
            new.email.clone(),
            new.created_dtime,
            new.modified_dtime,
        ))
    }

    async fn update(
        &self,
        conn: &mut SqliteConnection,
        customer: &Customer,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, email = ?, modified_dtime = ?
            WHERE id = ?
            "#,
        )
        .bind(customer.first_name())
        .bind(customer.last_name())
        .bind(customer.email())
        .bind(customer.modified_dtime())
        .bind(customer.id())
        .execute(&mut *conn)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Database(sqlx::Error::RowNotFound));
        }

        Ok(())
    }

    async fn delete_by_id(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Database(sqlx::Error::RowNotFound));
        }

        Ok(())
    }
}
