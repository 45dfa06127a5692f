use chrono::{DateTime, Utc};

/// Customer entity persisted in the `customers` table.
///
/// # Invariants
/// - `id` is assigned by the storage layer and immutable after creation
/// - `email` is unique across all customers
/// - `created_dtime` is set once at insertion and never modified
/// - `modified_dtime` is refreshed on every update
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    created_dtime: DateTime<Utc>,
    modified_dtime: DateTime<Utc>,
}

impl Customer {
    /// Overwrites the mutable fields and refreshes the modification
    /// timestamp. `id` and `created_dtime` are left untouched.
    pub fn apply_update(
        &mut self,
        first_name: String,
        last_name: String,
        email: String,
        now: DateTime<Utc>,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        self.modified_dtime = now;
    }

    // ===== Getters =====

    /// Returns the storage-assigned id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the customer's first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the customer's last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the customer's email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the creation timestamp
    pub fn created_dtime(&self) -> DateTime<Utc> {
        self.created_dtime
    }

    /// Returns the last-modification timestamp
    pub fn modified_dtime(&self) -> DateTime<Utc> {
        self.modified_dtime
    }

    /// Reconstructs a Customer from persistence layer data.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: i64,
        first_name: String,
        last_name: String,
        email: String,
        created_dtime: DateTime<Utc>,
        modified_dtime: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            created_dtime,
            modified_dtime,
        }
    }
}

/// Pre-insert shape of a customer: everything but the storage-assigned id
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_dtime: DateTime<Utc>,
    pub modified_dtime: DateTime<Utc>,
}

impl NewCustomer {
    /// Builds a customer ready for insertion, stamped from a single clock
    /// reading so both timestamps start out equal.
    pub fn new(first_name: String, last_name: String, email: String, now: DateTime<Utc>) -> Self {
        Self {
            first_name,
            last_name,
            email,
            created_dtime: now,
            modified_dtime: now,
        }
    }
}
