// Repository contracts (ports for the storage accessor)

pub mod customer_repository;

pub use customer_repository::{CustomerRepository, RepositoryError};
