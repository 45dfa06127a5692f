// Repository implementations (data access layer)

pub mod sqlite_customer_repository;

pub use sqlite_customer_repository::SqliteCustomerRepository;
