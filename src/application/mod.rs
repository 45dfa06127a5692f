// Application layer
// Transfer objects, the service error taxonomy, and the transactional
// customer service sitting between the HTTP adapter and the repositories

pub mod customer_service;
pub mod dto;
pub mod errors;

pub use customer_service::CustomerService;
