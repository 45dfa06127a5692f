//! Customer Records API Library
//!
//! This library provides the core functionality for the customer records
//! service: the domain model, the transactional customer service, the
//! SQLite storage accessor, and the HTTP adapter.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
