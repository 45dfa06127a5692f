// Domain layer module exports
// Domain is independent of the HTTP adapter and holds the entity model
// plus the storage accessor contract

pub mod customer;
pub mod repositories;
