// Infrastructure layer module
// Contains the database adapters implementing the domain repository
// contracts

pub mod repositories;
