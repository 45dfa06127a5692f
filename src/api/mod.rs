// API layer module (adapters for controllers)
// Validates input, invokes the service, and maps results and errors onto
// HTTP responses

pub mod errors;
pub mod handlers;
pub mod validation;
