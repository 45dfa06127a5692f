use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;

/// Input shape for create and update.
///
/// Fields default to empty strings so an absent field fails validation with
/// the field's "required" message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Outward-facing projection of a customer record, built fresh from the
/// entity on every read
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_dtime: DateTime<Utc>,
    pub modified_dtime: DateTime<Utc>,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id(),
            first_name: customer.first_name().to_string(),
            last_name: customer.last_name().to_string(),
            email: customer.email().to_string(),
            created_dtime: customer.created_dtime(),
            modified_dtime: customer.modified_dtime(),
        }
    }
}
