use serde::Serialize;

use crate::application::dto::CustomerRequest;

/// Per-field validation messages, at most one per field.
///
/// Serializes in field declaration order with clean fields omitted, which
/// is exactly the `errors` object of the 400 response body.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<&'static str>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'static str>,
}

impl FieldErrors {
    fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// Validates a customer request before it reaches the service.
///
/// Checks run per field in declaration order; the first violated rule for a
/// field provides its message.
pub fn validate(request: &CustomerRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if request.first_name.trim().is_empty() {
        errors.first_name = Some("First name is required");
    }

    if request.last_name.trim().is_empty() {
        errors.last_name = Some("Last name is required");
    }

    if request.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(&request.email) {
        errors.email = Some("Email should be valid");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// One '@' with non-empty sides and no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
