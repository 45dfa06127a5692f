use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::api::validation;
use crate::application::dto::{CustomerRequest, CustomerResponse};
use crate::application::CustomerService;

/// Create a new customer
///
/// POST /customers
pub async fn create_customer(
    State(pool): State<SqlitePool>,
    Json(request): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    validation::validate(&request)?;

    let service = CustomerService::new(pool);
    let response = service.create(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a customer by id
///
/// GET /customers/:id
pub async fn get_customer(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let service = CustomerService::new(pool);
    let response = service.get_by_id(id).await?;

    Ok(Json(response))
}

/// Get all customers
///
/// GET /customers
pub async fn get_all_customers(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let service = CustomerService::new(pool);
    let responses = service.get_all().await?;

    Ok(Json(responses))
}

/// Update an existing customer
///
/// PUT /customers/:id
pub async fn update_customer(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    validation::validate(&request)?;

    let service = CustomerService::new(pool);
    let response = service.update(id, request).await?;

    Ok(Json(response))
}

/// Delete a customer
///
/// DELETE /customers/:id
pub async fn delete_customer(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let service = CustomerService::new(pool);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
