//! Customer CRUD handlers: list, create, read, update, delete.
//! No validation or transformation happens here beyond forcing new ids on create.

use crate::error::AppError;
use crate::extractors::{ApiJson, ApiPath};
use crate::model::Customer;
use crate::response::ErrorBody;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "customers",
    responses((status = 200, description = "All customers", body = Vec<Customer>))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = state.customers.customers().await?;
    Ok(Json(customers))
}

/// Any client-supplied id is discarded; the store assigns one.
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "customers",
    request_body = Customer,
    responses(
        (status = 200, description = "Created customer with its assigned id", body = Customer),
        (status = 400, description = "Malformed body or storage failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(mut customer): ApiJson<Customer>,
) -> Result<Json<Customer>, AppError> {
    customer.id = Customer::NEW_ID;
    let saved = state.customers.save_customer(customer).await?;
    tracing::info!(id = saved.id, "customer created");
    Ok(Json(saved))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = Customer),
        (status = 404, description = "No customer with this id", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Customer>, AppError> {
    state
        .customers
        .get_customer(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("customer with id: {} not found", id)))
}

/// The row to replace is chosen by the body's `id`; the path id is not consulted.
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id (not cross-checked against the body)")),
    request_body = Customer,
    responses(
        (status = 200, description = "Customer replaced"),
        (status = 400, description = "Malformed body or storage failure", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(_id): ApiPath<i32>,
    ApiJson(customer): ApiJson<Customer>,
) -> Result<StatusCode, AppError> {
    state.customers.save_customer(customer).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "Customer removed, or never existed"))
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, AppError> {
    state.customers.delete_customer(id).await?;
    Ok(StatusCode::OK)
}
