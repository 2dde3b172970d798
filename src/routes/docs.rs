//! OpenAPI document for the customer routes.

use crate::handlers::customer;
use crate::model::Customer;
use crate::response::ErrorBody;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        customer::list,
        customer::create,
        customer::read,
        customer::update,
        customer::delete
    ),
    components(schemas(Customer, ErrorBody)),
    tags((name = "customers", description = "Customer CRUD"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
