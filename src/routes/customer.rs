//! Customer CRUD routes, mounted under `/api`.

use crate::error::AppError;
use crate::handlers::customer::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{http::Method, routing::get, Router};

/// Unsupported verbs on a known path get the 400 envelope instead of a bare 405.
async fn method_not_allowed(method: Method) -> AppError {
    AppError::BadRequest(format!("Request method '{}' not supported", method))
}

pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/customers",
            get(list).post(create).fallback(method_not_allowed),
        )
        .route(
            "/customers/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
