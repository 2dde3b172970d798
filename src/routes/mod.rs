//! Router assembly.

mod common;
mod customer;
mod docs;

pub use common::{common_routes, common_routes_with_ready};
pub use customer::customer_routes;
pub use docs::{docs_routes, ApiDoc};

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, customer routes under `/api`.
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .nest("/api", customer_routes(state))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
