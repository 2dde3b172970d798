//! Customer CRM server: loads config, prepares the database, serves `/api/customers`.

use customer_crm::{app, apply_migrations, connect, init_tracing, AppConfig, AppState, PgCustomerStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(&config.logging)?;

    let pool = connect(&config.database).await?;
    apply_migrations(&pool).await?;
    let state = AppState::new(Arc::new(PgCustomerStore::new(pool)));

    let router = app(state, &config.server);
    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
