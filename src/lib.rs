pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use api::routes;
pub use api::AppState;
pub use error::{MigrationError, StoreError, StoreResult};
pub use model::*;
pub use store::{MemoryStore, PostgresStore, Store};

/// Load configuration, migrate the database and serve until shutdown.
///
/// Migration failures abort before the listener is bound.
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    crate::logging::init();

    let config = crate::config::AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    let database_url = config.database_url();
    let postgres_store = crate::store::PostgresStore::new(&database_url, &config.database).await?;

    let schema_version = postgres_store.migrate().await?;
    log::info!("Database ready at schema version {}", schema_version);

    let state = AppState::new(
        Arc::new(postgres_store),
        Arc::new(crate::service::UuidGenerator),
        Arc::new(crate::logging::LogErrorLogger),
        config.build(),
    );
    let app = crate::api::routes::create_router().with_state(state);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("hashbang listening on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
