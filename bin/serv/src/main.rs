use tower_http::trace::TraceLayer;
use trv_api::middleware::cors::create_cors_layer;
use trv_api::{ApiConfig, ApiState};
use trv_db::PgStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;
    trv_api::tracing::init_tracing(&config.env);

    // Connect and apply the bundled migrations
    let pool = trv_db::create_pool(&config.database_url).await?;
    trv_db::ensure_db_and_migrate(&config.database_url, &pool).await?;

    // Create the application router
    let state = ApiState::new(PgStore::new(pool), config.env);
    let app = trv_api::router::router()
        .with_state(state)
        .layer(create_cors_layer(config.allowed_origins))
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
