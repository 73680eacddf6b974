use axum::Router;
use loopexplorer::config::Config;
use loopexplorer::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loopexplorer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting LoopExplorer API server");
    tracing::info!(
        lat = config.loop_config.default_origin.lat,
        lng = config.loop_config.default_origin.lng,
        default_distance_km = config.loop_config.default_distance_km,
        tolerance_pct = config.loop_config.distance_tolerance_pct,
        "Configuration loaded successfully"
    );

    let state = Arc::new(AppState {
        loop_config: config.loop_config.clone(),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", loopexplorer::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
