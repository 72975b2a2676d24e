use std::sync::Arc;

use tower_http::cors::CorsLayer;

use ecopay_backend::config::AppConfig;
use ecopay_backend::routes;
use ecopay_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = AppConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config));

    // CORS is wide open so the dashboard HTML can be hosted anywhere.
    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Ecopay backend listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
