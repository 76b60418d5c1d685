use axum::{Router, routing::get};
use splitbase::api::handlers::api_routes;
use splitbase::api::openapi::ApiDoc;
use splitbase::config::CONFIG;
use splitbase::core::services::SplitbaseService;
use splitbase::infrastructure::cache::in_memory::InMemoryCache;
use splitbase::infrastructure::executor::mock::MockSettlementExecutor;
use splitbase::infrastructure::logging::in_memory::InMemoryLogging;
use splitbase::infrastructure::storage::in_memory::InMemoryStorage;
use splitbase::seed;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    // Initialize storage, logging, cache and the settlement executor
    let storage = InMemoryStorage::new();
    if CONFIG.seed_demo {
        seed::load(&storage).await?;
    }
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    let executor = MockSettlementExecutor::new();
    let service = Arc::new(SplitbaseService::new(storage, logging, cache, executor));

    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([http::header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
