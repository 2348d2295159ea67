use axum::{Router, middleware, routing::get};
use idiomas_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    idiomas_api::tracing::init_tracing(&config.env);

    let metrics_handle = idiomas_api::metrics::init_metrics()?;
    tracing::info!("Prometheus metrics exporter initialized");

    // The catalog is loaded here, once, before any request is served
    let state = ApiState::new(&config);

    let cors = idiomas_api::middleware::cors::create_cors_layer(config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Metrics endpoint carries its own state
    let metrics_app = Router::new()
        .route("/metrics", get(idiomas_api::metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = idiomas_api::router::router()
        .with_state(state)
        .merge(metrics_app)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(idiomas_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            idiomas_api::middleware::request_id::request_id_middleware,
        ));

    let app =
        idiomas_api::middleware::security_headers::apply_security_headers(app, config.env.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
