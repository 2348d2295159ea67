//! Prometheus metrics for monitoring API performance and health.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use idiomas_catalog::Catalog;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

/// Label shared by every request that matched no route
const UNMATCHED_PATH: &str = "unmatched";

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    // Configure histogram buckets for request duration (in seconds)
    let builder = builder.set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
        ],
    )?;

    let handle = builder.install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();

    let path = route_label(&req);

    gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone())
        .increment(1.0);

    let response: Response = next.run(req).await;

    gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone())
        .decrement(1.0);

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(duration);

    response
}

/// Route template used as the `path` label.
///
/// Theme names and unknown URLs come from clients, so only matched templates
/// like `/themes/{theme}/words` or the constant [`UNMATCHED_PATH`] are used.
fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_PATH, MatchedPath::as_str)
        .to_string()
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(
    axum::extract::State(handle): axum::extract::State<PrometheusHandle>,
) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record a scheduled review
pub fn record_review(grade: i64) {
    let grade = idiomas_srs::Grade::try_from(grade).map_or("unknown", |g| g.as_str());

    counter!("srs_reviews_total", "grade" => grade).increment(1);
}

/// Record the size of the loaded catalog
pub fn record_catalog(catalog: &Catalog) {
    gauge!("catalog_words").set(catalog.len() as f64);
    gauge!("catalog_themes").set(catalog.themes().len() as f64);
}
