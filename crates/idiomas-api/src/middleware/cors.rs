use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the CORS layer for the API
///
/// # Arguments
/// * `allowed_origins` - Allowed origin URLs, or `None` to accept any origin
///
/// # Returns
/// A `CorsLayer` allowing the read and review methods (GET, POST, OPTIONS)
/// with `Content-Type` and `Accept` headers. The word endpoints carry no
/// credentials, so none are allowed.
pub fn create_cors_layer(allowed_origins: Option<Vec<String>>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    match allowed_origins {
        Some(origins) => {
            let origins = origins
                .into_iter()
                .filter_map(|s| match s.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %s, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect::<Vec<_>>();

            layer.allow_origin(AllowOrigin::list(origins))
        }
        None => layer.allow_origin(Any),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> Option<HeaderValue> {
        let app = Router::new().route("/themes/", get(|| async { "[]" })).layer(layer);

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/themes/")
                    .header("origin", origin)
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .cloned()
    }

    #[tokio::test]
    async fn test_any_origin_when_unconfigured() {
        let allowed = preflight(create_cors_layer(None), "https://anywhere.example").await;
        assert_eq!(allowed.unwrap(), "*");
    }

    #[tokio::test]
    async fn test_listed_origins_only() {
        let origins = Some(vec!["https://app.example".to_string()]);

        let allowed = preflight(create_cors_layer(origins.clone()), "https://app.example").await;
        assert_eq!(allowed.unwrap(), "https://app.example");

        let denied = preflight(create_cors_layer(origins), "https://evil.example").await;
        assert!(denied.is_none());
    }
}
