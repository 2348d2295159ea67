use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware,
};
use http_body_util::BodyExt;
use idiomas_api::{ApiState, config::Environment, router};
use idiomas_catalog::{Catalog, Word};
use serde::Deserialize;
use tower::ServiceExt;

/// The three-word catalog used across the integration tests
pub const SCENARIO_WORDS: &str = r#"[
    {"id":"w1","theme":"Food","en":"apple","es":"manzana","image":"🍎"},
    {"id":"w2","theme":"Food","en":"bread","es":"pan","example":"I eat bread / Como pan"},
    {"id":"w3","theme":"Colors","en":"red","es":"rojo"}
]"#;

/// Test state builder over an in-memory catalog
pub struct TestStateBuilder {
    words: Vec<Word>,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            words: idiomas_catalog::loader::parse_words(SCENARIO_WORDS)
                .expect("Scenario words should parse"),
        }
    }

    /// Start from an empty catalog
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    pub fn with_word(mut self, id: &str, theme: &str, en: &str, es: &str) -> Self {
        self.words.push(Word {
            id: id.to_string(),
            theme: theme.to_string(),
            term_source: en.to_string(),
            term_target: es.to_string(),
            image: None,
            example: None,
        });
        self
    }

    pub fn build(self) -> ApiState {
        ApiState::with_catalog(Catalog::new(self.words))
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Router wrapped in the same middleware stack as the server binary
pub fn app_with_middleware(state: ApiState, environment: Environment) -> Router {
    let app = router::router()
        .with_state(state)
        .layer(middleware::from_fn(idiomas_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            idiomas_api::middleware::request_id::request_id_middleware,
        ));

    idiomas_api::middleware::security_headers::apply_security_headers(app, environment)
}

/// Helper to make requests to the test app
#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Client over the bare router for the given state
    pub fn for_state(state: ApiState) -> Self {
        Self::new(router::router().with_state(state))
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        self.post_raw(uri, "application/json", json_body).await
    }

    /// Send a POST request with an arbitrary body and content type
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: String) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Error message from a `{"detail": ...}` body
    pub fn detail(&self) -> String {
        let body: serde_json::Value = self.json();
        body["detail"]
            .as_str()
            .expect("Error body should carry a detail string")
            .to_string()
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}
