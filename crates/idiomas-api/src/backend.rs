//! Optional external backend (Supabase) adapter.
//!
//! Configured from `SUPABASE_URL` and `SUPABASE_ANON_KEY`. None of the theme or
//! review operations call it: the catalog is always served from memory. The
//! HTTP client is only built the first time a table request is made.

use std::sync::{Arc, OnceLock};

use crate::config::ApiConfig;

#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<Inner>,
}

struct Inner {
    url: Option<String>,
    key: Option<String>,
    http: OnceLock<reqwest::Client>,
}

impl BackendClient {
    pub fn new(url: Option<String>, key: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Self {
            inner: Arc::new(Inner {
                url: non_empty(url).map(|u| u.trim_end_matches('/').to_string()),
                key: non_empty(key),
                http: OnceLock::new(),
            }),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.supabase_url.clone(), config.supabase_anon_key.clone())
    }

    /// Adapter that is never configured
    pub fn disabled() -> Self {
        Self::new(None, None)
    }

    /// Whether both the URL and the key are present.
    pub fn configured(&self) -> bool {
        self.inner.url.is_some() && self.inner.key.is_some()
    }

    /// Start a REST query against `table`, or `None` when not configured.
    pub fn table(&self, name: &str) -> Option<reqwest::RequestBuilder> {
        let (url, key) = (self.inner.url.as_ref()?, self.inner.key.as_ref()?);
        let http = self.inner.http.get_or_init(reqwest::Client::new);

        Some(
            http.get(format!("{url}/rest/v1/{name}"))
                .header("apikey", key)
                .bearer_auth(key),
        )
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("url", &self.inner.url)
            .field("configured", &self.configured())
            .finish_non_exhaustive()
    }
}
