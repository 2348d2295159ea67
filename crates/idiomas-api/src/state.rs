use std::sync::Arc;

use idiomas_catalog::Catalog;

use crate::{ApiConfig, backend::BackendClient, config::Environment, metrics};

#[derive(Clone, Debug)]
pub struct ApiState {
    /// Loaded once at startup, read-only afterwards
    pub catalog: Arc<Catalog>,
    pub backend: BackendClient,
    pub environment: Environment,
}

impl ApiState {
    /// Load the word catalog and wire up the optional backend adapter.
    ///
    /// Without `WORDS_PATH` the embedded dataset is served. A missing or
    /// malformed dataset yields an empty catalog instead of an error.
    pub fn new(config: &ApiConfig) -> Self {
        let catalog = match config.words_path() {
            Some(path) => idiomas_catalog::load_or_empty(path),
            None => idiomas_catalog::bundled_or_empty(),
        };
        metrics::record_catalog(&catalog);

        let backend = BackendClient::from_config(config);
        if backend.configured() {
            tracing::info!("External backend configured (unused by the word endpoints)");
        } else {
            tracing::debug!("External backend not configured");
        }

        Self {
            catalog: Arc::new(catalog),
            backend,
            environment: config.env.clone(),
        }
    }

    /// State over an already built catalog, without an external backend
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            backend: BackendClient::disabled(),
            environment: Environment::Development,
        }
    }
}
