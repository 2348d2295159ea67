//! Tracing and logging configuration.
//!
//! Development gets pretty, human-readable output; production gets JSON lines
//! for log aggregation. `RUST_LOG` overrides the default filter in both modes
//! (e.g. `RUST_LOG=debug,tower_http=trace`).

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Default filter directives when `RUST_LOG` is unset
fn default_directives(env: &Environment) -> &'static str {
    if env.is_development() {
        "debug,tower_http=debug,hyper=info"
    } else {
        "info,tower_http=info,idiomas_api=info,idiomas_catalog=info"
    }
}

/// Initialize tracing/logging based on the environment
pub fn init_tracing(env: &Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = if env.is_development() {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .pretty()
            .with_filter(env_filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .flatten_event(true)
            .with_target(true)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
