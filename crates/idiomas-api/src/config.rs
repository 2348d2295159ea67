use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Deployment environment
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Word dataset location, the dataset compiled into the binary when unset
    pub words_path: Option<PathBuf>,
    /// Comma-separated list of allowed CORS origins
    pub allowed_origins: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Read the configuration from environment variables (`ENV`, `HOST`, `PORT`, ...).
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn words_path(&self) -> Option<&Path> {
        self.words_path.as_deref()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Allowed origins, or `None` when any origin is accepted.
    pub fn parsed_allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        (!origins.is_empty()).then_some(origins)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            host: default_host(),
            port: default_port(),
            words_path: None,
            allowed_origins: None,
            supabase_url: None,
            supabase_anon_key: None,
        }
    }
}
