use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use idiomas_catalog::CatalogError;
use idiomas_srs::SrsError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error("{0}")]
    NotFound(String),
    #[error("No words available")]
    NoDataAvailable,
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Json(rejection) => rejection.status(),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NoDataAvailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ThemeNotFound(_) => Self::NotFound("Theme not found or empty".to_string()),
            other => Self::Internal(other.into()),
        }
    }
}

impl From<SrsError> for ApiError {
    fn from(err: SrsError) -> Self {
        match err {
            SrsError::NoDataAvailable => Self::NoDataAvailable,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match &self {
            Self::Json(rejection) => rejection.body_text(),
            Self::Internal(e) => {
                tracing::error!("Unhandled error: {e:#}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
