use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use idiomas_catalog::{Theme, Word};

use crate::{ApiState, error::ApiError};

/// Create the theme routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/themes", get(list_themes))
        .route("/themes/", get(list_themes))
        .route("/themes/{theme}/words", get(list_words_by_theme))
}

/// Get all themes with their word counts, sorted by name
async fn list_themes(State(state): State<ApiState>) -> Json<Vec<Theme>> {
    Json(state.catalog.themes().to_vec())
}

/// Get the words of a theme, matched ignoring case
async fn list_words_by_theme(
    State(state): State<ApiState>,
    Path(theme): Path<String>,
) -> Result<Json<Vec<Word>>, ApiError> {
    let words = state.catalog.words_by_theme(&theme)?;

    Ok(Json(words.into_iter().cloned().collect()))
}
