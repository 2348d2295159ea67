use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use idiomas_catalog::Catalog;

use crate::{ApiState, error::ApiError, metrics, validation};

use super::model::{ReviewRequest, ReviewResponse};

/// Create the review routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/srs/review", post(submit_review))
}

async fn submit_review(
    State(state): State<ApiState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let Json(payload) = payload?;

    // Out-of-range grades never reach the scheduler
    validation::validate_payload(&payload)?;

    let grade = payload.grade;
    let response = review(&state.catalog, payload)?;
    metrics::record_review(grade);

    Ok(Json(response))
}

/// Schedule the reviewed card and draw the next one from the whole catalog.
///
/// Kept synchronous so the thread-local RNG never lives across an await.
fn review(catalog: &Catalog, payload: ReviewRequest) -> Result<ReviewResponse, ApiError> {
    let scheduled = idiomas_srs::schedule(catalog.words(), payload.grade, &mut rand::thread_rng())?;

    tracing::debug!(
        word_id = %payload.word_id,
        grade = payload.grade,
        next_due_seconds = scheduled.next_due_seconds,
        next_word_id = %scheduled.next.id,
        "Review scheduled"
    );

    Ok(ReviewResponse {
        word_id: payload.word_id,
        next_due_seconds: scheduled.next_due_seconds,
        next_word: scheduled.next.clone(),
    })
}
