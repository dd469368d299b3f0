//! Axum route handlers for the recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::recommendation::lookup::{recommend, Recommendation};
use crate::recommendation::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub rekomendasi: String,
}

#[derive(Debug, Serialize)]
pub struct NarrationResponse {
    pub rekomendasi: String,
    pub narasi: String,
}

/// POST /rekomendasi-mobil
///
/// Validates the profile and returns the canned recommendation.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let (_, recommendation) = resolve(&state, payload)?;

    Ok(Json(RecommendationResponse {
        rekomendasi: recommendation.text,
    }))
}

/// POST /rekomendasi-mobil/narasi
///
/// Same lookup as `handle_recommend`, then asks the narrator for a friendlier
/// write-up of the result.
pub async fn handle_narrate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<NarrationResponse>, AppError> {
    let (profile, recommendation) = resolve(&state, payload)?;

    let narrator = state
        .narrator
        .as_ref()
        .ok_or(AppError::NarrationUnavailable)?;
    let narasi = narrator.narrate(&profile, &recommendation.text).await?;

    Ok(Json(NarrationResponse {
        rekomendasi: recommendation.text,
        narasi,
    }))
}

/// OPTIONS preflight. CORS headers come from the router layers.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

fn resolve(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(Profile, Recommendation), AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Fault(rejection.body_text()))?;
    let profile = Profile::from_json(&body)?;
    let recommendation = recommend(&state.catalog, &profile);

    debug!(
        manufacturer = %profile.manufacturer,
        style = %profile.style,
        resolution = ?recommendation.resolution,
        "Resolved recommendation"
    );

    Ok((profile, recommendation))
}
