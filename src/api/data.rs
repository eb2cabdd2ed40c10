use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{AppState, ParamsGymSearch};
use crate::services::{load_gym, load_gyms};

fn json_error(e: AppError) -> Response {
    (
        e.status_code(),
        Json(json!({
            "status": "error",
            "message": e.to_string()
        })),
    )
        .into_response()
}

pub async fn list_gyms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsGymSearch>,
) -> Response {
    match load_gyms(&state.query_cache, params.location.trim()).await {
        Ok(gyms) => Json(gyms).into_response(),
        Err(e) => json_error(e),
    }
}

pub async fn get_gym(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match load_gym(&state.query_cache, &id).await {
        Ok(gym) => Json(gym).into_response(),
        Err(e) => json_error(e),
    }
}

pub async fn get_profile(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.profile.clone())
}
