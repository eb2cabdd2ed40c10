use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use log::info;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{AppState, ParamsGymSearch};
use crate::services::{load_gym, load_gyms};
use crate::views;

pub async fn home_handler() -> Html<String> {
    Html(views::render_home())
}

pub async fn gym_list_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsGymSearch>,
) -> Html<String> {
    let location = params.location.trim();
    // An empty location leaves the query disabled
    let gyms = if location.is_empty() {
        None
    } else {
        info!("searching gyms near {}", location);
        Some(
            load_gyms(&state.query_cache, location)
                .await
                .map_err(|e| e.to_string()),
        )
    };
    Html(views::render_gym_list(location, gyms))
}

pub async fn gym_details_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let gym = load_gym(&state.query_cache, &id).await?;
    Ok(Html(views::render_gym_details(&gym)))
}

pub async fn profile_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::render_profile(&state.profile))
}
