// src/api/mod.rs

pub mod data;
pub mod handler;

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::models::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handler::home_handler))
        .route("/gyms", get(handler::gym_list_handler))
        .route("/gym/{id}", get(handler::gym_details_handler))
        .route(
            "/booking/{gym_id}",
            get(handler::booking_form_handler).post(handler::booking_submit_handler),
        )
        .route("/profile", get(handler::profile_handler))
        .route("/api/gyms", get(data::list_gyms))
        .route("/api/gyms/{id}", get(data::get_gym))
        .route("/api/profile", get(data::get_profile))
        .route("/health", get(handler::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
