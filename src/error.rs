use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid gym id: {0}")]
    InvalidGymId(String),

    #[error("Gym not found")]
    GymNotFound(u32),

    #[error("failed to encode cached data: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidGymId(_) => StatusCode::BAD_REQUEST,
            AppError::GymNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::GymNotFound(_) => views::render_not_found(),
            other => views::render_error(&other.to_string()),
        };
        (self.status_code(), Html(body)).into_response()
    }
}
