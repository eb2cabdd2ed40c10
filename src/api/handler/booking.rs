use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{
    AppState, BookingFieldErrors, BookingForm, BookingOutcome, SubmissionState,
};
use crate::services::{load_booking_gym, submit_booking};
use crate::views;

pub async fn booking_form_handler(
    State(state): State<Arc<AppState>>,
    Path(gym_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let gym = load_booking_gym(&state.query_cache, &gym_id).await?;
    Ok(Html(views::render_booking_page(
        &gym,
        &BookingForm::default(),
        &BookingFieldErrors::default(),
        &SubmissionState::Idle,
    )))
}

pub async fn booking_submit_handler(
    State(state): State<Arc<AppState>>,
    Path(gym_id): Path<String>,
    Form(form): Form<BookingForm>,
) -> Result<Response, AppError> {
    let gym = load_booking_gym(&state.query_cache, &gym_id).await?;

    let response = match submit_booking(&state.payments, &gym, form.clone()).await {
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::render_booking_page(
                &gym,
                &form,
                &errors,
                &SubmissionState::Idle,
            )),
        )
            .into_response(),
        Ok(BookingOutcome::Confirmed(request)) => {
            Html(views::render_booking_confirmation(&request)).into_response()
        }
        Ok(BookingOutcome::Failed(message)) => (
            StatusCode::PAYMENT_REQUIRED,
            Html(views::render_booking_page(
                &gym,
                &form,
                &BookingFieldErrors::default(),
                &SubmissionState::Failed(message),
            )),
        )
            .into_response(),
    };

    Ok(response)
}
