// src/models/mod.rs

pub mod api;
pub mod app;
pub mod booking;
pub mod gym;
pub mod users;

pub use api::ParamsGymSearch;
pub use app::AppState;
pub use booking::{
    BookingFieldErrors, BookingOutcome, BookingForm, BookingRequest, CardDetails, SessionDuration,
    SubmissionState,
};
pub use gym::{sized_image, BookingGym, Gym, GymSummary, Pricing};
pub use users::{PaymentMethod, UpcomingBooking, UserProfile};
