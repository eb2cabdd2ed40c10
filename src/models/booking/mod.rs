pub mod booking;

pub use booking::{
    BookingFieldErrors, BookingOutcome, BookingForm, BookingRequest, CardDetails, SessionDuration,
    SubmissionState,
};
