pub mod submit;
pub mod validate;

pub use submit::submit_booking;
pub use validate::{validate_booking, ValidBooking};
