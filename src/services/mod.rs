pub mod booking_service;
pub mod gym_service;
pub mod payment_service;
pub mod profile_service;

pub use booking_service::{submit_booking, validate_booking, ValidBooking};
pub use gym_service::{
    catalog, fetch_booking_gym, fetch_gym_details, fetch_gyms, load_booking_gym, load_gym,
    load_gyms, parse_gym_id,
};
pub use payment_service::{
    intent_id_from_secret, PaymentClient, PaymentError, PaymentIntent, PAYMENT_FALLBACK_MESSAGE,
};
pub use profile_service::mock_profile;
