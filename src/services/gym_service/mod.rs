pub mod catalog;
pub mod fetch;

pub use catalog::{catalog, GYM_PHOTO};
pub use fetch::{
    fetch_booking_gym, fetch_gym_details, fetch_gyms, load_booking_gym, load_gym, load_gyms,
    parse_gym_id,
};
