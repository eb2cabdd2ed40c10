pub mod booking;
pub mod health;
pub mod pages;

pub use booking::{booking_form_handler, booking_submit_handler};
pub use health::health_check;
pub use pages::{gym_details_handler, gym_list_handler, home_handler, profile_handler};
