pub mod booking;
pub mod gym_details;
pub mod gyms;
pub mod home;
pub mod layout;
pub mod profile;

pub use booking::{render_booking_confirmation, render_booking_page};
pub use gym_details::render_gym_details;
pub use gyms::render_gym_list;
pub use home::render_home;
pub use layout::{render_error, render_not_found, render_page};
pub use profile::render_profile;
