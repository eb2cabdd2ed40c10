pub mod gym;

pub use gym::{sized_image, BookingGym, Gym, GymSummary, Pricing};
