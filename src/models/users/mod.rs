pub mod users;

pub use users::{PaymentMethod, UpcomingBooking, UserProfile};
