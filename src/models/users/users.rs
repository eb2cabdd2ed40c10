use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpcomingBooking {
    pub id: u32,
    pub gym: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub id: u32,
    #[serde(rename = "type")]
    pub card_type: String,
    pub last4: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub member_since: NaiveDate,
    pub upcoming_bookings: Vec<UpcomingBooking>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl UpcomingBooking {
    /// Clock time as shown on the profile page, e.g. "2:00 PM"
    pub fn display_time(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}
