use chrono::{NaiveDate, NaiveTime};

use crate::models::{PaymentMethod, UpcomingBooking, UserProfile};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

/// The signed-in account shown on the profile page. There is no account
/// store, so this is a literal.
pub fn mock_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        member_since: date(2023, 1, 1),
        upcoming_bookings: vec![
            UpcomingBooking {
                id: 1,
                gym: "FitZone".to_string(),
                date: date(2024, 3, 25),
                time: time(10, 0),
            },
            UpcomingBooking {
                id: 2,
                gym: "PowerHouse Gym".to_string(),
                date: date(2024, 3, 28),
                time: time(14, 0),
            },
        ],
        payment_methods: vec![
            PaymentMethod {
                id: 1,
                card_type: "Visa".to_string(),
                last4: "4242".to_string(),
            },
            PaymentMethod {
                id: 2,
                card_type: "Mastercard".to_string(),
                last4: "5555".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_times_use_twelve_hour_clock() {
        let profile = mock_profile();
        let times: Vec<String> = profile
            .upcoming_bookings
            .iter()
            .map(|b| b.display_time())
            .collect();
        assert_eq!(times, vec!["10:00 AM", "2:00 PM"]);
        assert_eq!(profile.member_since.to_string(), "2023-01-01");
    }
}
