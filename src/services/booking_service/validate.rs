use chrono::{NaiveDate, NaiveTime};
use validator::Validate;

use crate::models::{BookingFieldErrors, BookingForm, SessionDuration};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: SessionDuration,
}

/// Required-field rules first, then the shape of whatever was filled in.
/// Any message blocks the submission.
pub fn validate_booking(form: &BookingForm) -> Result<ValidBooking, BookingFieldErrors> {
    let mut errors = BookingFieldErrors::default();

    if let Err(validation) = form.validate() {
        for (field, field_errors) in validation.field_errors() {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string());
            let field: &str = &field;
            match field {
                "date" => errors.date = message,
                "time" => errors.time = message,
                "duration" => errors.duration = message,
                _ => {}
            }
        }
    }

    let date = match NaiveDate::parse_from_str(&form.date, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.date.get_or_insert_with(|| "Enter a valid date".to_string());
            None
        }
    };

    let time = match NaiveTime::parse_from_str(&form.time, TIME_FORMAT) {
        Ok(time) => Some(time),
        Err(_) => {
            errors.time.get_or_insert_with(|| "Enter a valid time".to_string());
            None
        }
    };

    let duration = form
        .duration
        .parse::<u8>()
        .ok()
        .and_then(SessionDuration::from_hours);
    if duration.is_none() {
        errors
            .duration
            .get_or_insert_with(|| "Choose a duration from the list".to_string());
    }

    match (date, time, duration) {
        (Some(date), Some(time), Some(duration)) if errors.is_empty() => Ok(ValidBooking {
            date,
            time,
            duration,
        }),
        _ => Err(errors),
    }
}
