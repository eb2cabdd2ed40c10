use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use crate::models::BookingGym;

/// Session lengths offered by the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SessionDuration {
    OneHour,
    TwoHours,
    ThreeHours,
}

impl SessionDuration {
    pub const ALL: [SessionDuration; 3] = [
        SessionDuration::OneHour,
        SessionDuration::TwoHours,
        SessionDuration::ThreeHours,
    ];

    pub fn hours(self) -> u8 {
        match self {
            SessionDuration::OneHour => 1,
            SessionDuration::TwoHours => 2,
            SessionDuration::ThreeHours => 3,
        }
    }

    pub fn from_hours(hours: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.hours() == hours)
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionDuration::OneHour => "1 hour",
            SessionDuration::TwoHours => "2 hours",
            SessionDuration::ThreeHours => "3 hours",
        }
    }
}

impl TryFrom<u8> for SessionDuration {
    type Error = String;

    fn try_from(hours: u8) -> Result<Self, Self::Error> {
        Self::from_hours(hours).ok_or_else(|| format!("unsupported duration: {} hours", hours))
    }
}

impl From<SessionDuration> for u8 {
    fn from(duration: SessionDuration) -> Self {
        duration.hours()
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw booking form as posted by the browser. Every field is optional on the
/// wire so that missing inputs reach validation instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct BookingForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_expiry: String,
    #[serde(default)]
    pub card_cvc: String,
}

impl BookingForm {
    pub fn trimmed(self) -> Self {
        Self {
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            duration: self.duration.trim().to_string(),
            card_number: self.card_number.chars().filter(|c| !c.is_whitespace()).collect(),
            card_expiry: self.card_expiry.trim().to_string(),
            card_cvc: self.card_cvc.trim().to_string(),
        }
    }
}

/// Per-field messages shown under the form inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingFieldErrors {
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
}

impl BookingFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.duration.is_none()
    }
}

/// Card details handed to the payment widget
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
}

/// A validated reservation request. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub reference: Uuid,
    pub gym: BookingGym,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: SessionDuration,
}

/// State of the booking form as rendered
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Processing,
    Failed(String),
}

/// How a submission that passed validation ended
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed(BookingRequest),
    Failed(String),
}

impl SubmissionState {
    pub fn is_processing(&self) -> bool {
        matches!(self, SubmissionState::Processing)
    }

    pub fn payment_error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
