use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled meeting between a buyer and a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Local date and time the appointment is scheduled for.
    pub datetime: NaiveDateTime,
    pub buyer: String,
    pub seller: String,
}

impl Appointment {
    pub fn new(datetime: NaiveDateTime, buyer: impl Into<String>, seller: impl Into<String>) -> Self {
        Self {
            datetime,
            buyer: buyer.into(),
            seller: seller.into(),
        }
    }
}
