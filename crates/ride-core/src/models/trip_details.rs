use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Trip-posting form payload.
///
/// The form control rejects empty fields before this is built; the
/// posting flow treats the values as valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripDetails {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}
