use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ride-search form payload.
///
/// `flexible` widens the acceptable pickup window; it only changes the
/// annotation shown on offers, never the result set itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub flexible: bool,
}
