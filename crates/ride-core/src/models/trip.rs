use crate::models::trip_status::TripStatus;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published ride offered by a driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub driver_id: Uuid,

    // Route
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,

    // Capacity and pricing
    pub available_seats: i32,
    pub price_per_seat: f64,

    // Workflow
    pub status: TripStatus,
    pub is_return_trip: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn new(
        driver_id: Uuid,
        origin: String,
        destination: String,
        departure_date: NaiveDate,
        departure_time: NaiveTime,
        available_seats: i32,
        price_per_seat: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            driver_id,
            origin,
            destination,
            departure_date,
            departure_time,
            available_seats,
            price_per_seat,
            status: TripStatus::Active,
            is_return_trip: false,
            created_at: now,
            updated_at: now,
        }
    }
}
