use crate::models::booking_status::BookingStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A passenger's seat reservation on a trip.
///
/// Bookings start out `Pending`; the driver confirms or cancels them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub passenger_id: Uuid,
    pub seats_booked: i32,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(trip_id: Uuid, passenger_id: Uuid, seats_booked: i32, total_price: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            trip_id,
            passenger_id,
            seats_booked,
            total_price,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
