use crate::{Booking, BookingStatus, Trip, TripStatus};

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

#[test]
fn test_new_trip_defaults() {
    let driver = Uuid::new_v4();
    let trip = Trip::new(
        driver,
        "City A".into(),
        "City B".into(),
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        3,
        35.0,
    );

    assert_eq!(trip.driver_id, driver);
    assert_eq!(trip.status, TripStatus::Active);
    assert!(!trip.is_return_trip);
    assert_eq!(trip.created_at, trip.updated_at);
}

#[test]
fn test_new_booking_starts_pending() {
    let booking = Booking::new(Uuid::new_v4(), Uuid::new_v4(), 1, 35.0);

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.seats_booked, 1);
    assert_eq!(booking.total_price, 35.0);
}
