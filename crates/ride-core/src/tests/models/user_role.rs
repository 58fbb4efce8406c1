use crate::{BookingStatus, TripStatus, UserRole};

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Passenger.as_str(), "passenger");
    assert_eq!(UserRole::Driver.as_str(), "driver");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("passenger").unwrap(), UserRole::Passenger);
    assert_eq!(UserRole::from_str("driver").unwrap(), UserRole::Driver);
    assert!(UserRole::from_str("admin").is_err());
}

#[test]
fn test_trip_status_roundtrip() {
    for status in [TripStatus::Active, TripStatus::Completed, TripStatus::Cancelled] {
        assert_eq!(TripStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(TripStatus::from_str("invalid").is_err());
}

#[test]
fn test_booking_status_default() {
    assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    assert!(BookingStatus::from_str("invalid").is_err());
}
