//! Unit tests for identity construction and the persisted record layout.

use crate::{
    Identity, IdentityRecord, RoleProfile, SignupProfile, UserRole, VehicleInfo,
};

fn driver_profile() -> SignupProfile {
    SignupProfile {
        name: "Jane".into(),
        email: "jane@x.com".into(),
        phone: "555".into(),
        avatar: None,
        role: RoleProfile::Driver {
            license_number: "DL1".into(),
            vehicle: VehicleInfo::new("Toyota", "Camry", 2020, 4),
        },
    }
}

fn passenger_profile() -> SignupProfile {
    SignupProfile {
        name: "Bob".into(),
        email: "bob@x.com".into(),
        phone: "556".into(),
        avatar: None,
        role: RoleProfile::Passenger,
    }
}

#[test]
fn given_driver_profile_when_new_then_role_and_vehicle_are_set() {
    let identity = Identity::new(driver_profile());

    assert_eq!(identity.role(), UserRole::Driver);
    assert_eq!(identity.license_number(), Some("DL1"));
    assert_eq!(identity.vehicle().unwrap().descriptor(), "Toyota Camry");
}

#[test]
fn given_passenger_profile_when_new_then_driver_fields_absent() {
    let identity = Identity::new(passenger_profile());

    assert_eq!(identity.role(), UserRole::Passenger);
    assert!(identity.license_number().is_none());
    assert!(identity.vehicle().is_none());
}

#[test]
fn given_driver_identity_when_serialized_then_record_field_names_are_stable() {
    let identity = Identity::new(driver_profile());
    let json = serde_json::to_string(&identity).unwrap();

    assert!(json.contains("\"role\":\"driver\""));
    assert!(json.contains("\"licenseNumber\":\"DL1\""));
    assert!(json.contains("\"vehicleInfo\""));
    assert!(json.contains("\"seats\":4"));
}

#[test]
fn given_passenger_identity_when_serialized_then_optionals_are_omitted() {
    let identity = Identity::new(passenger_profile());
    let json = serde_json::to_string(&identity).unwrap();

    assert!(!json.contains("licenseNumber"));
    assert!(!json.contains("vehicleInfo"));
    assert!(!json.contains("avatar"));
}

#[test]
fn given_valid_record_when_serialize_roundtrip_then_preserves_all_fields() {
    let original = Identity::new(driver_profile());

    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_driver_record_without_vehicle_when_decode_then_rejected() {
    let json = r#"{
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "name": "Jane",
        "email": "jane@x.com",
        "role": "driver",
        "phone": "555",
        "licenseNumber": "DL1"
    }"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_passenger_record_with_stray_driver_fields_when_decode_then_dropped() {
    let json = r#"{
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "name": "Bob",
        "email": "bob@x.com",
        "role": "passenger",
        "phone": "556",
        "licenseNumber": "DL9"
    }"#;

    let identity: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(identity.profile, RoleProfile::Passenger);
}

#[test]
fn given_record_when_converted_back_then_role_matches_profile() {
    let record = IdentityRecord::from(Identity::new(passenger_profile()));
    assert_eq!(record.role, UserRole::Passenger);
    assert!(record.license_number.is_none());
    assert!(record.vehicle_info.is_none());
}
