use crate::error::CoreError;
use crate::models::identity::Identity;
use crate::models::role_profile::RoleProfile;
use crate::models::user_role::UserRole;
use crate::models::vehicle_info::VehicleInfo;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted form of [`Identity`].
///
/// Field names match the durable record layout: `licenseNumber` and
/// `vehicleInfo` are flat optional fields keyed off `role`, and optional
/// fields are omitted entirely when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(
        rename = "licenseNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub license_number: Option<String>,
    #[serde(
        rename = "vehicleInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle_info: Option<VehicleInfo>,
}

impl From<Identity> for IdentityRecord {
    fn from(identity: Identity) -> Self {
        let role = identity.role();
        let (license_number, vehicle_info) = match identity.profile {
            RoleProfile::Passenger => (None, None),
            RoleProfile::Driver {
                license_number,
                vehicle,
            } => (Some(license_number), Some(vehicle)),
        };

        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            role,
            phone: identity.phone,
            avatar: identity.avatar,
            license_number,
            vehicle_info,
        }
    }
}

impl TryFrom<IdentityRecord> for Identity {
    type Error = CoreError;

    /// Fails when a driver record lacks its license or vehicle data.
    /// Stray driver fields on a passenger record are dropped.
    #[track_caller]
    fn try_from(record: IdentityRecord) -> Result<Self, Self::Error> {
        let profile = match record.role {
            UserRole::Passenger => RoleProfile::Passenger,
            UserRole::Driver => match (record.license_number, record.vehicle_info) {
                (Some(license_number), Some(vehicle)) => RoleProfile::Driver {
                    license_number,
                    vehicle,
                },
                _ => {
                    return Err(CoreError::IncompleteDriverRecord {
                        id: record.id,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            },
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            avatar: record.avatar,
            profile,
        })
    }
}
