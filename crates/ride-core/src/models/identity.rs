use crate::models::identity_record::IdentityRecord;
use crate::models::role_profile::RoleProfile;
use crate::models::signup_profile::SignupProfile;
use crate::models::user_role::UserRole;
use crate::models::vehicle_info::VehicleInfo;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single authenticated user's profile record.
///
/// Created only by signup; the role is fixed at construction and there is
/// no update operation. Serialization goes through [`IdentityRecord`] so
/// the persisted layout stays stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "IdentityRecord", into = "IdentityRecord")]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub profile: RoleProfile,
}

impl Identity {
    /// Builds a fresh identity from signup input with a new unique id.
    pub fn new(profile: SignupProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            avatar: profile.avatar,
            profile: profile.role,
        }
    }

    pub fn role(&self) -> UserRole {
        self.profile.role()
    }

    /// License number, present only for drivers.
    pub fn license_number(&self) -> Option<&str> {
        match &self.profile {
            RoleProfile::Driver { license_number, .. } => Some(license_number),
            RoleProfile::Passenger => None,
        }
    }

    /// Vehicle data, present only for drivers.
    pub fn vehicle(&self) -> Option<&VehicleInfo> {
        match &self.profile {
            RoleProfile::Driver { vehicle, .. } => Some(vehicle),
            RoleProfile::Passenger => None,
        }
    }
}
