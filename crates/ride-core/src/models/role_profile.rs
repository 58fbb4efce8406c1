use crate::models::user_role::UserRole;
use crate::models::vehicle_info::VehicleInfo;

/// Role-conditional identity data.
///
/// Drivers always carry license and vehicle data; passengers never do.
/// Keeping this a tagged union makes a driver identity without vehicle
/// data unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleProfile {
    Passenger,
    Driver {
        license_number: String,
        vehicle: VehicleInfo,
    },
}

impl RoleProfile {
    pub fn role(&self) -> UserRole {
        match self {
            Self::Passenger => UserRole::Passenger,
            Self::Driver { .. } => UserRole::Driver,
        }
    }
}
