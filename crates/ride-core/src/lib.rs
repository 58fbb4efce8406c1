pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::booking::Booking;
pub use models::booking_status::BookingStatus;
pub use models::identity::Identity;
pub use models::identity_record::IdentityRecord;
pub use models::ride_offer::RideOffer;
pub use models::return_slot::ReturnSlot;
pub use models::role_profile::RoleProfile;
pub use models::search_query::SearchQuery;
pub use models::signup_profile::SignupProfile;
pub use models::trip::Trip;
pub use models::trip_details::TripDetails;
pub use models::trip_status::TripStatus;
pub use models::user_role::UserRole;
pub use models::vehicle_info::VehicleInfo;

#[cfg(test)]
mod tests;
