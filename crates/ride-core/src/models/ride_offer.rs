use crate::models::vehicle_info::VehicleInfo;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable ride returned by the search service.
///
/// The id doubles as the underlying trip reference when a booking is
/// created from the offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RideOffer {
    pub id: Uuid,
    pub driver_name: String,
    pub rating: f32,
    pub vehicle: VehicleInfo,
    pub depart_time: NaiveTime,
    pub arrive_time: NaiveTime,
    pub price: f64,
    /// Promotional tag, e.g. "Return Leg Deal".
    pub match_tag: Option<String>,
}
