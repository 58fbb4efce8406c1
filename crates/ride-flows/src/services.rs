use ride_core::{ReturnSlot, RideOffer, SearchQuery, TripDetails, VehicleInfo};

use chrono::NaiveTime;
use uuid::Uuid;

/// Predicts return-leg demand for an outbound trip.
///
/// A real implementation would query the matching backend; the flows only
/// consume the ordered slot list.
pub trait ReturnLegPredictor {
    fn predict(&self, details: &TripDetails) -> Vec<ReturnSlot>;
}

/// Finds bookable rides for a search query.
///
/// `query.flexible` is passed through for completeness; it does not
/// filter or re-rank results.
pub trait RideSearchService: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Vec<RideOffer>;
}

fn hms(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).expect("static time literal")
}

/// Fixed demo predictor: two evening slots at high confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPredictor;

impl ReturnLegPredictor for StaticPredictor {
    fn predict(&self, _details: &TripDetails) -> Vec<ReturnSlot> {
        vec![
            ReturnSlot::new(hms(18, 0), 95),
            ReturnSlot::new(hms(18, 0), 95),
        ]
    }
}

/// Fixed demo search service: the two rides shown on the search page.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRideSearch;

impl RideSearchService for StaticRideSearch {
    fn search(&self, _query: &SearchQuery) -> Vec<RideOffer> {
        vec![
            RideOffer {
                id: Uuid::new_v4(),
                driver_name: "John Doe".into(),
                rating: 4.9,
                vehicle: VehicleInfo::new("Toyota", "Camry", 2020, 4),
                depart_time: hms(14, 0),
                arrive_time: hms(18, 30),
                price: 35.0,
                match_tag: Some("Return Leg Deal".into()),
            },
            RideOffer {
                id: Uuid::new_v4(),
                driver_name: "Alice Smith".into(),
                rating: 4.8,
                vehicle: VehicleInfo::new("Honda", "Civic", 2019, 4),
                depart_time: hms(16, 0),
                arrive_time: hms(20, 45),
                price: 48.0,
                match_tag: None,
            },
        ]
    }
}
