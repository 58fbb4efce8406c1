pub mod celebration;
pub mod error;
pub mod ride_search;
pub mod services;
pub mod timing;
pub mod trip_post;

pub use celebration::Celebration;
pub use error::{FlowError, Result};
pub use ride_search::{RideSearchFlow, RideSearchPhase};
pub use services::{ReturnLegPredictor, RideSearchService, StaticPredictor, StaticRideSearch};
pub use timing::FlowTiming;
pub use trip_post::{TripPostFlow, TripPostState};

#[cfg(test)]
mod tests;
