use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the wizard state machines.
///
/// Every refused action leaves the machine in the state it was in.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Action '{action}' is not allowed in the {phase} phase {location}")]
    InvalidTransition {
        phase: &'static str,
        action: &'static str,
        location: ErrorLocation,
    },

    #[error("A return slot must be selected before confirming {location}")]
    SlotNotSelected { location: ErrorLocation },

    #[error("Unknown return slot: {id} {location}")]
    UnknownSlot { id: Uuid, location: ErrorLocation },

    #[error("Unknown ride offer: {id} {location}")]
    UnknownOffer { id: Uuid, location: ErrorLocation },
}

impl FlowError {
    /// Creates InvalidTransition error at caller location.
    #[track_caller]
    pub fn invalid_transition(phase: &'static str, action: &'static str) -> Self {
        Self::InvalidTransition {
            phase,
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SlotNotSelected error at caller location.
    #[track_caller]
    pub fn slot_not_selected() -> Self {
        Self::SlotNotSelected {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownSlot error at caller location.
    #[track_caller]
    pub fn unknown_slot(id: Uuid) -> Self {
        Self::UnknownSlot {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnknownOffer error at caller location.
    #[track_caller]
    pub fn unknown_offer(id: Uuid) -> Self {
        Self::UnknownOffer {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
