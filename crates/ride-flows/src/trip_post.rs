use crate::celebration::Celebration;
use crate::error::{FlowError, Result};
use crate::services::ReturnLegPredictor;
use crate::timing::FlowTiming;

use ride_core::{ReturnSlot, Trip, TripDetails};

use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

// Demo placeholders for trip fields the posting form does not collect.
const DEFAULT_AVAILABLE_SEATS: i32 = 3;
const DEFAULT_PRICE_PER_SEAT: f64 = 35.0;

/// Current step of the trip-posting wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum TripPostState {
    /// Collecting origin/destination/date/time. `draft` holds the values
    /// to pre-fill after a `back()`.
    Form { draft: Option<TripDetails> },
    /// Reviewing predicted return slots; a slot must be selected before
    /// the trip can be confirmed.
    PredictionReview {
        details: TripDetails,
        slots: Vec<ReturnSlot>,
        selected: Option<ReturnSlot>,
    },
    /// Terminal: the trip is published.
    Confirmed { trip: Trip, slot: ReturnSlot },
}

impl TripPostState {
    pub fn phase_name(&self) -> &'static str {
        match self {
            Self::Form { .. } => "form",
            Self::PredictionReview { .. } => "prediction_review",
            Self::Confirmed { .. } => "confirmed",
        }
    }
}

/// Driver-side trip-posting wizard.
///
/// Linear flow `Form -> PredictionReview -> Confirmed` with one backward
/// edge (`back`) and one reset from the terminal state. Transitions take
/// `&mut self`, so they are atomic with respect to each other.
///
/// Must be used within a Tokio runtime (confirmation starts the
/// celebration clear timer).
pub struct TripPostFlow<P: ReturnLegPredictor> {
    predictor: P,
    timing: FlowTiming,
    driver_id: Uuid,
    state: TripPostState,
    celebration: Celebration,
}

impl<P: ReturnLegPredictor> TripPostFlow<P> {
    pub fn new(driver_id: Uuid, predictor: P, timing: FlowTiming) -> Self {
        Self {
            predictor,
            timing,
            driver_id,
            state: TripPostState::Form { draft: None },
            celebration: Celebration::new(),
        }
    }

    pub fn state(&self) -> &TripPostState {
        &self.state
    }

    /// Submits the trip form and moves to the prediction review.
    ///
    /// Field validity is the form control's concern; the machine treats
    /// the details as valid.
    pub fn submit(&mut self, details: TripDetails) -> Result<()> {
        if !matches!(self.state, TripPostState::Form { .. }) {
            return Err(FlowError::invalid_transition(
                self.state.phase_name(),
                "submit",
            ));
        }

        let slots = self.predictor.predict(&details);
        info!(
            "trip form submitted {} -> {}, {} candidate slots",
            details.origin,
            details.destination,
            slots.len()
        );
        self.state = TripPostState::PredictionReview {
            details,
            slots,
            selected: None,
        };
        Ok(())
    }

    /// Candidate return slots, empty outside the review step.
    pub fn slots(&self) -> &[ReturnSlot] {
        match &self.state {
            TripPostState::PredictionReview { slots, .. } => slots,
            _ => &[],
        }
    }

    /// Marks a slot as the driver's return preference.
    ///
    /// Selection never advances the wizard; it only arms `confirm`.
    pub fn select_slot(&mut self, slot_id: Uuid) -> Result<()> {
        let TripPostState::PredictionReview {
            slots, selected, ..
        } = &mut self.state
        else {
            return Err(FlowError::invalid_transition(
                self.state.phase_name(),
                "select_slot",
            ));
        };

        match slots.iter().find(|s| s.id == slot_id) {
            Some(slot) => {
                *selected = Some(slot.clone());
                Ok(())
            }
            None => Err(FlowError::unknown_slot(slot_id)),
        }
    }

    pub fn selected_slot(&self) -> Option<&ReturnSlot> {
        match &self.state {
            TripPostState::PredictionReview { selected, .. } => selected.as_ref(),
            _ => None,
        }
    }

    /// Whether `confirm` would currently succeed; drives the confirm
    /// control's disabled state.
    pub fn can_confirm(&self) -> bool {
        matches!(
            self.state,
            TripPostState::PredictionReview {
                selected: Some(_),
                ..
            }
        )
    }

    /// Publishes the trip. Refused until a return slot is selected.
    pub fn confirm(&mut self) -> Result<Trip> {
        let placeholder = TripPostState::Form { draft: None };
        match std::mem::replace(&mut self.state, placeholder) {
            TripPostState::PredictionReview {
                details,
                slots: _,
                selected: Some(slot),
            } => {
                let trip = Trip::new(
                    self.driver_id,
                    details.origin,
                    details.destination,
                    details.date,
                    details.time,
                    DEFAULT_AVAILABLE_SEATS,
                    DEFAULT_PRICE_PER_SEAT,
                );
                info!("trip {} published with return slot {}", trip.id, slot.id);

                self.celebration.trigger(self.timing.celebration_clear);
                self.state = TripPostState::Confirmed {
                    trip: trip.clone(),
                    slot,
                };
                Ok(trip)
            }
            TripPostState::PredictionReview {
                details,
                slots,
                selected: None,
            } => {
                self.state = TripPostState::PredictionReview {
                    details,
                    slots,
                    selected: None,
                };
                Err(FlowError::slot_not_selected())
            }
            other => {
                let phase = other.phase_name();
                self.state = other;
                Err(FlowError::invalid_transition(phase, "confirm"))
            }
        }
    }

    /// Returns from the review to the form, keeping the submitted values
    /// as the form draft. Slots and selection are discarded.
    pub fn back(&mut self) -> Result<()> {
        let placeholder = TripPostState::Form { draft: None };
        match std::mem::replace(&mut self.state, placeholder) {
            TripPostState::PredictionReview { details, .. } => {
                self.state = TripPostState::Form {
                    draft: Some(details),
                };
                Ok(())
            }
            other => {
                let phase = other.phase_name();
                self.state = other;
                Err(FlowError::invalid_transition(phase, "back"))
            }
        }
    }

    /// Starts a new posting from the terminal state.
    ///
    /// The celebration is left to clear on its own timer.
    pub fn reset(&mut self) -> Result<()> {
        if !matches!(self.state, TripPostState::Confirmed { .. }) {
            return Err(FlowError::invalid_transition(
                self.state.phase_name(),
                "reset",
            ));
        }

        self.state = TripPostState::Form { draft: None };
        Ok(())
    }

    /// The published trip, present only in the terminal state.
    pub fn published_trip(&self) -> Option<&Trip> {
        match &self.state {
            TripPostState::Confirmed { trip, .. } => Some(trip),
            _ => None,
        }
    }

    pub fn celebration_active(&self) -> bool {
        self.celebration.is_active()
    }

    pub fn subscribe_celebration(&self) -> watch::Receiver<bool> {
        self.celebration.subscribe()
    }
}
