use crate::error::{FlowError, Result};
use crate::services::RideSearchService;
use crate::timing::FlowTiming;

use ride_core::{Booking, RideOffer, SearchQuery};

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

/// Annotation shown on offers when the passenger picked a flexible window.
pub const FLEXIBLE_PICKUP_NOTE: &str = "Flexible Window: Driver can wait ±30 mins for pickup.";

/// Current step of the ride-search wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideSearchPhase {
    SearchForm,
    Loading,
    ResultsList,
    Booked,
}

impl RideSearchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchForm => "search_form",
            Self::Loading => "loading",
            Self::ResultsList => "results_list",
            Self::Booked => "booked",
        }
    }
}

struct SearchState {
    phase: RideSearchPhase,
    query: Option<SearchQuery>,
    offers: Vec<RideOffer>,
    booking: Option<Booking>,
    /// Bumped on every search/reset so a stale loading timer can tell it
    /// has been superseded and must not apply its result.
    generation: u64,
}

/// Passenger-side ride-search and booking wizard.
///
/// `SearchForm -> Loading -> ResultsList -> Booked`, where
/// `Loading -> ResultsList` advances automatically after a fixed delay.
/// The loading step is not user-cancellable; dropping the flow aborts the
/// pending timer.
///
/// Must be used within a Tokio runtime.
pub struct RideSearchFlow<S: RideSearchService + 'static> {
    service: Arc<S>,
    timing: FlowTiming,
    passenger_id: Uuid,
    state: Arc<Mutex<SearchState>>,
    phase_tx: watch::Sender<RideSearchPhase>,
    pending: Option<JoinHandle<()>>,
}

impl<S: RideSearchService + 'static> RideSearchFlow<S> {
    pub fn new(passenger_id: Uuid, service: S, timing: FlowTiming) -> Self {
        let (phase_tx, _) = watch::channel(RideSearchPhase::SearchForm);
        Self {
            service: Arc::new(service),
            timing,
            passenger_id,
            state: Arc::new(Mutex::new(SearchState {
                phase: RideSearchPhase::SearchForm,
                query: None,
                offers: Vec::new(),
                booking: None,
                generation: 0,
            })),
            phase_tx,
            pending: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().expect("search state lock poisoned")
    }

    pub fn phase(&self) -> RideSearchPhase {
        self.lock().phase
    }

    /// Watch phase changes, e.g. to swap the page fragment being shown.
    pub fn subscribe(&self) -> watch::Receiver<RideSearchPhase> {
        self.phase_tx.subscribe()
    }

    /// Starts a search and enters the loading step.
    ///
    /// Allowed from the form and over a previous result list (the search
    /// bar stays live above results); refused while a search is already
    /// loading and after booking.
    pub fn search(&mut self, query: SearchQuery) -> Result<()> {
        let generation;
        {
            let mut state = self.lock();
            match state.phase {
                RideSearchPhase::SearchForm | RideSearchPhase::ResultsList => {}
                phase => {
                    return Err(FlowError::invalid_transition(phase.as_str(), "search"));
                }
            }

            state.generation += 1;
            generation = state.generation;
            state.offers.clear();
            state.booking = None;
            state.query = Some(query.clone());
            state.phase = RideSearchPhase::Loading;
            self.phase_tx.send_replace(RideSearchPhase::Loading);
        }

        info!("searching rides {} -> {}", query.origin, query.destination);

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.state);
        let phase_tx = self.phase_tx.clone();
        let delay = self.timing.search_delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let offers = service.search(&query);
            let mut state = shared.lock().expect("search state lock poisoned");

            // A newer search or a reset owns the state now
            if state.generation != generation || state.phase != RideSearchPhase::Loading {
                debug!("discarding superseded search result");
                return;
            }

            debug!("search finished with {} offers", offers.len());
            state.offers = offers;
            state.phase = RideSearchPhase::ResultsList;
            phase_tx.send_replace(RideSearchPhase::ResultsList);
        }));

        Ok(())
    }

    /// Offers of the current result list, empty elsewhere.
    pub fn offers(&self) -> Vec<RideOffer> {
        self.lock().offers.clone()
    }

    /// Whether the current query asked for a flexible pickup window.
    pub fn flexible_window(&self) -> bool {
        self.lock().query.as_ref().is_some_and(|q| q.flexible)
    }

    /// The pickup-window annotation to display on offers, if any.
    pub fn pickup_note(&self) -> Option<&'static str> {
        let state = self.lock();
        let flexible = state.query.as_ref().is_some_and(|q| q.flexible);
        (state.phase == RideSearchPhase::ResultsList && flexible).then_some(FLEXIBLE_PICKUP_NOTE)
    }

    /// Books a seat on one of the listed offers.
    ///
    /// Any listed offer may be booked; no seat-availability check is
    /// made. Produces a pending booking awaiting driver approval.
    pub fn book(&mut self, offer_id: Uuid) -> Result<Booking> {
        let mut state = self.lock();
        if state.phase != RideSearchPhase::ResultsList {
            return Err(FlowError::invalid_transition(state.phase.as_str(), "book"));
        }

        let offer = state
            .offers
            .iter()
            .find(|o| o.id == offer_id)
            .cloned()
            .ok_or_else(|| FlowError::unknown_offer(offer_id))?;

        let booking = Booking::new(offer.id, self.passenger_id, 1, offer.price);
        info!(
            "booked seat with {} for {:.2}",
            offer.driver_name, booking.total_price
        );

        state.booking = Some(booking.clone());
        state.phase = RideSearchPhase::Booked;
        self.phase_tx.send_replace(RideSearchPhase::Booked);
        Ok(booking)
    }

    /// The booking created by `book`, present only in the terminal state.
    pub fn booking(&self) -> Option<Booking> {
        self.lock().booking.clone()
    }

    /// Returns to an empty search form after booking.
    pub fn reset(&mut self) -> Result<()> {
        let mut state = self.lock();
        if state.phase != RideSearchPhase::Booked {
            return Err(FlowError::invalid_transition(state.phase.as_str(), "reset"));
        }

        state.generation += 1;
        state.query = None;
        state.offers.clear();
        state.booking = None;
        state.phase = RideSearchPhase::SearchForm;
        self.phase_tx.send_replace(RideSearchPhase::SearchForm);
        Ok(())
    }
}

impl<S: RideSearchService + 'static> Drop for RideSearchFlow<S> {
    fn drop(&mut self) {
        // A timer must never outlive the flow it would mutate
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
