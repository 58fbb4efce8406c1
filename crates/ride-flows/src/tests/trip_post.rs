//! Unit tests for the trip-posting wizard.

use crate::error::FlowError;
use crate::services::StaticPredictor;
use crate::timing::FlowTiming;
use crate::trip_post::{TripPostFlow, TripPostState};

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use ride_core::{TripDetails, TripStatus};
use tokio::time::sleep;
use uuid::Uuid;

fn details() -> TripDetails {
    TripDetails {
        origin: "City A".into(),
        destination: "City B".into(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    }
}

fn flow() -> TripPostFlow<StaticPredictor> {
    TripPostFlow::new(Uuid::new_v4(), StaticPredictor, FlowTiming::default())
}

#[test]
fn given_new_flow_then_starts_at_empty_form() {
    let flow = flow();

    assert!(matches!(flow.state(), TripPostState::Form { draft: None }));
    assert!(flow.slots().is_empty());
    assert!(!flow.can_confirm());
}

#[test]
fn given_form_when_submit_then_prediction_review_with_slots() {
    let mut flow = flow();

    flow.submit(details()).unwrap();

    assert!(matches!(flow.state(), TripPostState::PredictionReview { .. }));
    assert_eq!(flow.slots().len(), 2);
    assert!(flow.selected_slot().is_none());
}

#[test]
fn given_review_when_confirm_without_selection_then_refused_in_place() {
    let mut flow = flow();
    flow.submit(details()).unwrap();

    let err = flow.confirm().unwrap_err();

    assert!(matches!(err, FlowError::SlotNotSelected { .. }));
    assert!(matches!(flow.state(), TripPostState::PredictionReview { .. }));
    assert!(!flow.can_confirm());
}

#[test]
fn given_review_when_select_slot_then_armed_but_not_advanced() {
    let mut flow = flow();
    flow.submit(details()).unwrap();
    let slot_id = flow.slots()[0].id;

    flow.select_slot(slot_id).unwrap();

    assert!(matches!(flow.state(), TripPostState::PredictionReview { .. }));
    assert_eq!(flow.selected_slot().unwrap().id, slot_id);
    assert!(flow.can_confirm());
}

#[test]
fn given_review_when_select_unknown_slot_then_refused() {
    let mut flow = flow();
    flow.submit(details()).unwrap();

    let err = flow.select_slot(Uuid::new_v4()).unwrap_err();

    assert!(matches!(err, FlowError::UnknownSlot { .. }));
    assert!(flow.selected_slot().is_none());
}

#[tokio::test]
async fn given_selection_when_confirm_then_trip_published() {
    let driver_id = Uuid::new_v4();
    let mut flow = TripPostFlow::new(driver_id, StaticPredictor, FlowTiming::default());
    flow.submit(details()).unwrap();
    let slot_id = flow.slots()[1].id;
    flow.select_slot(slot_id).unwrap();

    let trip = flow.confirm().unwrap();

    assert_eq!(trip.driver_id, driver_id);
    assert_eq!(trip.origin, "City A");
    assert_eq!(trip.destination, "City B");
    assert_eq!(trip.status, TripStatus::Active);

    match flow.state() {
        TripPostState::Confirmed { trip: kept, slot } => {
            assert_eq!(kept.id, trip.id);
            assert_eq!(slot.id, slot_id);
        }
        other => panic!("expected Confirmed, got {other:?}"),
    }
    assert_eq!(flow.published_trip().unwrap().id, trip.id);
}

#[test]
fn given_review_when_back_then_form_prefilled_and_slots_discarded() {
    let mut flow = flow();
    flow.submit(details()).unwrap();
    flow.select_slot(flow.slots()[0].id).unwrap();

    flow.back().unwrap();

    match flow.state() {
        TripPostState::Form { draft: Some(draft) } => assert_eq!(*draft, details()),
        other => panic!("expected prefilled Form, got {other:?}"),
    }
    assert!(flow.slots().is_empty());
    assert!(flow.selected_slot().is_none());
}

#[tokio::test]
async fn given_confirmed_when_reset_then_fresh_form() {
    let mut flow = flow();
    flow.submit(details()).unwrap();
    flow.select_slot(flow.slots()[0].id).unwrap();
    flow.confirm().unwrap();

    flow.reset().unwrap();

    assert!(matches!(flow.state(), TripPostState::Form { draft: None }));
    assert!(flow.published_trip().is_none());
}

#[test]
fn given_wrong_phase_then_every_action_is_refused_in_place() {
    let mut flow = flow();

    // Nothing but submit works from the form
    assert!(matches!(
        flow.select_slot(Uuid::new_v4()).unwrap_err(),
        FlowError::InvalidTransition { .. }
    ));
    assert!(matches!(
        flow.confirm().unwrap_err(),
        FlowError::InvalidTransition { .. }
    ));
    assert!(matches!(
        flow.back().unwrap_err(),
        FlowError::InvalidTransition { .. }
    ));
    assert!(matches!(
        flow.reset().unwrap_err(),
        FlowError::InvalidTransition { .. }
    ));
    assert!(matches!(flow.state(), TripPostState::Form { draft: None }));

    // And submit is refused once in review
    flow.submit(details()).unwrap();
    assert!(matches!(
        flow.submit(details()).unwrap_err(),
        FlowError::InvalidTransition { .. }
    ));
    assert!(matches!(flow.state(), TripPostState::PredictionReview { .. }));
}

#[tokio::test(start_paused = true)]
async fn given_confirm_then_celebration_is_one_shot_and_time_bounded() {
    let mut flow = flow();
    flow.submit(details()).unwrap();
    flow.select_slot(flow.slots()[0].id).unwrap();

    assert!(!flow.celebration_active());
    flow.confirm().unwrap();
    assert!(flow.celebration_active());

    sleep(Duration::from_millis(4900)).await;
    assert!(flow.celebration_active());

    sleep(Duration::from_millis(200)).await;
    assert!(!flow.celebration_active());

    sleep(Duration::from_secs(30)).await;
    assert!(!flow.celebration_active());
}

#[tokio::test(start_paused = true)]
async fn given_reset_then_celebration_still_clears_on_its_own_timer() {
    let mut flow = flow();
    flow.submit(details()).unwrap();
    flow.select_slot(flow.slots()[0].id).unwrap();
    flow.confirm().unwrap();
    flow.reset().unwrap();

    // Reset does not cancel the ongoing celebration
    assert!(flow.celebration_active());

    sleep(Duration::from_millis(5100)).await;
    assert!(!flow.celebration_active());
}
