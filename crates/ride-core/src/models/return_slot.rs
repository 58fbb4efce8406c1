use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A predicted return-leg departure slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReturnSlot {
    pub id: Uuid,
    pub depart_time: NaiveTime,
    /// Predicted likelihood this slot will find a passenger, 0-100.
    pub match_confidence_percent: u8,
}

impl ReturnSlot {
    pub fn new(depart_time: NaiveTime, match_confidence_percent: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            depart_time,
            match_confidence_percent,
        }
    }
}
