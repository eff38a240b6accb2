use super::duty_event::DutyEvent;
use super::trip::null_as_default;
use serde::{Deserialize, Serialize};

/// One 24-hour compliance record as produced by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogDay {
    /// 1-based day number
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<DutyEvent>,
}

impl LogDay {
    pub fn new(day: u32, events: Vec<DutyEvent>) -> Self {
        Self { day, events }
    }

    pub fn driving_seconds(&self) -> f64 {
        self.events.iter().map(DutyEvent::driving_seconds).sum()
    }

    pub fn driving_hours(&self) -> f64 {
        self.driving_seconds() / 3600.0
    }
}
