use crate::core::calculator::timeline::DayTimeline;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub day_number: u32,
    pub timeline: DayTimeline,
    /// Miles attributed to this day, proportional to its share of trip driving time
    pub miles_today: u32,
    /// ISO date of the day when the backend supplied timestamps
    pub date: Option<chrono::NaiveDate>,
}

impl DaySummary {
    pub fn driving_hours(&self) -> f64 {
        self.timeline.totals.driving
    }

    pub fn on_duty_hours(&self) -> f64 {
        self.timeline.totals.on_duty_window()
    }

    pub fn is_compliant(&self) -> bool {
        self.timeline.violations.is_empty()
    }
}
