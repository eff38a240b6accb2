use crate::core::itinerary::EventKind;
use crate::models::trip::TripPlan;
use serde::Serialize;

/// Trip-level counters shown above the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub total_miles: u32,
    /// One decimal
    pub total_driving_hours: f64,
    pub number_of_days: usize,
    pub ten_hour_resets: usize,
    pub thirty_min_breaks: usize,
    pub fueling_stops: usize,
    /// Resets + breaks + fuel, plus pickup and dropoff
    pub total_stops: usize,
}

impl TripSummary {
    pub fn trip_duration_label(&self) -> String {
        if self.number_of_days > 1 {
            format!("{} days", self.number_of_days)
        } else {
            "1 day".to_string()
        }
    }
}

pub fn generate_trip_summary(trip: &TripPlan) -> TripSummary {
    let mut driving_seconds = 0.0;
    let mut ten_hour_resets = 0;
    let mut thirty_min_breaks = 0;
    let mut fueling_stops = 0;

    for (_, event) in trip.events() {
        driving_seconds += event.driving_seconds();
        match EventKind::classify(event) {
            EventKind::TenHourReset => ten_hour_resets += 1,
            EventKind::ThirtyMinuteBreak => thirty_min_breaks += 1,
            EventKind::FuelingStop => fueling_stops += 1,
            _ => {}
        }
    }

    let driving_hours = driving_seconds / 3600.0;

    TripSummary {
        total_miles: trip.total_distance().round() as u32,
        total_driving_hours: (driving_hours * 10.0).round() / 10.0,
        number_of_days: trip.logs.len(),
        ten_hour_resets,
        thirty_min_breaks,
        fueling_stops,
        total_stops: ten_hour_resets + thirty_min_breaks + fueling_stops + 2,
    }
}
