use crate::core::calculator::compliance::HosLimits;
use crate::core::calculator::timeline;
use crate::models::day_summary::DaySummary;
use crate::models::log_day::LogDay;
use crate::models::trip::{TripPlan, day_number};
use crate::utils::date::parse_timestamp_date;

pub struct Core;

impl Core {
    /// Timeline plus the per-day figures printed on the log sheet.
    /// `index` is the position of `day` in `trip.logs`.
    pub fn build_daily_summary(
        day: &LogDay,
        index: usize,
        trip: &TripPlan,
        limits: &HosLimits,
    ) -> DaySummary {
        let timeline = timeline::compute_day_timeline_with(&day.events, limits);
        let miles_today = miles_today(day, trip);

        let date = day
            .events
            .iter()
            .find_map(|e| e.start_time.as_deref().and_then(parse_timestamp_date));

        DaySummary {
            day_number: day_number(day, index),
            timeline,
            miles_today,
            date,
        }
    }

    /// One summary per log day, in trip order.
    pub fn build_trip_summaries(trip: &TripPlan, limits: &HosLimits) -> Vec<DaySummary> {
        trip.logs
            .iter()
            .enumerate()
            .map(|(i, day)| Self::build_daily_summary(day, i, trip, limits))
            .collect()
    }
}

/// Trip miles apportioned by this day's share of trip driving time.
pub fn miles_today(day: &LogDay, trip: &TripPlan) -> u32 {
    let total_miles = trip.total_distance();
    let total_hours = trip.total_driving_hours();

    if total_miles <= 0.0 || total_hours <= 0.0 {
        return 0;
    }

    (total_miles * day.driving_hours() / total_hours).round() as u32
}
