use crate::core::calculator::compliance::HosLimits;
use crate::core::calculator::steps::Span;
use crate::core::logic::Core;
use crate::core::projector::DrivingSegment;
use crate::core::resolver::{LocationResolver, ResolvedLocation};
use crate::models::day_summary::DaySummary;
use crate::models::duty_event::{DutyEvent, HosSnapshot};
use crate::models::duty_status::DutyStatus;
use crate::models::trip::{TripPlan, day_number};
use crate::utils::formatting::{format_clock, format_duration};
use serde::Serialize;
use std::fmt;

/// What an event means for the trip, derived from status and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventKind {
    BeginTrip,
    Drive,
    ThirtyMinuteBreak,
    TenHourReset,
    ThirtyFourHourRestart,
    FuelingStop,
    LoadCargo,
    UnloadCargo,
    /// No special meaning; carries the raw status text
    Status(String),
}

impl EventKind {
    /// First match wins.
    pub fn classify(event: &DutyEvent) -> Self {
        let status = event.status.known();
        let desc = event.description_str();
        let off_duty = status == Some(DutyStatus::OffDuty);

        if status == Some(DutyStatus::Driving) {
            EventKind::Drive
        } else if off_duty && desc.contains("30-min") {
            EventKind::ThirtyMinuteBreak
        } else if status == Some(DutyStatus::SleeperBerth) || (off_duty && desc.contains("10-hour"))
        {
            EventKind::TenHourReset
        } else if off_duty && desc.contains("34-hour") {
            EventKind::ThirtyFourHourRestart
        } else if desc.contains("Fueling") {
            EventKind::FuelingStop
        } else if desc.contains("Pickup") {
            EventKind::LoadCargo
        } else if desc.contains("Dropoff") {
            EventKind::UnloadCargo
        } else if desc.contains("Pre-Trip") {
            EventKind::BeginTrip
        } else {
            EventKind::Status(event.status.as_str().to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EventKind::BeginTrip => "Begin Trip",
            EventKind::Drive => "Drive",
            EventKind::ThirtyMinuteBreak => "30-Minute Break",
            EventKind::TenHourReset => "10-Hour Reset",
            EventKind::ThirtyFourHourRestart => "34-Hour Restart",
            EventKind::FuelingStop => "Fueling Stop",
            EventKind::LoadCargo => "Load Cargo",
            EventKind::UnloadCargo => "Unload Cargo",
            EventKind::Status(s) => s,
        }
    }

    /// Canonical description, when the kind has one.
    pub fn canonical_description(&self) -> Option<&'static str> {
        match self {
            EventKind::BeginTrip => Some("Pre-trip inspection and vehicle preparation"),
            EventKind::ThirtyMinuteBreak => {
                Some("Mandatory 30-minute break required by HOS regulations")
            }
            EventKind::TenHourReset => {
                Some("Mandatory 10-hour rest period required by HOS regulations")
            }
            EventKind::ThirtyFourHourRestart => {
                Some("Mandatory 34-hour restart required by HOS regulations")
            }
            EventKind::FuelingStop => Some("Scheduled fueling stop"),
            EventKind::LoadCargo => Some("Cargo pickup and loading"),
            EventKind::UnloadCargo => Some("Cargo unloading at destination"),
            EventKind::Drive | EventKind::Status(_) => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItineraryEntry {
    /// 1-based, trip-wide
    pub event_number: usize,
    pub day_number: u32,
    /// 0-based, trip-wide; the index the projector and resolver use
    pub global_index: usize,
    pub kind: EventKind,
    pub status: String,
    pub start_hour: f64,
    pub start_label: String,
    pub duration_hours: f64,
    pub duration_label: String,
    pub location: Option<String>,
    pub description: String,
    pub route: Option<String>,
    pub distance: Option<f64>,
    pub hos_after: Option<HosSnapshot>,
    pub resolved: Option<ResolvedLocation>,
    pub segment: Option<DrivingSegment>,
}

impl ItineraryEntry {
    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or("Unknown Location")
    }
}

/// Itinerary rows for every event of the trip, in trip order.
pub fn build_itinerary(trip: &TripPlan) -> Vec<ItineraryEntry> {
    let polyline = trip.polyline();
    let resolver = LocationResolver::new(trip, &polyline);
    let summaries = Core::build_trip_summaries(trip, &HosLimits::default());
    build_itinerary_with(trip, &summaries, &resolver)
}

/// Same as [`build_itinerary`], reusing the day summaries and resolver the
/// caller already built for this render pass. Start hours come from the
/// timeline spans, so rows line up with the log grid.
pub fn build_itinerary_with(
    trip: &TripPlan,
    summaries: &[DaySummary],
    resolver: &LocationResolver<'_>,
) -> Vec<ItineraryEntry> {
    let mut entries = Vec::with_capacity(trip.event_count());
    let mut global_index = 0;

    for (i, day) in trip.logs.iter().enumerate() {
        let day_no = day_number(day, i);
        let spans = day_spans(summaries, i);

        for (j, ev) in day.events.iter().enumerate() {
            let kind = EventKind::classify(ev);
            let start_hour = ev
                .declared_start_hours()
                .unwrap_or_else(|| span_start(spans, j));
            let duration_hours = ev.duration_hours();

            let description = kind
                .canonical_description()
                .map(str::to_string)
                .or_else(|| ev.description.clone())
                .unwrap_or_else(|| ev.status.as_str().to_string());

            entries.push(ItineraryEntry {
                event_number: global_index + 1,
                day_number: day_no,
                global_index,
                status: ev.status.as_str().to_string(),
                start_hour,
                start_label: format!("Day {day_no}, {}", format_clock(start_hour)),
                duration_hours,
                duration_label: format_duration(duration_hours),
                location: ev.location.clone().filter(|l| !l.trim().is_empty()),
                description,
                route: ev.description.clone().filter(|d| d.contains("Drive")),
                distance: ev.distance,
                hos_after: ev.hos_after,
                resolved: resolver.resolve(global_index),
                segment: resolver.driving_segment(global_index),
                kind,
            });

            global_index += 1;
        }
    }

    entries
}

pub(crate) fn day_spans(summaries: &[DaySummary], day_index: usize) -> &[Span] {
    summaries
        .get(day_index)
        .map(|s| s.timeline.spans.as_slice())
        .unwrap_or_default()
}

pub(crate) fn span_start(spans: &[Span], event_index: usize) -> f64 {
    spans.get(event_index).map_or(0.0, |s| s.start_hour)
}
