use crate::core::itinerary::{EventKind, day_spans, span_start};
use crate::core::resolver::{LocationResolver, LocationSource, StopKind};
use crate::models::day_summary::DaySummary;
use crate::models::duty_event::DutyEvent;
use crate::models::duty_status::DutyStatus;
use crate::models::geo_point::GeoPoint;
use crate::models::trip::{TripPlan, day_number};
use crate::utils::formatting::format_clock;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Start,
    Pickup,
    Dropoff,
    ThirtyMinBreak,
    TenHourReset,
    ThirtyFourHourRestart,
    FuelingStop,
}

impl MarkerKind {
    /// Which events get a marker. Pickup and dropoff must be On Duty.
    pub fn for_event(event: &DutyEvent) -> Option<Self> {
        let on_duty = event.status.known() == Some(DutyStatus::OnDuty);

        if event.description_contains("Pre-Trip") {
            return Some(MarkerKind::Start);
        }

        match EventKind::classify(event) {
            EventKind::LoadCargo if on_duty => Some(MarkerKind::Pickup),
            EventKind::UnloadCargo if on_duty => Some(MarkerKind::Dropoff),
            EventKind::ThirtyMinuteBreak => Some(MarkerKind::ThirtyMinBreak),
            EventKind::TenHourReset => Some(MarkerKind::TenHourReset),
            EventKind::ThirtyFourHourRestart => Some(MarkerKind::ThirtyFourHourRestart),
            EventKind::FuelingStop => Some(MarkerKind::FuelingStop),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MarkerKind::Start => "Start Location",
            MarkerKind::Pickup => "Pickup Location",
            MarkerKind::Dropoff => "Dropoff Location",
            MarkerKind::ThirtyMinBreak => "30-Minute Break",
            MarkerKind::TenHourReset => "10-Hour Reset",
            MarkerKind::ThirtyFourHourRestart => "34-Hour Restart",
            MarkerKind::FuelingStop => "Fueling Stop",
        }
    }

    fn event_label(&self) -> &'static str {
        match self {
            MarkerKind::Start => "Begin Trip",
            MarkerKind::Pickup => "Load Cargo",
            MarkerKind::Dropoff => "Unload Cargo",
            other => other.title(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            MarkerKind::Start => "Pre-trip inspection and journey start",
            MarkerKind::Pickup => "Cargo pickup and loading",
            MarkerKind::Dropoff => "Final destination and cargo unloading",
            MarkerKind::ThirtyMinBreak => "Mandatory 30-minute break required by HOS regulations",
            MarkerKind::TenHourReset => {
                "Mandatory 10-hour rest period required by HOS regulations"
            }
            MarkerKind::ThirtyFourHourRestart => {
                "Mandatory 34-hour restart required by HOS regulations"
            }
            MarkerKind::FuelingStop => "Scheduled fueling stop",
        }
    }
}

/// Popup text shown for a marker.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerDetails {
    pub event: String,
    pub location: String,
    pub time: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub title: String,
    /// Trip-wide index; the itinerary row with the same index is the same event
    pub event_index: usize,
    pub position: GeoPoint,
    pub source: LocationSource,
    pub details: MarkerDetails,
}

/// Markers for the notable events of a trip. Events whose position cannot
/// be resolved get no marker. `summaries` are the day summaries of `trip`,
/// one per log in order.
pub fn build_markers(
    trip: &TripPlan,
    summaries: &[DaySummary],
    resolver: &LocationResolver<'_>,
) -> Vec<MapMarker> {
    let mut markers = Vec::new();
    let mut global_index = 0;

    for (i, day) in trip.logs.iter().enumerate() {
        let day_no = day_number(day, i);
        let spans = day_spans(summaries, i);

        for (j, event) in day.events.iter().enumerate() {
            let index = global_index;
            global_index += 1;

            let Some(kind) = MarkerKind::for_event(event) else {
                continue;
            };
            let Some(resolved) = resolver.resolve(index) else {
                log::debug!("event {index}: no position for {} marker", kind.title());
                continue;
            };

            let start_hour = event
                .declared_start_hours()
                .unwrap_or_else(|| span_start(spans, j));

            markers.push(MapMarker {
                kind,
                title: kind.title().to_string(),
                event_index: index,
                position: resolved.point,
                source: resolved.source,
                details: MarkerDetails {
                    event: kind.event_label().to_string(),
                    location: marker_location(trip, resolved.source, resolved.point),
                    time: format!("Day {day_no}, {}", format_clock(start_hour)),
                    duration: format!("{} hours", (event.duration_hours() * 100.0).round() / 100.0),
                    description: kind.description().to_string(),
                },
            });
        }
    }

    markers
}

fn marker_location(trip: &TripPlan, source: LocationSource, point: GeoPoint) -> String {
    let stop = match source {
        LocationSource::TripStop(StopKind::Start) => trip.start_location.as_ref(),
        LocationSource::TripStop(StopKind::Pickup) => trip.pickup_location.as_ref(),
        LocationSource::TripStop(StopKind::Dropoff) => trip.dropoff_location.as_ref(),
        _ => None,
    };

    stop.and_then(|s| s.display_name())
        .map(str::to_string)
        .unwrap_or_else(|| point.to_string())
}
