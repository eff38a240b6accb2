// src/export/model.rs

use crate::core::itinerary::ItineraryEntry;
use crate::core::resolver::LocationSource;
use serde::Serialize;

/// Flat itinerary row for CSV / JSON / XLSX.
#[derive(Serialize, Clone, Debug)]
pub struct ItineraryExport {
    pub event: usize,
    pub day: u32,
    pub kind: String,
    pub status: String,
    pub start: String,
    pub duration_hours: f64,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub position_source: String,
    pub distance_miles: Option<f64>,
    pub driving_remaining: Option<f64>,
    pub window_remaining: Option<f64>,
}

impl From<&ItineraryEntry> for ItineraryExport {
    fn from(e: &ItineraryEntry) -> Self {
        Self {
            event: e.event_number,
            day: e.day_number,
            kind: e.kind.to_string(),
            status: e.status.clone(),
            start: e.start_label.clone(),
            duration_hours: round2(e.duration_hours),
            duration: e.duration_label.clone(),
            location: e.location_label().to_string(),
            description: e.description.clone(),
            latitude: e.resolved.map(|r| r.point.lat),
            longitude: e.resolved.map(|r| r.point.lng),
            position_source: e.resolved.map_or_else(String::new, |r| source_label(r.source)),
            distance_miles: e.distance,
            driving_remaining: e.hos_after.map(|h| h.daily_driving_remaining),
            window_remaining: e.hos_after.map(|h| h.on_duty_window_remaining),
        }
    }
}

pub(crate) fn source_label(source: LocationSource) -> String {
    match source {
        LocationSource::Coordinates => "coordinates".to_string(),
        LocationSource::TripStop(kind) => format!("{kind:?}").to_lowercase(),
        LocationSource::Projected => "projected".to_string(),
        LocationSource::EnRouteEstimate => "estimate".to_string(),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Header for CSV / XLSX, in field order
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "event",
        "day",
        "kind",
        "status",
        "start",
        "duration_hours",
        "duration",
        "location",
        "description",
        "latitude",
        "longitude",
        "position_source",
        "distance_miles",
        "driving_remaining",
        "window_remaining",
    ]
}

/// Row as strings (XLSX).
pub(crate) fn itinerary_to_row(e: &ItineraryExport) -> Vec<String> {
    let opt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();

    vec![
        e.event.to_string(),
        e.day.to_string(),
        e.kind.clone(),
        e.status.clone(),
        e.start.clone(),
        e.duration_hours.to_string(),
        e.duration.clone(),
        e.location.clone(),
        e.description.clone(),
        opt(e.latitude),
        opt(e.longitude),
        e.position_source.clone(),
        opt(e.distance_miles),
        opt(e.driving_remaining),
        opt(e.window_remaining),
    ]
}
