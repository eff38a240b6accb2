use super::duty_event::DutyEvent;
use super::geo_point::GeoPoint;
use super::log_day::LogDay;
use crate::core::geo::RoutePolyline;
use crate::errors::AppResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A geocoded trip stop (start, pickup or dropoff).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_name: Option<String>,
}

impl TripLocation {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Preferred label: formatted name, then raw name.
    pub fn display_name(&self) -> Option<&str> {
        self.formatted_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Driver / vehicle identity echoed back by the backend.
/// Every field is optional; placeholders are applied only when rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogInfo {
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub driver_license: Option<String>,
    #[serde(default)]
    pub license_state: Option<String>,
    #[serde(default)]
    pub carrier_name: Option<String>,
    #[serde(default)]
    pub truck_number: Option<String>,
    #[serde(default)]
    pub trailer_number: Option<String>,
    #[serde(default)]
    pub co_driver: Option<String>,
}

/// The backend trip result (`routeData`). Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<LogDay>,

    /// `[lng, lat]` pairs, longitude first as on the wire. Entries that are
    /// not arrays of numbers decode as empty and are dropped by the polyline.
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub route_geometry: Vec<Vec<f64>>,

    #[serde(default)]
    pub start_location: Option<TripLocation>,
    #[serde(default)]
    pub pickup_location: Option<TripLocation>,
    #[serde(default)]
    pub dropoff_location: Option<TripLocation>,

    #[serde(default)]
    pub total_distance_miles: Option<f64>,
    #[serde(default)]
    pub total_driving_time_hours: Option<f64>,

    #[serde(default)]
    pub log_info: Option<LogInfo>,
}

impl TripPlan {
    pub fn from_json_str(s: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let trip = Self::from_json_str(&content)?;
        log::debug!(
            "loaded trip from {}: {} day(s), {} route point(s)",
            path.display(),
            trip.logs.len(),
            trip.route_geometry.len()
        );
        Ok(trip)
    }

    /// Route polyline in `(lat, lng)` order.
    pub fn polyline(&self) -> RoutePolyline {
        RoutePolyline::from_wire(&self.route_geometry)
    }

    /// Log day by its 1-based number, with its position in `logs`.
    pub fn find_day(&self, number: u32) -> Option<(usize, &LogDay)> {
        self.logs
            .iter()
            .enumerate()
            .find(|(i, d)| day_number(d, *i) == number)
    }

    /// All events in trip order, tagged with their 1-based day number.
    pub fn events(&self) -> impl Iterator<Item = (u32, &DutyEvent)> + '_ {
        self.logs
            .iter()
            .enumerate()
            .flat_map(|(i, day)| day.events.iter().map(move |e| (day_number(day, i), e)))
    }

    pub fn event_count(&self) -> usize {
        self.logs.iter().map(|d| d.events.len()).sum()
    }

    pub fn total_distance(&self) -> f64 {
        finite_or_zero(self.total_distance_miles)
    }

    pub fn total_driving_hours(&self) -> f64 {
        finite_or_zero(self.total_driving_time_hours)
    }

    pub fn start_point(&self) -> Option<GeoPoint> {
        self.start_location.as_ref().map(TripLocation::point)
    }
}

/// Day number of the `index`-th log, falling back to its position.
pub fn day_number(day: &LogDay, index: usize) -> u32 {
    if day.day > 0 { day.day } else { index as u32 + 1 }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
    v.filter(|x| x.is_finite() && *x > 0.0).unwrap_or(0.0)
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_geometry<'de, D>(deserializer: D) -> Result<Vec<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = null_as_default(deserializer)?;

    Ok(raw
        .iter()
        .map(|entry| {
            entry
                .as_array()
                .and_then(|items| {
                    items.iter().take(2).map(Value::as_f64).collect::<Option<Vec<f64>>>()
                })
                .unwrap_or_default()
        })
        .collect())
}
