//! "Where is this event?" One precedence chain shared by the map, the
//! itinerary, the log sheet and the CLI.
//!
//! Driving events always take their projected leg start when the route allows
//! it. Everything else goes through:
//!
//! 1. an explicit `"lat, lng"` location string
//! 2. a trip stop (start / pickup / dropoff) matched by name or keyword
//! 3. the projected route position, for en-route events
//! 4. nothing (text-only, no map affordance)
//!
//! Step 3 has a labelled last-resort estimate that places breaks, resets and
//! fuel stops at fixed fractions of the route when projection yields nothing.

use crate::core::geo::{RoutePolyline, parse_coordinates};
use crate::core::itinerary::EventKind;
use crate::core::projector::{DrivingSegment, Projector};
use crate::models::duty_event::DutyEvent;
use crate::models::geo_point::GeoPoint;
use crate::models::trip::{TripLocation, TripPlan};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopKind {
    Start,
    Pickup,
    Dropoff,
}

impl StopKind {
    fn keyword(&self) -> &'static str {
        match self {
            StopKind::Start => "Pre-Trip",
            StopKind::Pickup => "Pickup",
            StopKind::Dropoff => "Dropoff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationSource {
    Coordinates,
    TripStop(StopKind),
    Projected,
    /// Fixed-fraction guess; only used when projection is impossible.
    EnRouteEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub source: LocationSource,
}

/// Resolves event positions for one trip. Build once per render pass.
#[derive(Debug, Clone)]
pub struct LocationResolver<'a> {
    trip: &'a TripPlan,
    projector: Projector<'a>,
}

impl<'a> LocationResolver<'a> {
    pub fn new(trip: &'a TripPlan, polyline: &'a RoutePolyline) -> Self {
        Self {
            trip,
            projector: Projector::new(&trip.logs, polyline, trip.start_point()),
        }
    }

    pub fn projector(&self) -> &Projector<'a> {
        &self.projector
    }

    pub fn event_count(&self) -> usize {
        self.projector.context().event_count()
    }

    /// Resolve the event at `global_index` (trip-wide order).
    pub fn resolve(&self, global_index: usize) -> Option<ResolvedLocation> {
        let event = self.projector.context().event(global_index)?;
        let location = event.location_str();

        // Driving events sit at the start of their leg, whatever the location text
        // says, so every view agrees with `driving_segment`
        if event.is_driving()
            && let Some(point) = self.projector.project(global_index)
        {
            return Some(ResolvedLocation {
                point,
                source: LocationSource::Projected,
            });
        }

        // 1. explicit coordinates
        if let Some(point) = parse_coordinates(location) {
            return Some(ResolvedLocation {
                point,
                source: LocationSource::Coordinates,
            });
        }

        // 2. trip stops (a Driving event is placed by its leg, never pinned)
        if !event.is_driving()
            && let Some((kind, stop)) = self.match_trip_stop(event)
        {
            return Some(ResolvedLocation {
                point: stop.point(),
                source: LocationSource::TripStop(kind),
            });
        }

        // 3. projection along the route
        if is_en_route(location) {
            if let Some(point) = self.projector.project(global_index) {
                return Some(ResolvedLocation {
                    point,
                    source: LocationSource::Projected,
                });
            }

            if let Some(point) = self.estimate_en_route(event) {
                log::debug!("event {global_index}: using fixed-fraction route estimate");
                return Some(ResolvedLocation {
                    point,
                    source: LocationSource::EnRouteEstimate,
                });
            }
        }

        None
    }

    /// Endpoints of a Driving event's leg.
    pub fn driving_segment(&self, global_index: usize) -> Option<DrivingSegment> {
        self.projector.driving_segment(global_index)
    }

    fn match_trip_stop(&self, event: &DutyEvent) -> Option<(StopKind, &'a TripLocation)> {
        let stops = [
            (StopKind::Start, self.trip.start_location.as_ref()),
            (StopKind::Pickup, self.trip.pickup_location.as_ref()),
            (StopKind::Dropoff, self.trip.dropoff_location.as_ref()),
        ];

        stops.into_iter().find_map(|(kind, stop)| {
            let stop = stop?;
            stop_matches(stop, kind, event).then_some((kind, stop))
        })
    }

    /// Last-resort placement for en-route stops whose timing cannot be
    /// projected. Fractions are rough guesses, not derived from the schedule.
    fn estimate_en_route(&self, event: &DutyEvent) -> Option<GeoPoint> {
        if !event.location_str().to_lowercase().contains("en route") {
            return None;
        }

        let fraction = match EventKind::classify(event) {
            EventKind::FuelingStop => 0.3,
            EventKind::ThirtyMinuteBreak => 0.4,
            EventKind::TenHourReset => 0.6,
            _ => return None,
        };

        let polyline = self.projector.polyline();
        let index = (polyline.len() as f64 * fraction).floor() as usize;
        polyline.get(index)
    }
}

fn stop_matches(stop: &TripLocation, kind: StopKind, event: &DutyEvent) -> bool {
    let location = event.location_str();

    let exact = !location.is_empty()
        && (stop.formatted_name.as_deref() == Some(location)
            || stop.name.as_deref() == Some(location));

    // "En route to <stop>" names the destination, not the current place
    let contains = !is_en_route(location)
        && stop
            .formatted_name
            .as_deref()
            .is_some_and(|f| !f.is_empty() && location.contains(f));

    let by_name = exact || contains;

    by_name || event.description_contains(kind.keyword())
}

fn is_en_route(location: &str) -> bool {
    let lower = location.to_lowercase();
    lower.contains("en route") || lower.contains("toward")
}
