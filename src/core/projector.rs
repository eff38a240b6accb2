//! Route-position projection: elapsed driving time → point on the route.
//!
//! Progress for an event is the share of trip driving time completed before
//! the event starts. That share is mapped onto the polyline by index, so the
//! same event always lands on the same vertex no matter which view asks.

use crate::core::geo::{RoutePolyline, haversine_miles};
use crate::models::duty_event::DutyEvent;
use crate::models::geo_point::GeoPoint;
use crate::models::log_day::LogDay;
use serde::Serialize;

/// Nudge applied before flooring so that values like 28.999999999999996
/// land on 29. Far smaller than any real progress step.
const INDEX_EPSILON: f64 = 1e-9;

/// Trip-wide driving totals, computed once per render pass.
#[derive(Debug, Clone)]
pub struct ProjectionContext<'a> {
    events: Vec<&'a DutyEvent>,
    /// accumulated[i] = driving seconds strictly before event i
    accumulated: Vec<f64>,
    total_driving_seconds: f64,
}

impl<'a> ProjectionContext<'a> {
    pub fn new(logs: &'a [LogDay]) -> Self {
        let events: Vec<&DutyEvent> = logs.iter().flat_map(|d| d.events.iter()).collect();

        let mut accumulated = Vec::with_capacity(events.len());
        let mut running = 0.0;
        for ev in &events {
            accumulated.push(running);
            running += ev.driving_seconds();
        }

        log::debug!(
            "projection context: {} event(s), {:.0}s total driving",
            events.len(),
            running
        );

        Self {
            events,
            accumulated,
            total_driving_seconds: running,
        }
    }

    pub fn total_driving_seconds(&self) -> f64 {
        self.total_driving_seconds
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn event(&self, global_index: usize) -> Option<&'a DutyEvent> {
        self.events.get(global_index).copied()
    }

    /// Driving seconds before `global_index`. Out-of-range indices count as
    /// the start of the trip.
    pub fn accumulated_before(&self, global_index: usize) -> f64 {
        self.accumulated.get(global_index).copied().unwrap_or(0.0)
    }

    /// Fraction of trip driving done after `accumulated_seconds`, clamped to
    /// [0, 1]. None when the trip has no driving at all.
    pub fn progress_for(&self, accumulated_seconds: f64) -> Option<f64> {
        if self.total_driving_seconds <= 0.0 {
            return None;
        }
        Some((accumulated_seconds / self.total_driving_seconds).clamp(0.0, 1.0))
    }

    pub fn progress(&self, global_index: usize) -> Option<f64> {
        self.progress_for(self.accumulated_before(global_index))
    }
}

/// Polyline vertex for a progress fraction.
pub fn point_at_progress(polyline: &RoutePolyline, progress: f64) -> Option<GeoPoint> {
    let index = index_at_progress(polyline.len(), progress)?;
    polyline.get(index)
}

/// `floor(progress * (len - 1))`, clamped to valid bounds.
pub fn index_at_progress(len: usize, progress: f64) -> Option<usize> {
    if len == 0 || !progress.is_finite() {
        return None;
    }
    let last = len - 1;
    let raw = (progress.clamp(0.0, 1.0) * last as f64 + INDEX_EPSILON).floor();
    Some((raw as usize).min(last))
}

/// Start and end of a driven leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrivingSegment {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub start_progress: f64,
    pub end_progress: f64,
    pub distance_miles: f64,
}

/// Projects events of one trip onto its route.
#[derive(Debug, Clone)]
pub struct Projector<'a> {
    context: ProjectionContext<'a>,
    polyline: &'a RoutePolyline,
    start: Option<GeoPoint>,
}

impl<'a> Projector<'a> {
    /// `start` is returned when the trip has no driving to project against.
    pub fn new(logs: &'a [LogDay], polyline: &'a RoutePolyline, start: Option<GeoPoint>) -> Self {
        Self {
            context: ProjectionContext::new(logs),
            polyline,
            start,
        }
    }

    pub fn context(&self) -> &ProjectionContext<'a> {
        &self.context
    }

    pub fn polyline(&self) -> &RoutePolyline {
        self.polyline
    }

    /// Position of the event at `global_index`.
    pub fn project(&self, global_index: usize) -> Option<GeoPoint> {
        if self.polyline.is_empty() {
            return None;
        }
        match self.context.progress(global_index) {
            Some(progress) => point_at_progress(self.polyline, progress),
            None => self.start,
        }
    }

    /// Both endpoints of a Driving event's leg. None for non-driving events,
    /// an empty polyline or a trip without driving.
    pub fn driving_segment(&self, global_index: usize) -> Option<DrivingSegment> {
        let event = self.context.event(global_index)?;
        if !event.is_driving() {
            return None;
        }

        let before = self.context.accumulated_before(global_index);
        let start_progress = self.context.progress_for(before)?;
        let end_progress = self
            .context
            .progress_for(before + event.duration_seconds())?;

        let start = point_at_progress(self.polyline, start_progress)?;
        let end = point_at_progress(self.polyline, end_progress)?;

        Some(DrivingSegment {
            start,
            end,
            start_progress,
            end_progress,
            distance_miles: haversine_miles(&start, &end),
        })
    }
}

/// One-shot projection without a memoised context.
pub fn project_event_position(
    logs: &[LogDay],
    global_index: usize,
    polyline: &RoutePolyline,
    start: Option<GeoPoint>,
) -> Option<GeoPoint> {
    Projector::new(logs, polyline, start).project(global_index)
}
