//! Placement of a day's events on the 24-hour axis and the resulting
//! step function. Every renderer draws from these segments; none of them
//! re-derives event positions on its own.

use crate::models::duty_event::DutyEvent;
use crate::models::duty_status::DutyStatus;
use serde::Serialize;

pub const DAY_HOURS: f64 = 24.0;

/// Widths at or below this are treated as zero.
pub(crate) const EPSILON_HOURS: f64 = 1e-9;

/// Where one event lands on the day axis after clipping at 24h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub event_index: usize,
    pub status: DutyStatus,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl Span {
    pub fn hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

/// Lay events end to end from hour 0. Events past the 24h mark get a
/// zero-width span at 24.
pub fn place_events(events: &[DutyEvent]) -> Vec<Span> {
    let mut cursor = 0.0_f64;

    events
        .iter()
        .enumerate()
        .map(|(event_index, ev)| {
            let start_hour = cursor;
            let end_hour = (cursor + ev.duration_hours()).min(DAY_HOURS);
            cursor = end_hour;

            Span {
                event_index,
                status: ev.status.effective(),
                start_hour,
                end_hour,
            }
        })
        .collect()
}

/// One piece of the duty-status step function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub start_hour: f64,
    pub end_hour: f64,
    pub status: DutyStatus,
}

impl Step {
    pub fn hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    pub fn contains(&self, hour: f64) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Build gap-free segments over `[0, 24)`.
///
/// Zero-width spans are skipped, neighbours with the same status are merged
/// and any uncovered tail is Off Duty.
pub fn build_steps(spans: &[Span]) -> Vec<Step> {
    let mut steps: Vec<Step> = Vec::new();

    for span in spans.iter().filter(|s| s.hours() > EPSILON_HOURS) {
        push_step(&mut steps, span.end_hour, span.status);
    }

    let covered = steps.last().map_or(0.0, |s| s.end_hour);
    if DAY_HOURS - covered > EPSILON_HOURS {
        push_step(&mut steps, DAY_HOURS, DutyStatus::OffDuty);
    } else if let Some(last) = steps.last_mut() {
        last.end_hour = DAY_HOURS;
    }

    steps
}

fn push_step(steps: &mut Vec<Step>, end_hour: f64, status: DutyStatus) {
    // start where the previous step ended so floating drift never opens a gap
    let start_hour = steps.last().map_or(0.0, |s| s.end_hour);

    if let Some(last) = steps.last_mut()
        && last.status == status
    {
        last.end_hour = end_hour;
        return;
    }

    steps.push(Step {
        start_hour,
        end_hour,
        status,
    });
}

/// Status active at `hour` (Off Duty outside the day).
pub fn status_at(steps: &[Step], hour: f64) -> DutyStatus {
    steps
        .iter()
        .find(|s| s.contains(hour))
        .map_or(DutyStatus::OffDuty, |s| s.status)
}
