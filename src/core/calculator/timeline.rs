use crate::core::calculator::annotations::{Annotation, collect_annotations};
use crate::core::calculator::compliance::{HosLimits, Violation, check_compliance};
use crate::core::calculator::steps::{DAY_HOURS, Span, Step, build_steps, place_events};
use crate::core::calculator::totals::calculate_totals;
use crate::models::duty_event::DutyEvent;
use crate::models::duty_status::EventStatus;
use crate::models::totals::Totals;
use serde::Serialize;

/// Allowed drift between the totals sum and 24h.
pub const TOTALS_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Serialize)]
pub struct DayTimeline {
    pub totals: Totals,
    pub steps: Vec<Step>,
    pub violations: Vec<Violation>,
    pub annotations: Vec<Annotation>,
    #[serde(skip)]
    pub spans: Vec<Span>,
    /// Raw status strings that were booked as On Duty
    pub unrecognized_statuses: Vec<String>,
}

impl Default for DayTimeline {
    fn default() -> Self {
        compute_day_timeline(&[])
    }
}

pub fn compute_day_timeline(events: &[DutyEvent]) -> DayTimeline {
    compute_day_timeline_with(events, &HosLimits::default())
}

pub fn compute_day_timeline_with(events: &[DutyEvent], limits: &HosLimits) -> DayTimeline {
    // -----------------------------
    // Place events on the day axis
    // -----------------------------
    let spans = place_events(events);

    // -----------------------------
    // Totals and step function
    // -----------------------------
    let totals = calculate_totals(&spans);
    let steps = build_steps(&spans);

    let grand_total = totals.sum();
    if (grand_total - DAY_HOURS).abs() > TOTALS_TOLERANCE {
        log::warn!("day totals sum to {grand_total:.2}h instead of 24.00h");
    }

    // -----------------------------
    // Unrecognised statuses
    // -----------------------------
    let unrecognized_statuses: Vec<String> = events
        .iter()
        .filter_map(|e| match &e.status {
            EventStatus::Unrecognized(raw) => Some(raw.clone()),
            EventStatus::Known(_) => None,
        })
        .collect();

    for raw in &unrecognized_statuses {
        log::warn!("unknown duty status {raw:?} booked as On Duty");
    }

    // -----------------------------
    // Compliance (advisory)
    // -----------------------------
    let violations = check_compliance(&totals, limits);
    for v in &violations {
        log::warn!("HOS violation: {v}");
    }

    let annotations = collect_annotations(events, &spans);

    log::debug!(
        "timeline: {} event(s), {} step(s), off={:.2} sb={:.2} drv={:.2} on={:.2}",
        events.len(),
        steps.len(),
        totals.off_duty,
        totals.sleeper_berth,
        totals.driving,
        totals.on_duty
    );

    DayTimeline {
        totals,
        steps,
        violations,
        annotations,
        spans,
        unrecognized_statuses,
    }
}
