use crate::core::calculator::steps::{DAY_HOURS, Span};
use crate::models::totals::Totals;

/// Per-status hours for one day.
///
/// Each placed span is credited to its status bucket; events pushed past the
/// 24h mark were already clipped to zero width by placement. Whatever the
/// events leave uncovered is credited to Off Duty, so the sum is always 24.
pub fn calculate_totals(spans: &[Span]) -> Totals {
    let mut totals = Totals::default();
    let mut assigned = 0.0;

    for span in spans {
        let hours = span.hours();
        totals.add(span.status, hours);
        assigned += hours;
    }

    if assigned < DAY_HOURS {
        totals.off_duty += DAY_HOURS - assigned;
    }

    totals
}
