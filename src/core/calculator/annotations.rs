use crate::core::calculator::steps::Span;
use crate::models::duty_event::DutyEvent;
use serde::Serialize;

/// Something to mark under the grid at an event's start hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub event_index: usize,
    pub hour: f64,
    /// 1-based arrow number, only for events with remarks
    pub remark_number: Option<u32>,
    pub location: Option<String>,
    pub activity: Option<String>,
}

/// Collect annotations in event order. Zero-duration events are included.
pub fn collect_annotations(events: &[DutyEvent], spans: &[Span]) -> Vec<Annotation> {
    let mut next_remark = 1;

    events
        .iter()
        .zip(spans)
        .filter_map(|(ev, span)| {
            let location = non_blank(ev.location.as_deref());
            let activity = non_blank(ev.description.as_deref())
                .or_else(|| non_blank(ev.remarks.as_deref()));

            let remark_number = ev.has_remarks().then(|| {
                let n = next_remark;
                next_remark += 1;
                n
            });

            if remark_number.is_none() && location.is_none() && activity.is_none() {
                return None;
            }

            Some(Annotation {
                event_index: span.event_index,
                hour: span.start_hour,
                remark_number,
                location,
                activity,
            })
        })
        .collect()
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
