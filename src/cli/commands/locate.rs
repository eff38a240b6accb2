use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolver::LocationResolver;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, header, info};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Locate { trip, event } = cmd {
        let plan = load_trip(trip)?;
        let polyline = plan.polyline();
        let resolver = LocationResolver::new(&plan, &polyline);

        let count = resolver.event_count();
        let ev = resolver
            .projector()
            .context()
            .event(*event)
            .ok_or(AppError::InvalidEventIndex {
                index: *event,
                count,
            })?;

        header(format!("Event {event}"));
        field("Status", &ev.status);
        field("Description", ev.description_str());
        field("Location", ev.location_str());

        if let Some(p) = resolver.projector().context().progress(*event) {
            field("Route progress", format!("{:.1}%", p * 100.0));
        }

        match resolver.resolve(*event) {
            Some(r) => {
                field("Position", r.point);
                field("Source", format!("{:?}", r.source));
            }
            None => info("No map position for this event."),
        }

        if let Some(seg) = resolver.driving_segment(*event) {
            field("Leg start", seg.start);
            field("Leg end", seg.end);
            field("Leg distance", format!("{:.1} mi", seg.distance_miles));
        }
    }
    Ok(())
}
