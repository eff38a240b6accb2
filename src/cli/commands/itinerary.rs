use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::itinerary::{ItineraryEntry, build_itinerary_with};
use crate::core::logic::Core;
use crate::core::resolver::{LocationResolver, LocationSource};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::formatting::bold;
use textwrap::Options;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Itinerary { trip, day } = cmd {
        let plan = load_trip(trip)?;
        let polyline = plan.polyline();
        let resolver = LocationResolver::new(&plan, &polyline);

        if let Some(n) = day
            && plan.find_day(*n).is_none()
        {
            return Err(AppError::InvalidDay(*n));
        }

        let summaries = Core::build_trip_summaries(&plan, &cfg.limits());
        let entries: Vec<ItineraryEntry> = build_itinerary_with(&plan, &summaries, &resolver)
            .into_iter()
            .filter(|e| day.is_none_or(|n| e.day_number == n))
            .collect();

        if entries.is_empty() {
            warning("No events to show.");
            return Ok(());
        }

        header("Itinerary");
        for e in &entries {
            print_entry(e, cfg);
        }
    }
    Ok(())
}

fn print_entry(e: &ItineraryEntry, cfg: &Config) {
    println!(
        "{} {GREY}[{}]{RESET}  {}  {}  ({})",
        bold(&format!("#{}", e.event_number)),
        e.global_index,
        e.start_label,
        bold(e.kind.label()),
        e.duration_label
    );
    println!("    Location: {}", e.location_label());

    match e.resolved {
        Some(r) => println!("    Position: {CYAN}{}{RESET} ({})", r.point, source_text(r.source)),
        None => println!("    Position: {GREY}not on map{RESET}"),
    }

    if let Some(seg) = e.segment {
        println!(
            "    Leg:      {} -> {} ({:.1} mi)",
            seg.start, seg.end, seg.distance_miles
        );
    }
    if let Some(d) = e.distance {
        println!("    Distance: {d:.1} mi");
    }
    if let Some(h) = e.hos_after {
        println!(
            "    HOS left: {:.1}h driving, {:.1}h window",
            h.daily_driving_remaining, h.on_duty_window_remaining
        );
    }

    let opts = Options::new(78)
        .initial_indent("    ")
        .subsequent_indent("    ");
    println!("{}", textwrap::fill(&e.description, opts));

    println!("{}", cfg.separator().to_string().repeat(78));
}

fn source_text(source: LocationSource) -> String {
    match source {
        LocationSource::Coordinates => "coordinates".to_string(),
        LocationSource::TripStop(kind) => format!("trip stop: {kind:?}").to_lowercase(),
        LocationSource::Projected => "projected on route".to_string(),
        LocationSource::EnRouteEstimate => "rough estimate".to_string(),
    }
}
