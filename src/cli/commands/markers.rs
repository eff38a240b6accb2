use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::markers::build_markers;
use crate::core::resolver::LocationResolver;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Markers { trip } = cmd {
        let plan = load_trip(trip)?;
        let polyline = plan.polyline();
        let resolver = LocationResolver::new(&plan, &polyline);

        let summaries = Core::build_trip_summaries(&plan, &cfg.limits());
        let markers = build_markers(&plan, &summaries, &resolver);
        if markers.is_empty() {
            info("No markers for this trip.");
            return Ok(());
        }

        header("Map markers");
        let mut table =
            Table::with_headers(&["Event", "Marker", "Position", "Location", "Time", "Duration"]);
        for m in &markers {
            table.add_row(vec![
                m.event_index.to_string(),
                m.title.clone(),
                m.position.to_string(),
                m.details.location.clone(),
                m.details.time.clone(),
                m.details.duration.clone(),
            ]);
        }
        print!("{}", table.render(cfg.separator()));

        if let Some(center) = polyline.center() {
            info(format!("Route centre: {center}"));
        }
    }
    Ok(())
}
