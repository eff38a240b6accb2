use crate::cli::commands::load_trip;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::summary::generate_trip_summary;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::ui::messages::{field, header, violation, warning};
use crate::utils::colors::{RESET, color_for_compliance, color_for_status};
use crate::utils::date::format_log_date;
use crate::utils::formatting::format_hours_hmm;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { trip, day } = cmd {
        let plan = load_trip(trip)?;
        let limits = cfg.limits();

        let summaries = match day {
            Some(n) => {
                let (index, log_day) = plan.find_day(*n).ok_or(AppError::InvalidDay(*n))?;
                vec![Core::build_daily_summary(log_day, index, &plan, &limits)]
            }
            None => Core::build_trip_summaries(&plan, &limits),
        };

        if summaries.is_empty() {
            warning("Trip has no log days.");
        }

        for s in &summaries {
            print_day(s, cfg);
        }

        if day.is_none() {
            let t = generate_trip_summary(&plan);
            header("Trip");
            field("Total miles", t.total_miles);
            field("Driving time", format!("{:.1}h", t.total_driving_hours));
            field("Duration", t.trip_duration_label());
            field("10-hour resets", t.ten_hour_resets);
            field("30-minute breaks", t.thirty_min_breaks);
            field("Fueling stops", t.fueling_stops);
            field("Total stops", t.total_stops);
        }
    }
    Ok(())
}

fn print_day(s: &DaySummary, cfg: &Config) {
    let title = match s.date {
        Some(d) => format!("Day {} ({})", s.day_number, format_log_date(d)),
        None => format!("Day {}", s.day_number),
    };
    header(title);

    let totals = &s.timeline.totals;
    let mut table = Table::with_headers(&["Status", "Hours"]);
    for (status, hours) in totals.iter() {
        table.add_row(vec![
            format!("{}{}{}", color_for_status(status), status, RESET),
            format_hours_hmm(hours),
        ]);
    }
    table.add_row(vec!["Total".to_string(), format_hours_hmm(totals.sum())]);
    print!("{}", table.render(cfg.separator()));

    field("Miles today", s.miles_today);
    field("On-duty window", format_hours_hmm(s.on_duty_hours()));

    let compliant = s.is_compliant();
    field(
        "HOS",
        format!(
            "{}{}{}",
            color_for_compliance(compliant),
            if compliant { "compliant" } else { "violations" },
            RESET
        ),
    );
    for v in &s.timeline.violations {
        violation(v);
    }

    for raw in &s.timeline.unrecognized_statuses {
        if raw.is_empty() {
            warning("Event without status counted as On Duty");
        } else {
            warning(format!("Unknown status '{raw}' counted as On Duty"));
        }
    }
    println!();
}
