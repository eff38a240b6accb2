// src/export/logic.rs

use crate::config::Config;
use crate::core::itinerary::build_itinerary;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::log_sheet::{LogSheetLayout, build_log_sheets};
use crate::export::model::ItineraryExport;
use crate::export::pdf_export::export_log_sheets;
use crate::export::xlsx::export_xlsx;
use crate::models::trip::TripPlan;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a trip.
    ///
    /// - `pdf`: one daily log sheet per day
    /// - `csv` | `json` | `xlsx`: the itinerary, one row per event
    ///
    /// `file` must be an absolute path.
    pub fn export(
        trip: &TripPlan,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Pdf => {
                let summaries = Core::build_trip_summaries(trip, &cfg.limits());
                let layout = LogSheetLayout {
                    label_chars: cfg.remark_label_chars,
                    ..LogSheetLayout::default()
                };
                let frames = build_log_sheets(&summaries, trip, &layout, cfg);
                export_log_sheets(&frames, path)?;
            }
            ExportFormat::Csv => export_csv(&itinerary_rows(trip), path)?,
            ExportFormat::Json => export_json(&itinerary_rows(trip), path)?,
            ExportFormat::Xlsx => export_xlsx(&itinerary_rows(trip), path)?,
        }

        Ok(())
    }
}

fn itinerary_rows(trip: &TripPlan) -> Vec<ItineraryExport> {
    let rows: Vec<ItineraryExport> = build_itinerary(trip)
        .iter()
        .map(ItineraryExport::from)
        .collect();

    if rows.is_empty() {
        warning("Trip has no events; writing an empty itinerary.");
    }
    rows
}
