// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::log_sheet::LogSheetFrame;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Write all log sheets to one PDF. The batch succeeds or fails as a whole.
pub(crate) fn export_log_sheets(frames: &[LogSheetFrame], path: &Path) -> AppResult<()> {
    info(format!("Exporting log sheets to PDF: {}", path.display()));

    if frames.is_empty() {
        return Err(AppError::Export("no log sheets to export".to_string()));
    }

    let mut pdf = PdfManager::new();
    for frame in frames {
        log::debug!("drawing log sheet for day {}", frame.day_number);
        pdf.draw_frame(frame);
    }

    let pages = pdf.page_count();
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success(&format!("PDF ({pages} log sheet(s))"), path);
    Ok(())
}
