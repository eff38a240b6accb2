//! Geometry of one "Driver's Daily Log" page.
//!
//! A frame is a flat list of shapes in page units with the origin at the
//! top-left corner. It is built only from a day's step function, totals and
//! annotations, so any backend (PDF here) draws the same picture.

use crate::config::Config;
use crate::models::day_summary::DaySummary;
use crate::models::duty_status::DutyStatus;
use crate::models::trip::{LogInfo, TripPlan};
use crate::utils::date::{format_log_date, today};
use crate::utils::formatting::{format_hours_hmm, truncate};

/// Page and grid geometry. Passed to the frame builder explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSheetLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub grid_x: f32,
    pub grid_y: f32,
    pub hour_width: f32,
    pub row_height: f32,
    /// Max characters of each rotated label line
    pub label_chars: usize,
}

impl Default for LogSheetLayout {
    /// A4 landscape, in points.
    fn default() -> Self {
        Self {
            page_width: 842.0,
            page_height: 595.0,
            margin: 30.0,
            grid_x: 110.0,
            grid_y: 170.0,
            hour_width: 25.0,
            row_height: 40.0,
            label_chars: 20,
        }
    }
}

impl LogSheetLayout {
    pub fn grid_width(&self) -> f32 {
        self.hour_width * 24.0
    }

    pub fn grid_bottom(&self) -> f32 {
        self.grid_y + self.row_height * DutyStatus::ALL.len() as f32
    }

    pub fn x_for_hour(&self, hour: f64) -> f32 {
        self.grid_x + hour.clamp(0.0, 24.0) as f32 * self.hour_width
    }

    /// Vertical centre of a status row.
    pub fn y_for_status(&self, status: DutyStatus) -> f32 {
        self.grid_y + (status.row() as f32 + 0.5) * self.row_height
    }

    /// Centre of the totals column right of the grid.
    pub fn totals_center_x(&self) -> f32 {
        let left = self.grid_x + self.grid_width() + 10.0;
        let right = self.page_width - self.margin;
        (left + right) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const GRID: Rgb = Rgb(0.8, 0.8, 0.8);
    pub const STATUS: Rgb = Rgb(0.9, 0.0, 0.0);
    pub const SLATE: Rgb = Rgb(0.12, 0.16, 0.22);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Text {
        x: f32,
        y: f32,
        size: f32,
        align: Align,
        color: Rgb,
        text: String,
    },
    /// Reads top to bottom, anchored at its first character
    VerticalText {
        x: f32,
        y: f32,
        size: f32,
        text: String,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    },
    Path {
        points: Vec<(f32, f32)>,
        width: f32,
        color: Rgb,
    },
    Triangle {
        points: [(f32, f32); 3],
        color: Rgb,
    },
}

/// Identity fields after placeholder substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetIdentity {
    pub driver_name: String,
    pub driver_license: String,
    pub license_state: String,
    pub carrier_name: String,
    pub truck_number: String,
    pub trailer_number: String,
    pub co_driver: String,
}

impl SheetIdentity {
    /// Trip value, then configured default, then the placeholder.
    pub fn resolve(info: Option<&LogInfo>, cfg: &Config) -> Self {
        let placeholder = cfg.unknown_placeholder.as_str();
        let pick = |value: Option<&String>, fallback: Option<&String>| -> String {
            value
                .filter(|s| !s.trim().is_empty())
                .or(fallback.filter(|s| !s.trim().is_empty()))
                .map_or_else(|| placeholder.to_string(), |s| s.clone())
        };

        Self {
            driver_name: pick(info.and_then(|i| i.driver_name.as_ref()), cfg.driver_name.as_ref()),
            driver_license: pick(info.and_then(|i| i.driver_license.as_ref()), None),
            license_state: pick(info.and_then(|i| i.license_state.as_ref()), None),
            carrier_name: pick(
                info.and_then(|i| i.carrier_name.as_ref()),
                cfg.carrier_name.as_ref(),
            ),
            truck_number: pick(info.and_then(|i| i.truck_number.as_ref()), None),
            trailer_number: pick(info.and_then(|i| i.trailer_number.as_ref()), None),
            co_driver: pick(info.and_then(|i| i.co_driver.as_ref()), None),
        }
    }
}

/// One rendered page.
#[derive(Debug, Clone)]
pub struct LogSheetFrame {
    pub day_number: u32,
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
    /// The duty-status line, left to right
    pub status_path: Vec<(f32, f32)>,
    /// `H:MM` per status in row order
    pub totals_text: Vec<(DutyStatus, String)>,
    /// Should read `24:00`
    pub grand_total_text: String,
}

impl LogSheetFrame {
    pub fn build(
        summary: &DaySummary,
        trip: &TripPlan,
        layout: &LogSheetLayout,
        identity: &SheetIdentity,
    ) -> Self {
        let mut frame = LogSheetFrame {
            day_number: summary.day_number,
            width: layout.page_width,
            height: layout.page_height,
            shapes: Vec::new(),
            status_path: Vec::new(),
            totals_text: Vec::new(),
            grand_total_text: String::new(),
        };

        frame.draw_header(summary, trip, layout, identity);
        frame.draw_grid(layout);
        frame.draw_status_line(summary, layout);
        frame.draw_annotations(summary, layout);
        frame.draw_totals(summary, layout);
        frame.draw_compliance(summary, layout);

        frame
    }

    fn text(&mut self, x: f32, y: f32, size: f32, align: Align, text: impl Into<String>) {
        self.shapes.push(Shape::Text {
            x,
            y,
            size,
            align,
            color: Rgb::BLACK,
            text: text.into(),
        });
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb) {
        self.shapes.push(Shape::Line {
            from,
            to,
            width,
            color,
        });
    }

    // -----------------------------
    // Header
    // -----------------------------
    fn draw_header(
        &mut self,
        summary: &DaySummary,
        trip: &TripPlan,
        layout: &LogSheetLayout,
        id: &SheetIdentity,
    ) {
        let left = layout.margin + 20.0;
        let middle = layout.page_width * 0.4;
        let right = layout.page_width - layout.margin;
        let top = layout.margin;

        self.text(layout.page_width / 2.0, top + 10.0, 16.0, Align::Center, "DRIVER'S DAILY LOG");

        let date = summary.date.unwrap_or_else(today);
        self.text(left, top + 40.0, 12.0, Align::Left, format!("Day: {}", summary.day_number));
        self.text(left, top + 58.0, 10.0, Align::Left, format!("Co-Driver: {}", id.co_driver));
        let date_text = format!("Date: {}", format_log_date(date));
        self.text(middle - 120.0, top + 40.0, 11.0, Align::Left, date_text);

        self.text(middle, top + 40.0, 11.0, Align::Left, format!("Driver: {}", id.driver_name));
        self.text(
            middle,
            top + 55.0,
            11.0,
            Align::Left,
            format!("License: {} ({})", id.driver_license, id.license_state),
        );
        self.text(middle, top + 75.0, 11.0, Align::Left, format!("Carrier: {}", id.carrier_name));
        self.text(
            middle,
            top + 90.0,
            11.0,
            Align::Left,
            format!("Truck: {} | Trailer: {}", id.truck_number, id.trailer_number),
        );

        let miles = format!("Miles Today: {}", summary.miles_today);
        self.text(right, top + 40.0, 12.0, Align::Right, miles);

        let start = trip.start_location.as_ref().and_then(|l| l.display_name());
        let end = trip.dropoff_location.as_ref().and_then(|l| l.display_name());
        if let (Some(start), Some(end)) = (start, end) {
            self.text(right, top + 55.0, 10.0, Align::Right, format!("Route: {start} -> {end}"));
        }
    }

    // -----------------------------
    // Grid
    // -----------------------------
    fn draw_grid(&mut self, layout: &LogSheetLayout) {
        let top = layout.grid_y;
        let bottom = layout.grid_bottom();
        let right = layout.grid_x + layout.grid_width();

        for hour in 0..=24u32 {
            let x = layout.x_for_hour(f64::from(hour));
            self.line((x, top), (x, bottom), 1.0, Rgb::GRID);
            if hour % 2 == 0 {
                self.text(x, top - 5.0, 9.0, Align::Center, format!("{hour:02}"));
            }
        }

        for row in 0..=DutyStatus::ALL.len() {
            let y = top + row as f32 * layout.row_height;
            self.line((layout.grid_x, y), (right, y), 1.0, Rgb::GRID);
        }

        for status in DutyStatus::ALL {
            let y = layout.y_for_status(status) + 4.0;
            self.text(layout.grid_x - 10.0, y, 10.0, Align::Right, status.as_str());
        }

        self.text(layout.grid_x - 10.0, bottom + 15.0, 11.0, Align::Right, "Remarks");
    }

    // -----------------------------
    // Duty-status line
    // -----------------------------
    fn draw_status_line(&mut self, summary: &DaySummary, layout: &LogSheetLayout) {
        let mut points: Vec<(f32, f32)> = Vec::new();

        for step in &summary.timeline.steps {
            let y = layout.y_for_status(step.status);
            let x0 = layout.x_for_hour(step.start_hour);
            let x1 = layout.x_for_hour(step.end_hour);

            // vertical transition at the boundary
            if points.last() != Some(&(x0, y)) {
                points.push((x0, y));
            }
            points.push((x1, y));
        }

        self.shapes.push(Shape::Path {
            points: points.clone(),
            width: 2.5,
            color: Rgb::STATUS,
        });
        self.status_path = points;
    }

    // -----------------------------
    // Remark arrows and labels
    // -----------------------------
    fn draw_annotations(&mut self, summary: &DaySummary, layout: &LogSheetLayout) {
        let base = layout.grid_bottom();
        let n = layout.label_chars;

        for ann in &summary.timeline.annotations {
            let x = layout.x_for_hour(ann.hour);

            if let Some(number) = ann.remark_number {
                self.line((x, base), (x, base - 10.0), 1.0, Rgb::SLATE);
                self.shapes.push(Shape::Triangle {
                    points: [(x, base - 10.0), (x - 3.0, base - 5.0), (x + 3.0, base - 5.0)],
                    color: Rgb::SLATE,
                });
                self.text(x, base + 12.0, 9.0, Align::Center, number.to_string());
            }

            let location = truncate(ann.location.as_deref().unwrap_or("Location"), n);
            let activity = truncate(ann.activity.as_deref().unwrap_or("Activity"), n);

            self.shapes.push(Shape::VerticalText {
                x,
                y: base + 16.0,
                size: 8.0,
                text: location,
            });
            self.shapes.push(Shape::VerticalText {
                x: x - 10.0,
                y: base + 16.0,
                size: 8.0,
                text: activity,
            });
        }
    }

    // -----------------------------
    // Totals column
    // -----------------------------
    fn draw_totals(&mut self, summary: &DaySummary, layout: &LogSheetLayout) {
        let cx = layout.totals_center_x();
        let totals = &summary.timeline.totals;

        self.text(cx, layout.grid_y - 10.0, 12.0, Align::Center, "TOTALS");

        for (status, hours) in totals.iter() {
            let label = format_hours_hmm(hours);
            self.text(cx, layout.y_for_status(status) + 5.0, 12.0, Align::Center, label.clone());
            self.totals_text.push((status, label));
        }

        self.grand_total_text = format_hours_hmm(totals.sum());
        let grand = format!("Total: {}", self.grand_total_text);
        self.text(cx, layout.grid_bottom() + 25.0, 13.0, Align::Center, grand);
    }

    fn draw_compliance(&mut self, summary: &DaySummary, layout: &LogSheetLayout) {
        let mut y = layout.page_height - layout.margin - 10.0;

        for v in summary.timeline.violations.iter().rev() {
            self.shapes.push(Shape::Text {
                x: layout.margin + 20.0,
                y,
                size: 10.0,
                align: Align::Left,
                color: Rgb::STATUS,
                text: format!("VIOLATION: {v}"),
            });
            y -= 14.0;
        }
    }
}

/// Frames for every log day of a trip.
pub fn build_log_sheets(
    summaries: &[DaySummary],
    trip: &TripPlan,
    layout: &LogSheetLayout,
    cfg: &Config,
) -> Vec<LogSheetFrame> {
    let identity = SheetIdentity::resolve(trip.log_info.as_ref(), cfg);
    summaries
        .iter()
        .map(|s| LogSheetFrame::build(s, trip, layout, &identity))
        .collect()
}
