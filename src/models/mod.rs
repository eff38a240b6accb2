pub mod day_summary;
pub mod duty_event;
pub mod duty_status;
pub mod geo_point;
pub mod log_day;
pub mod totals;
pub mod trip;
