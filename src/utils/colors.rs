/// ANSI color helper utilities for terminal output.
use crate::models::duty_status::DutyStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// One color per grid row.
pub fn color_for_status(status: DutyStatus) -> &'static str {
    match status {
        DutyStatus::OffDuty => GREY,
        DutyStatus::SleeperBerth => MAGENTA,
        DutyStatus::Driving => GREEN,
        DutyStatus::OnDuty => YELLOW,
    }
}

/// Green when within limits, red otherwise.
pub fn color_for_compliance(compliant: bool) -> &'static str {
    if compliant { GREEN } else { RED }
}
