use crate::models::totals::Totals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily HOS limits checked against a day's totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HosLimits {
    pub max_driving_hours: f64,
    pub max_on_duty_hours: f64,
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            max_driving_hours: 11.0,
            max_on_duty_hours: 14.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    /// Driving hours above the daily driving limit
    DrivingLimit,
    /// Driving + On Duty hours above the on-duty window
    OnDutyWindow,
}

/// Advisory compliance flag. Never blocks rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub actual_hours: f64,
    pub limit_hours: f64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::DrivingLimit => write!(
                f,
                "Driving time {:.2}h exceeds {}-hour limit",
                self.actual_hours, self.limit_hours
            ),
            ViolationKind::OnDutyWindow => write!(
                f,
                "On-duty time {:.2}h exceeds {}-hour limit",
                self.actual_hours, self.limit_hours
            ),
        }
    }
}

pub fn check_compliance(totals: &Totals, limits: &HosLimits) -> Vec<Violation> {
    let mut violations = Vec::new();

    if totals.driving > limits.max_driving_hours {
        violations.push(Violation {
            kind: ViolationKind::DrivingLimit,
            actual_hours: totals.driving,
            limit_hours: limits.max_driving_hours,
        });
    }

    let on_duty = totals.on_duty_window();
    if on_duty > limits.max_on_duty_hours {
        violations.push(Violation {
            kind: ViolationKind::OnDutyWindow,
            actual_hours: on_duty,
            limit_hours: limits.max_on_duty_hours,
        });
    }

    violations
}
