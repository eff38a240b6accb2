use super::duty_status::DutyStatus;
use serde::Serialize;

/// Hours per duty status for one log day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub off_duty: f64,
    pub sleeper_berth: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl Totals {
    pub fn get(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper_berth,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
        }
    }

    pub fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty => self.off_duty += hours,
            DutyStatus::SleeperBerth => self.sleeper_berth += hours,
            DutyStatus::Driving => self.driving += hours,
            DutyStatus::OnDuty => self.on_duty += hours,
        }
    }

    pub fn sum(&self) -> f64 {
        self.off_duty + self.sleeper_berth + self.driving + self.on_duty
    }

    /// Hours that count against the on-duty window (Driving + On Duty).
    pub fn on_duty_window(&self) -> f64 {
        self.iter()
            .filter(|(status, _)| status.is_on_duty())
            .map(|(_, hours)| hours)
            .sum()
    }

    /// (status, hours) in grid row order.
    pub fn iter(&self) -> impl Iterator<Item = (DutyStatus, f64)> + '_ {
        DutyStatus::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}
