use serde::{Deserialize, Serialize};
use std::fmt;

/// The four mutually exclusive duty statuses of a driver's daily log.
/// Declaration order is the row order on the log sheet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
}

impl DutyStatus {
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    /// Convert wire string → enum.
    ///
    /// Accepts the backend spelling ("Off Duty", "Sleeper Berth", "Driving",
    /// "On Duty") as well as case and separator variants ("off_duty", "ON-DUTY",
    /// "sleeperberth").
    pub fn from_wire(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "offduty" => Some(Self::OffDuty),
            "sleeperberth" | "sleeper" => Some(Self::SleeperBerth),
            "driving" => Some(Self::Driving),
            "onduty" => Some(Self::OnDuty),
            _ => None,
        }
    }

    /// Convert enum → wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty",
        }
    }

    /// Zero-based grid row (top to bottom).
    pub fn row(&self) -> usize {
        match self {
            DutyStatus::OffDuty => 0,
            DutyStatus::SleeperBerth => 1,
            DutyStatus::Driving => 2,
            DutyStatus::OnDuty => 3,
        }
    }

    /// Statuses that count against the on-duty window.
    pub fn is_on_duty(&self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, DutyStatus::Driving)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status as it arrived on the wire: either a known duty status or a raw
/// string the engine does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Known(DutyStatus),
    Unrecognized(String),
}

impl EventStatus {
    pub fn known(&self) -> Option<DutyStatus> {
        match self {
            EventStatus::Known(s) => Some(*s),
            EventStatus::Unrecognized(_) => None,
        }
    }

    /// Status used for timeline accounting.
    /// Unrecognised statuses are booked as On Duty so their hours stay visible
    /// and count against the on-duty window.
    pub fn effective(&self) -> DutyStatus {
        self.known().unwrap_or(DutyStatus::OnDuty)
    }

    pub fn is_driving(&self) -> bool {
        self.known().is_some_and(|s| s.is_driving())
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Known(s) => s.as_str(),
            EventStatus::Unrecognized(raw) => raw,
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Unrecognized(String::new())
    }
}

impl From<DutyStatus> for EventStatus {
    fn from(status: DutyStatus) -> Self {
        EventStatus::Known(status)
    }
}

impl From<String> for EventStatus {
    fn from(raw: String) -> Self {
        match DutyStatus::from_wire(&raw) {
            Some(s) => EventStatus::Known(s),
            None => EventStatus::Unrecognized(raw),
        }
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Known(s) => s.as_str().to_string(),
            EventStatus::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
