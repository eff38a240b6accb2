use super::duty_status::{DutyStatus, EventStatus};
use super::trip::null_as_default;
use serde::{Deserialize, Deserializer, Serialize};

/// HOS banks remaining after an event, in hours, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HosSnapshot {
    #[serde(default)]
    pub daily_driving_remaining: f64,
    #[serde(default)]
    pub on_duty_window_remaining: f64,
    #[serde(default)]
    pub break_cycle_remaining: f64,
    #[serde(default)]
    pub weekly_cycle_remaining: f64,
}

/// One contiguous interval of a driver's status within a single log day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyEvent {
    /// Missing or null decodes to an empty unrecognised status
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: EventStatus,

    /// Seconds. Missing, negative or non-finite values count as zero.
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub start_time_hours: Option<f64>,

    /// ISO-8601 start timestamp
    #[serde(default)]
    pub start_time: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub remarks: Option<String>,

    #[serde(default, deserialize_with = "deserialize_location")]
    pub location: Option<String>,

    /// Segment distance in miles
    #[serde(default)]
    pub distance: Option<f64>,

    #[serde(default)]
    pub hos_after: Option<HosSnapshot>,
}

impl DutyEvent {
    /// Minimal event: status and duration in seconds.
    pub fn new(status: impl Into<EventStatus>, duration_seconds: f64) -> Self {
        Self {
            status: status.into(),
            duration: Some(duration_seconds),
            start_time_hours: None,
            start_time: None,
            description: None,
            remarks: None,
            location: None,
            distance: None,
            hos_after: None,
        }
    }

    pub fn hours(status: DutyStatus, hours: f64) -> Self {
        Self::new(status, hours * 3600.0)
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_remarks(mut self, remarks: &str) -> Self {
        self.remarks = Some(remarks.to_string());
        self
    }

    /// Sanitised duration in seconds (never negative, never NaN).
    pub fn duration_seconds(&self) -> f64 {
        match self.duration {
            Some(d) if d.is_finite() && d > 0.0 => d,
            _ => 0.0,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds() / 3600.0
    }

    pub fn is_driving(&self) -> bool {
        self.status.is_driving()
    }

    /// Driving seconds contributed to trip progress.
    pub fn driving_seconds(&self) -> f64 {
        if self.is_driving() {
            self.duration_seconds()
        } else {
            0.0
        }
    }

    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn description_contains(&self, needle: &str) -> bool {
        self.description_str().contains(needle)
    }

    pub fn has_remarks(&self) -> bool {
        self.remarks.as_deref().is_some_and(|r| !r.trim().is_empty())
    }

    /// Declared start offset, if usable.
    pub fn declared_start_hours(&self) -> Option<f64> {
        self.start_time_hours
            .filter(|h| h.is_finite() && (0.0..24.0).contains(h))
    }
}

/// The backend sends `location` as plain text, but some producers send an
/// object with a `name`. Both decode to text.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocationField {
    Text(String),
    Named { name: Option<String> },
}

fn deserialize_location<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<LocationField>::deserialize(deserializer)?;
    Ok(match field {
        Some(LocationField::Text(s)) => Some(s),
        Some(LocationField::Named { name }) => name,
        None => None,
    })
}
