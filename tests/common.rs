#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hoslog::models::duty_event::DutyEvent;
use hoslog::models::duty_status::DutyStatus;
use hoslog::models::trip::TripPlan;
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hoslog() -> Command {
    cargo_bin_cmd!("hoslog")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hoslog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist yet, so commands run on defaults
/// without touching the user's home directory
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hoslog.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `trip` as JSON into tempdir and return its path
pub fn write_trip(name: &str, trip: &Value) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hoslog_trip.json", name));
    fs::write(&path, serde_json::to_string_pretty(trip).expect("serialize trip"))
        .expect("write trip file");
    path.to_string_lossy().to_string()
}

fn ev(status: &str, hours: f64, description: &str, location: Option<&str>) -> Value {
    let mut v = json!({
        "status": status,
        "duration": hours * 3600.0,
        "description": description,
    });
    if let Some(loc) = location {
        v["location"] = json!(loc);
    }
    v
}

/// Two-day New York → Philadelphia → Chicago trip.
///
/// Global event indices:
///  0 Off Duty         6h
///  1 On Duty          0.5h  Pre-Trip @ New York, NY (remark)
///  2 Driving          2h
///  3 On Duty          1h    Pickup @ Philadelphia, PA (remark)
///  4 Driving          4h
///  5 Off Duty         0.5h  30-minute break, en route
///  6 Driving          4h
///  7 Sleeper Berth    6h    10-hour rest, en route
///  8 Sleeper Berth    4h    10-hour rest, en route (day 2)
///  9 On Duty          0.25h Fueling, en route
/// 10 Driving          4h
/// 11 On Duty          1h    Dropoff @ Chicago, IL
pub fn sample_trip_json() -> Value {
    let mut first = ev("Off Duty", 6.0, "Off duty", None);
    first["start_time"] = json!("2025-03-14T00:00:00Z");

    let mut pre_trip = ev("On Duty", 0.5, "Pre-Trip Inspection", Some("New York, NY"));
    pre_trip["remarks"] = json!("Pre-trip inspection");

    let mut pickup = ev("On Duty", 1.0, "Pickup cargo", Some("Philadelphia, PA"));
    pickup["remarks"] = json!("Loading at shipper");

    let mut fuel = ev("On Duty", 0.25, "Fueling stop", Some("En route to Chicago, IL"));
    fuel["hos_after"] = json!({
        "dailyDrivingRemaining": 7.0,
        "onDutyWindowRemaining": 9.75,
        "breakCycleRemaining": 8.0,
        "weeklyCycleRemaining": 50.0
    });

    json!({
        "start_location": {"lat": 40.7128, "lng": -74.0060, "name": "New York, NY", "formatted_name": "New York, NY"},
        "pickup_location": {"lat": 39.9526, "lng": -75.1652, "name": "Philadelphia, PA", "formatted_name": "Philadelphia, PA"},
        "dropoff_location": {"lat": 41.8781, "lng": -87.6298, "name": "Chicago, IL", "formatted_name": "Chicago, IL"},
        "route_geometry": [
            [-74.0060, 40.7128],
            [-75.1652, 39.9526],
            [-80.0, 40.4],
            [-84.0, 41.5],
            [-87.6298, 41.8781]
        ],
        "total_distance_miles": 800.0,
        "total_driving_time_hours": 14.0,
        "log_info": {"driver_name": "Jane Roe", "carrier_name": "Roe Freight"},
        "logs": [
            {
                "day": 1,
                "events": [
                    first,
                    pre_trip,
                    ev("Driving", 2.0, "Drive from New York toward Philadelphia", Some("En route to Philadelphia, PA")),
                    pickup,
                    ev("Driving", 4.0, "Drive from Philadelphia toward Chicago", Some("En route to Chicago, IL")),
                    ev("Off Duty", 0.5, "30-minute break", Some("En route to Chicago, IL")),
                    ev("Driving", 4.0, "Drive from Philadelphia toward Chicago", Some("En route to Chicago, IL")),
                    ev("Sleeper Berth", 6.0, "10-hour rest period", Some("En route to Chicago, IL"))
                ]
            },
            {
                "day": 2,
                "events": [
                    ev("Sleeper Berth", 4.0, "10-hour rest period", Some("En route to Chicago, IL")),
                    fuel,
                    ev("Driving", 4.0, "Drive from Philadelphia toward Chicago", Some("En route to Chicago, IL")),
                    ev("On Duty", 1.0, "Dropoff cargo", Some("Chicago, IL"))
                ]
            }
        ]
    })
}

pub fn sample_trip() -> TripPlan {
    serde_json::from_value(sample_trip_json()).expect("sample trip deserializes")
}

pub fn hours(status: DutyStatus, h: f64) -> DutyEvent {
    DutyEvent::hours(status, h)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
