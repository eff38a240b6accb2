mod common;
use common::{hoslog, sample_trip_json, temp_config, temp_out, write_trip};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;
use std::fs;

#[test]
fn test_summary_all_days() {
    let trip = write_trip("summary_all", &sample_trip_json());
    let cfg = temp_config("summary_all");

    hoslog()
        .args(["--config", &cfg, "summary", &trip])
        .assert()
        .success()
        .stdout(contains("Day 1 (03/14/2025)"))
        .stdout(contains("Day 2"))
        .stdout(contains("10:00"))
        .stdout(contains("24:00"))
        .stdout(contains("571"))
        .stdout(contains("compliant"))
        .stdout(contains("Total stops"));
}

#[test]
fn test_summary_single_day() {
    let trip = write_trip("summary_day", &sample_trip_json());
    let cfg = temp_config("summary_day");

    hoslog()
        .args(["--config", &cfg, "summary", &trip, "--day", "2"])
        .assert()
        .success()
        .stdout(contains("Day 2"))
        .stdout(contains("14:45"))
        .stdout(contains("229"))
        .stdout(contains("Day 1").not())
        .stdout(contains("Total stops").not());
}

#[test]
fn test_summary_unknown_day_fails() {
    let trip = write_trip("summary_bad_day", &sample_trip_json());
    let cfg = temp_config("summary_bad_day");

    hoslog()
        .args(["--config", &cfg, "summary", &trip, "--day", "9"])
        .assert()
        .failure()
        .stderr(contains("Log day 9 not found"));
}

#[test]
fn test_summary_reports_violations_and_unknown_status() {
    let trip = json!({
        "logs": [{
            "day": 1,
            "events": [
                {"status": "Driving", "duration": 12.0 * 3600.0},
                {"status": "Yard Move", "duration": 3600.0}
            ]
        }]
    });
    let path = write_trip("summary_violation", &trip);
    let cfg = temp_config("summary_violation");

    hoslog()
        .args(["--config", &cfg, "summary", &path])
        .assert()
        .success()
        .stdout(contains("VIOLATION"))
        .stdout(contains("11-hour limit"))
        .stdout(contains("Unknown status 'Yard Move'"));
}

#[test]
fn test_summary_honours_configured_limits() {
    let trip = write_trip("summary_limits", &sample_trip_json());
    let cfg = temp_config("summary_limits");
    fs::write(&cfg, "max_driving_hours: 9\nmax_on_duty_hours: 14\n").expect("write config");

    hoslog()
        .args(["--config", &cfg, "summary", &trip, "--day", "1"])
        .assert()
        .success()
        .stdout(contains("9-hour limit"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let trip = write_trip("summary_bad_cfg", &sample_trip_json());
    let cfg = temp_config("summary_bad_cfg");
    fs::write(&cfg, "max_driving_hours: -3\n").expect("write config");

    hoslog()
        .args(["--config", &cfg, "summary", &trip])
        .assert()
        .failure()
        .stderr(contains("HOS limits"));
}

#[test]
fn test_malformed_trip_file_fails() {
    let cfg = temp_config("malformed_trip");
    let mut path = std::env::temp_dir();
    path.push("malformed_hoslog_trip.json");
    fs::write(&path, "{ not json").expect("write trip");

    hoslog()
        .args(["--config", &cfg, "summary", &path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("Invalid trip data"));
}

#[test]
fn test_itinerary_lists_events() {
    let trip = write_trip("itinerary_all", &sample_trip_json());
    let cfg = temp_config("itinerary_all");

    hoslog()
        .args(["--config", &cfg, "itinerary", &trip])
        .assert()
        .success()
        .stdout(contains("Begin Trip"))
        .stdout(contains("Load Cargo"))
        .stdout(contains("Fueling Stop"))
        .stdout(contains("Unload Cargo"))
        .stdout(contains("Day 2, 12:00 AM"));
}

#[test]
fn test_itinerary_single_day() {
    let trip = write_trip("itinerary_day", &sample_trip_json());
    let cfg = temp_config("itinerary_day");

    hoslog()
        .args(["--config", &cfg, "itinerary", &trip, "--day", "1"])
        .assert()
        .success()
        .stdout(contains("Begin Trip"))
        .stdout(contains("Unload Cargo").not());

    hoslog()
        .args(["--config", &cfg, "itinerary", &trip, "--day", "3"])
        .assert()
        .failure()
        .stderr(contains("Log day 3 not found"));
}

#[test]
fn test_markers_table() {
    let trip = write_trip("markers", &sample_trip_json());
    let cfg = temp_config("markers");

    hoslog()
        .args(["--config", &cfg, "markers", &trip])
        .assert()
        .success()
        .stdout(contains("Start Location"))
        .stdout(contains("Pickup Location"))
        .stdout(contains("30-Minute Break"))
        .stdout(contains("10-Hour Reset"))
        .stdout(contains("Fueling Stop"))
        .stdout(contains("Dropoff Location"))
        .stdout(contains("Route centre"));
}

#[test]
fn test_markers_without_route() {
    let trip = json!({
        "logs": [{"day": 1, "events": [{"status": "Off Duty", "duration": 36000.0, "description": "10-hour rest"}]}]
    });
    let path = write_trip("markers_none", &trip);
    let cfg = temp_config("markers_none");

    hoslog()
        .args(["--config", &cfg, "markers", &path])
        .assert()
        .success()
        .stdout(contains("No markers"));
}

#[test]
fn test_locate_event() {
    let trip = write_trip("locate", &sample_trip_json());
    let cfg = temp_config("locate");

    hoslog()
        .args(["--config", &cfg, "locate", &trip, "--event", "9"])
        .assert()
        .success()
        .stdout(contains("Fueling stop"))
        .stdout(contains("40.4000, -80.0000"))
        .stdout(contains("Projected"));

    hoslog()
        .args(["--config", &cfg, "locate", &trip, "--event", "10"])
        .assert()
        .success()
        .stdout(contains("Leg end"))
        .stdout(contains("41.8781, -87.6298"));

    hoslog()
        .args(["--config", &cfg, "locate", &trip, "--event", "0"])
        .assert()
        .success()
        .stdout(contains("No map position"));
}

#[test]
fn test_locate_out_of_range() {
    let trip = write_trip("locate_oob", &sample_trip_json());
    let cfg = temp_config("locate_oob");

    hoslog()
        .args(["--config", &cfg, "locate", &trip, "--event", "12"])
        .assert()
        .failure()
        .stderr(contains("Event index 12 out of range (trip has 12 events)"));
}

#[test]
fn test_export_csv() {
    let trip = write_trip("export_csv", &sample_trip_json());
    let cfg = temp_config("export_csv");
    let out = temp_out("export_csv", "csv");

    hoslog()
        .args(["--config", &cfg, "export", &trip, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("csv header");
    assert!(header.starts_with("event,day,kind,status,start"));
    assert_eq!(lines.count(), 12);
    assert!(content.contains("Fueling Stop"));
    assert!(content.contains("pickup"));
    assert!(content.contains("projected"));
}

#[test]
fn test_export_json() {
    let trip = write_trip("export_json", &sample_trip_json());
    let cfg = temp_config("export_json");
    let out = temp_out("export_json", "json");

    hoslog()
        .args(["--config", &cfg, "export", &trip, "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[1]["kind"], "Begin Trip");
    assert_eq!(rows[1]["position_source"], "start");
    assert_eq!(rows[9]["driving_remaining"], 7.0);
    assert!(rows[0]["latitude"].is_null());
}

#[test]
fn test_export_xlsx() {
    let trip = write_trip("export_xlsx", &sample_trip_json());
    let cfg = temp_config("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    hoslog()
        .args(["--config", &cfg, "export", &trip, "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf_log_sheets() {
    let trip = write_trip("export_pdf", &sample_trip_json());
    let cfg = temp_config("export_pdf");
    let out = temp_out("export_pdf", "pdf");

    hoslog()
        .args(["--config", &cfg, "export", &trip, "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("2 log sheet(s)"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Count 2"));
}

#[test]
fn test_export_pdf_empty_trip_fails() {
    let path = write_trip("export_pdf_empty", &json!({"logs": []}));
    let cfg = temp_config("export_pdf_empty");
    let out = temp_out("export_pdf_empty", "pdf");

    hoslog()
        .args(["--config", &cfg, "export", &path, "--format", "pdf", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("no log sheets"));
}

#[test]
fn test_export_requires_absolute_path() {
    let trip = write_trip("export_relative", &sample_trip_json());
    let cfg = temp_config("export_relative");

    hoslog()
        .args(["--config", &cfg, "export", &trip, "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let trip = write_trip("export_force", &sample_trip_json());
    let cfg = temp_config("export_force");
    let out = temp_out("export_force", "json");
    fs::write(&out, "old").expect("write existing file");

    hoslog()
        .args(["--config", &cfg, "export", &trip, "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read file"), "old");

    hoslog()
        .args(["--config", &cfg, "export", &trip, "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).expect("read file"), "old");
}

#[test]
fn test_init_writes_config() {
    let cfg = temp_config("init");

    hoslog()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("11h driving / 14h on duty"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("max_driving_hours: 11"));
    assert!(content.contains("unknown_placeholder: Unknown"));
}

#[test]
fn test_config_print() {
    let cfg = temp_config("config_print");

    hoslog()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("showing defaults"))
        .stdout(contains("max_on_duty_hours"));

    fs::write(&cfg, "max_driving_hours: 10\ndriver_name: Sam Lee\n").expect("write config");

    hoslog()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("driver_name: Sam Lee"));
}
