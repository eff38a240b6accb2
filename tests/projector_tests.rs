mod common;
use common::{approx, hours, sample_trip};
use hoslog::core::geo::RoutePolyline;
use hoslog::core::projector::{
    ProjectionContext, Projector, index_at_progress, point_at_progress, project_event_position,
};
use hoslog::models::duty_status::DutyStatus::{Driving, OffDuty, OnDuty, SleeperBerth};
use hoslog::models::geo_point::GeoPoint;
use hoslog::models::log_day::LogDay;
use hoslog::models::trip::TripPlan;

fn line(n: usize) -> RoutePolyline {
    RoutePolyline::new((0..n).map(|i| GeoPoint::new(i as f64, -(i as f64))).collect())
}

#[test]
fn test_index_at_progress_bounds() {
    assert_eq!(index_at_progress(0, 0.5), None);
    assert_eq!(index_at_progress(1, 0.7), Some(0));
    assert_eq!(index_at_progress(2, 0.5), Some(0));
    assert_eq!(index_at_progress(2, 1.0), Some(1));
    assert_eq!(index_at_progress(5, -0.3), Some(0));
    assert_eq!(index_at_progress(5, 1.7), Some(4));
    assert_eq!(index_at_progress(5, f64::NAN), None);
}

#[test]
fn test_index_at_progress_tolerates_float_drift() {
    // 0.29 * 100 evaluates to 28.999999999999996
    assert_eq!(index_at_progress(101, 0.29), Some(29));
}

#[test]
fn test_midpoint_on_two_point_route() {
    let poly = line(2);
    let logs = vec![LogDay::new(1, vec![hours(Driving, 2.0), hours(Driving, 2.0)])];

    let first = project_event_position(&logs, 0, &poly, None);
    let second = project_event_position(&logs, 1, &poly, None);
    assert_eq!(first, poly.get(0));
    // 50% progress floors to the first vertex
    assert_eq!(second, poly.get(0));
    assert_eq!(point_at_progress(&poly, 1.0), poly.get(1));
}

#[test]
fn test_progress_is_monotonic_across_days() {
    let trip = sample_trip();
    let ctx = ProjectionContext::new(&trip.logs);

    assert!(approx(ctx.total_driving_seconds(), 14.0 * 3600.0));
    assert_eq!(ctx.event_count(), 12);

    let mut last = -1.0;
    for i in 0..ctx.event_count() {
        let p = ctx.progress(i).expect("trip has driving");
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= last, "progress went backwards at {i}");
        last = p;
    }

    // day 2 starts after 10h of driving on day 1
    assert!(approx(ctx.accumulated_before(8), 10.0 * 3600.0));
    // driving strictly before the event: the event's own time is excluded
    assert!(approx(ctx.accumulated_before(2), 0.0));
    assert!(approx(ctx.accumulated_before(3), 2.0 * 3600.0));
}

#[test]
fn test_out_of_range_index_counts_as_trip_start() {
    let trip = sample_trip();
    let ctx = ProjectionContext::new(&trip.logs);

    assert_eq!(ctx.accumulated_before(999), 0.0);
    assert_eq!(ctx.progress(999), Some(0.0));
    assert!(ctx.event(999).is_none());
}

#[test]
fn test_sample_trip_projections() {
    let trip = sample_trip();
    let poly = trip.polyline();
    let projector = Projector::new(&trip.logs, &poly, trip.start_point());

    assert_eq!(poly.len(), 5);
    assert_eq!(projector.project(0), poly.get(0));
    assert_eq!(projector.project(5), poly.get(1));
    for i in [7, 8, 9] {
        assert_eq!(projector.project(i), Some(GeoPoint::new(40.4, -80.0)), "event {i}");
    }
    assert_eq!(projector.project(11), poly.get(4));
}

#[test]
fn test_driving_segments() {
    let trip = sample_trip();
    let poly = trip.polyline();
    let projector = Projector::new(&trip.logs, &poly, trip.start_point());

    let first = projector.driving_segment(2).expect("first leg");
    assert_eq!(first.start, first.end);
    assert_eq!(first.start, poly.get(0).expect("vertex"));
    assert_eq!(first.distance_miles, 0.0);

    let second = projector.driving_segment(4).expect("second leg");
    assert_eq!(second.start, poly.get(0).expect("vertex"));
    assert_eq!(second.end, poly.get(1).expect("vertex"));
    assert!(second.distance_miles > 50.0 && second.distance_miles < 100.0);

    let last = projector.driving_segment(10).expect("last leg");
    assert_eq!(last.start, poly.get(2).expect("vertex"));
    assert_eq!(last.end, poly.get(4).expect("vertex"));
    assert!(approx(last.end_progress, 1.0));

    // segment start matches the event's projected position
    for i in [2, 4, 6, 10] {
        let seg = projector.driving_segment(i).expect("driving leg");
        assert_eq!(projector.project(i), Some(seg.start), "event {i}");
    }

    assert!(projector.driving_segment(3).is_none());
    assert!(projector.driving_segment(42).is_none());
}

#[test]
fn test_no_driving_falls_back_to_start() {
    let poly = line(4);
    let start = GeoPoint::new(10.0, 20.0);
    let logs = vec![LogDay::new(1, vec![hours(OffDuty, 10.0), hours(OnDuty, 2.0)])];

    assert_eq!(project_event_position(&logs, 1, &poly, Some(start)), Some(start));
    assert_eq!(project_event_position(&logs, 1, &poly, None), None);

    let ctx = ProjectionContext::new(&logs);
    assert_eq!(ctx.progress(1), None);
}

#[test]
fn test_empty_polyline_never_projects() {
    let poly = RoutePolyline::default();
    let start = GeoPoint::new(10.0, 20.0);
    let with_driving = vec![LogDay::new(1, vec![hours(Driving, 3.0), hours(SleeperBerth, 8.0)])];
    let without = vec![LogDay::new(1, vec![hours(SleeperBerth, 8.0)])];

    assert_eq!(project_event_position(&with_driving, 1, &poly, Some(start)), None);
    assert_eq!(project_event_position(&without, 0, &poly, Some(start)), None);

    let projector = Projector::new(&with_driving, &poly, Some(start));
    assert!(projector.driving_segment(0).is_none());
}

#[test]
fn test_from_wire_swaps_and_drops_malformed() {
    let poly = RoutePolyline::from_wire(&[
        vec![-74.0, 40.7],
        vec![1.0],
        vec![],
        vec![f64::NAN, 3.0],
        vec![-87.6, 41.8, 180.0],
    ]);

    assert_eq!(poly.len(), 2);
    assert_eq!(poly.first(), Some(GeoPoint::new(40.7, -74.0)));
    assert_eq!(poly.last(), Some(GeoPoint::new(41.8, -87.6)));
}

#[test]
fn test_malformed_geometry_entries_do_not_fail_the_trip() {
    let json = r#"{
        "logs": [],
        "route_geometry": [[-74.0, 40.7], [null, 40.7], "x", {"lng": 1}, [-87.6, 41.8]]
    }"#;
    let trip = TripPlan::from_json_str(json).expect("trip loads");

    let poly = trip.polyline();
    assert_eq!(poly.len(), 2);
    assert_eq!(poly.first(), Some(GeoPoint::new(40.7, -74.0)));
    assert_eq!(poly.last(), Some(GeoPoint::new(41.8, -87.6)));

    let trip = TripPlan::from_json_str(r#"{"logs": [], "route_geometry": null}"#).expect("trip loads");
    assert!(trip.polyline().is_empty());
}
