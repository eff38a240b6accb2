use hoslog::core::geo::{RoutePolyline, haversine_meters, haversine_miles, parse_coordinates};
use hoslog::models::geo_point::GeoPoint;

#[test]
fn test_haversine_same_point_is_zero() {
    let p = GeoPoint::new(40.7128, -74.0060);
    assert_eq!(haversine_miles(&p, &p), 0.0);
    assert_eq!(haversine_meters(&p, &p), 0.0);
}

#[test]
fn test_haversine_new_york_los_angeles() {
    let ny = GeoPoint::new(40.7128, -74.0060);
    let la = GeoPoint::new(34.0522, -118.2437);

    let miles = haversine_miles(&ny, &la);
    assert!((miles - 2445.0).abs() < 10.0, "got {miles}");

    let km = haversine_meters(&ny, &la) / 1000.0;
    assert!((km - 3936.0).abs() < 15.0, "got {km}");

    assert!((haversine_miles(&la, &ny) - miles).abs() < 1e-9);
}

#[test]
fn test_parse_coordinates() {
    assert_eq!(parse_coordinates("40.7128, -74.0060"), Some(GeoPoint::new(40.7128, -74.006)));
    assert_eq!(parse_coordinates("  41,-87 "), Some(GeoPoint::new(41.0, -87.0)));

    assert_eq!(parse_coordinates("New York, NY"), None);
    assert_eq!(parse_coordinates("En route to Chicago, IL"), None);
    assert_eq!(parse_coordinates("95.0, 10.0"), None);
    assert_eq!(parse_coordinates("10.0, 190.0"), None);
    assert_eq!(parse_coordinates(""), None);
}

#[test]
fn test_polyline_helpers() {
    let poly = RoutePolyline::new(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(0.0, 2.0),
    ]);

    assert_eq!(poly.center(), Some(GeoPoint::new(0.0, 1.0)));
    // one degree of longitude on the equator is about 69 miles
    assert!((poly.length_miles() - 138.2).abs() < 1.0);

    let empty = RoutePolyline::default();
    assert!(empty.is_empty());
    assert_eq!(empty.center(), None);
    assert_eq!(empty.length_miles(), 0.0);
}

#[test]
fn test_geo_point_display() {
    assert_eq!(GeoPoint::new(40.71284, -74.00601).to_string(), "40.7128, -74.0060");
}
