//! Geographic helpers: great-circle distance, coordinate strings and the
//! route polyline built from the backend geometry.

use crate::models::geo_point::GeoPoint;
use regex::Regex;
use std::sync::OnceLock;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const EARTH_RADIUS_MI: f64 = 3_959.0;

/// Haversine distance between two points, in meters.
pub fn haversine_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    EARTH_RADIUS_M * central_angle(a, b)
}

/// Haversine distance between two points, in statute miles.
pub fn haversine_miles(a: &GeoPoint, b: &GeoPoint) -> f64 {
    EARTH_RADIUS_MI * central_angle(a, b)
}

fn central_angle(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

fn coordinate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$")
            .expect("coordinate pattern is valid")
    })
}

/// Parse a literal `"lat, lng"` string. Anything else (place names,
/// "En route to …", out-of-range numbers) yields None.
pub fn parse_coordinates(s: &str) -> Option<GeoPoint> {
    let caps = coordinate_re().captures(s)?;
    let lat: f64 = caps[1].parse().ok()?;
    let lng: f64 = caps[2].parse().ok()?;
    let point = GeoPoint::new(lat, lng);
    point.is_valid().then_some(point)
}

/// Ordered route points in `(lat, lng)` order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutePolyline {
    points: Vec<GeoPoint>,
}

impl RoutePolyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Build from backend `[lng, lat]` pairs, swapping to `(lat, lng)`.
    /// Malformed pairs are dropped.
    pub fn from_wire(pairs: &[Vec<f64>]) -> Self {
        let points: Vec<GeoPoint> = pairs
            .iter()
            .filter_map(|p| GeoPoint::from_lng_lat(p))
            .collect();

        let dropped = pairs.len() - points.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} malformed route geometry entries");
        }

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<GeoPoint> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn first(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// Middle point, used to center a map view.
    pub fn center(&self) -> Option<GeoPoint> {
        self.get(self.points.len() / 2)
    }

    /// Total path length in miles.
    pub fn length_miles(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| haversine_miles(&w[0], &w[1]))
            .sum()
    }
}

