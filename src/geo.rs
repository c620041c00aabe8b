//! Great-circle distance between coordinates.

/*
Haversine Distance
==================

Stations are points on a sphere (lat/lng in degrees). The haversine formula
gives the length of the shortest arc between two of them:

    a = sin²(Δlat / 2) + cos(lat1) · cos(lat2) · sin²(Δlng / 2)
    c = 2 · atan2(√a, √(1 − a))
    d = R · c

with R = 6 371 000 m (mean Earth radius).

Evaluation order is fixed: `sin(x)·sin(x)` rather than `powi(2)`, and the
caller always passes (next station, current station).
*/

use crate::EARTH_RADIUS_M;

/// Distance in meters between two lat/lng points given in degrees.
///
/// # Example
/// ```
/// use subway_sequencer::geo::distance;
/// let d = distance(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111_194.93).abs() < 0.01); // one degree along the equator
/// ```
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin() * (d_lng / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}
