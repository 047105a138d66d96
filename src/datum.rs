//! Conversion between the GCJ-02 and WGS-84 datums.
//!
//! GCJ-02 is WGS-84 displaced by an obfuscating, locally smooth offset that is
//! only applied inside mainland China. The offset has no closed-form inverse,
//! so [`gcj02_to_wgs84`] uses the one-step correction shared by the rest of
//! the mapping ecosystem: evaluate the forward offset at the GCJ-02 point and
//! subtract it. Expect residuals in the order of a meter.

use std::f64::consts::PI;

use crate::{
    constants::{
        CHINA_MAX_LAT, CHINA_MAX_LNG, CHINA_MIN_LAT, CHINA_MIN_LNG, EARTH_RADIUS, EE,
        OFFSET_ORIGIN_LAT, OFFSET_ORIGIN_LNG,
    },
    point::GeoPoint,
    utility::dms,
    ThisOrThat,
};

/// Returns whether a point lies outside the rectangle in which the GCJ-02
/// offset is applied. The edges of the rectangle count as inside.
///
/// NaN compares false against every edge, so it is never reported as outside.
///
/// # Usage
///
/// ```
/// use gcjconvert::out_of_china;
///
/// assert!(!out_of_china(116.3974, 39.9093));
/// assert!(out_of_china(-122.4194, 37.7749));
/// assert!(!out_of_china(72.004, 0.8293));
/// ```
pub fn out_of_china(longitude: f64, latitude: f64) -> bool {
    longitude < CHINA_MIN_LNG
        || longitude > CHINA_MAX_LNG
        || latitude < CHINA_MIN_LAT
        || latitude > CHINA_MAX_LAT
}

/// Converts a GCJ-02 position to WGS-84. Points outside China are returned
/// unchanged.
///
/// Non-finite input is not rejected: it flows through the arithmetic and
/// comes back as NaN.
///
/// # Usage
///
/// ```
/// use gcjconvert::gcj02_to_wgs84;
///
/// let converted = gcj02_to_wgs84(114.0579, 22.5431);
///
/// assert!((converted.longitude() - 114.052_786).abs() < 1e-6);
/// assert!((converted.latitude() - 22.545_817).abs() < 1e-6);
/// ```
pub fn gcj02_to_wgs84(longitude: f64, latitude: f64) -> GeoPoint {
    if out_of_china(longitude, latitude) {
        return GeoPoint::new(longitude, latitude);
    }

    let (dlng, dlat) = offset(longitude, latitude);
    let mg_lng = longitude + dlng;
    let mg_lat = latitude + dlat;

    GeoPoint::new(longitude * 2. - mg_lng, latitude * 2. - mg_lat)
}

/// Applies the GCJ-02 offset to a WGS-84 position. Points outside China are
/// returned unchanged.
///
/// # Usage
///
/// ```
/// use gcjconvert::{gcj02_to_wgs84, wgs84_to_gcj02};
///
/// let wgs84 = gcj02_to_wgs84(116.3974, 39.9093);
/// let back = wgs84_to_gcj02(wgs84.longitude(), wgs84.latitude());
///
/// // The inverse is approximate
/// assert!((back.longitude() - 116.3974).abs() < 1e-4);
/// assert!((back.latitude() - 39.9093).abs() < 1e-4);
/// ```
pub fn wgs84_to_gcj02(longitude: f64, latitude: f64) -> GeoPoint {
    out_of_china(longitude, latitude).ternary_lazy(
        || GeoPoint::new(longitude, latitude),
        || {
            let (dlng, dlat) = offset(longitude, latitude);
            GeoPoint::new(longitude + dlng, latitude + dlat)
        },
    )
}

/// Offset in degrees `(dlng, dlat)` that GCJ-02 adds at the given point.
fn offset(longitude: f64, latitude: f64) -> (f64, f64) {
    let x = longitude - OFFSET_ORIGIN_LNG;
    let y = latitude - OFFSET_ORIGIN_LAT;
    let dlat = transform_lat(x, y);
    let dlng = transform_lng(x, y);

    // Scale plane meters to degrees with the meridian and prime vertical radii
    // of curvature at this latitude.
    let radlat = latitude / f64::from(dms::HD) * PI;
    let magic = radlat.sin();
    let magic = 1. - EE * magic * magic;
    let sqrtmagic = magic.sqrt();

    let dlat = (dlat * 180.) / ((EARTH_RADIUS * (1. - EE)) / (magic * sqrtmagic) * PI);
    let dlng = (dlng * 180.) / (EARTH_RADIUS / sqrtmagic * radlat.cos() * PI);

    (dlng, dlat)
}

// Coefficients and operation order match the reference formula exactly.

pub(crate) fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100. + 2. * x + 3. * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20. * (6. * x * PI).sin() + 20. * (2. * x * PI).sin()) * 2. / 3.;
    ret += (20. * (y * PI).sin() + 40. * (y / 3. * PI).sin()) * 2. / 3.;
    ret += (160. * (y / 12. * PI).sin() + 320. * (y * PI / 30.).sin()) * 2. / 3.;
    ret
}

pub(crate) fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300. + x + 2. * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20. * (6. * x * PI).sin() + 20. * (2. * x * PI).sin()) * 2. / 3.;
    ret += (20. * (x * PI).sin() + 40. * (x / 3. * PI).sin()) * 2. / 3.;
    ret += (150. * (x / 12. * PI).sin() + 300. * (x / 30. * PI).sin()) * 2. / 3.;
    ret
}
