// Semi-major axis of the Krasovsky 1940 ellipsoid, which GCJ-02 is built on
pub(crate) const EARTH_RADIUS: f64 = 6_378_245.;
// First eccentricity squared
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
pub(crate) const EE: f64 = 0.00669342162296594323;

// Origin the offset polynomials are expanded around
pub(crate) const OFFSET_ORIGIN_LNG: f64 = 105.;
pub(crate) const OFFSET_ORIGIN_LAT: f64 = 35.;

// Rough bounding box of mainland China. Not a border, just where the
// offset is assumed to have been applied.
pub(crate) const CHINA_MIN_LNG: f64 = 72.004;
pub(crate) const CHINA_MAX_LNG: f64 = 137.8347;
pub(crate) const CHINA_MIN_LAT: f64 = 0.8293;
pub(crate) const CHINA_MAX_LAT: f64 = 55.8271;

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
pub(crate) const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;
