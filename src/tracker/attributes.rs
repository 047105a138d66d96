use serde::Serialize;
use serde_json::{Map, Value};

use crate::point::GeoPoint;

use super::{DeviceEntry, DeviceStatus, DOMAIN};

// Fixed keys win over custom attributes of the same name
const RESERVED: &[&str] = &[
    "address",
    "altitude",
    "category",
    "geofence",
    "motion",
    "speed",
    "status",
    "traccar_id",
    "tracker",
    "wgs84_longitude",
    "wgs84_latitude",
];

/// The extra attribute set attached to a device tracker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackerAttributes {
    #[serde(flatten)]
    pub custom: Map<String, Value>,
    pub address: Option<String>,
    pub altitude: f64,
    pub category: Option<String>,
    pub geofence: Option<String>,
    pub motion: bool,
    pub speed: f64,
    pub status: DeviceStatus,
    pub traccar_id: i64,
    pub tracker: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wgs84_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wgs84_latitude: Option<f64>,
}

impl DeviceEntry {
    /// Position as reported by the server.
    pub fn location(&self) -> GeoPoint {
        self.position.location()
    }

    /// Position converted from GCJ-02 to WGS-84.
    pub fn wgs84_location(&self) -> GeoPoint {
        self.location().gcj02_to_wgs84()
    }

    /// GPS accuracy in meters.
    pub fn location_accuracy(&self) -> f64 {
        self.position.accuracy
    }

    /// Battery level exactly as reported, fraction or percentage, or `-1` if
    /// the device doesn't report one. See [`DeviceEntry::battery_percent`]
    /// for a normalized value.
    pub fn battery_level(&self) -> f64 {
        self.position.attribute_f64("batteryLevel").unwrap_or(-1.)
    }

    /// Attribute set of the tracker that exposes the raw server position.
    pub fn tracker_attributes(&self) -> TrackerAttributes {
        let mut custom = self.attributes.clone();
        custom.retain(|key, _| !RESERVED.contains(&key.as_str()));

        TrackerAttributes {
            custom,
            address: self.position.address.clone(),
            altitude: self.position.altitude,
            category: self.device.category.clone(),
            geofence: self.geofence.as_ref().map(|geofence| geofence.name.clone()),
            motion: self.is_moving(),
            speed: self.position.speed,
            status: self.device.status,
            traccar_id: self.device.id,
            tracker: DOMAIN,
            wgs84_longitude: None,
            wgs84_latitude: None,
        }
    }

    /// Attribute set of the tracker that exposes the WGS-84 position. Same as
    /// [`DeviceEntry::tracker_attributes`] plus the converted coordinates.
    pub fn wgs84_attributes(&self) -> TrackerAttributes {
        let wgs84 = self.wgs84_location();

        TrackerAttributes {
            wgs84_longitude: Some(wgs84.longitude()),
            wgs84_latitude: Some(wgs84.latitude()),
            ..self.tracker_attributes()
        }
    }
}
