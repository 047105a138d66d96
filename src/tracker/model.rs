use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{point::GeoPoint, utility::GeoMath, Error};

/// Connection state of a device as reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DeviceStatus {
    Online,
    Offline,
    #[default]
    Unknown,
}

impl From<String> for DeviceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "online" => DeviceStatus::Online,
            "offline" => DeviceStatus::Offline,
            _ => DeviceStatus::Unknown,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub unique_id: String,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// A position fix. `latitude`/`longitude` are whatever the server stores,
/// which for Chinese sources is GCJ-02.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub id: i64,
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    /// Meters per second
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub course: f64,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl Position {
    /// The raw position, with no datum conversion.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }

    pub(crate) fn attribute_f64(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(Value::as_f64)
    }

    pub(crate) fn attribute_flag(&self, key: &str) -> Option<bool> {
        self.attributes.get(key).and_then(truthy)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geofence {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// Everything known about one device after a poll.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub device: Device,
    pub position: Position,
    #[serde(default)]
    pub geofence: Option<Geofence>,
    /// Custom attributes picked by [`TrackerOptions`](super::TrackerOptions).
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl DeviceEntry {
    /// Reads an entry from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Payload`] if the payload doesn't match the server models.
    pub fn from_json(json: &str) -> Result<DeviceEntry, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Loose truthiness of an attribute value. Devices report flags as booleans,
/// numbers or strings depending on the protocol. `null` counts as unset.
pub(crate) fn truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => Some(number.as_f64().is_some_and(|n| n.is_truthy())),
        Value::String(text) => Some(!text.is_empty()),
        Value::Array(items) => Some(!items.is_empty()),
        Value::Object(fields) => Some(!fields.is_empty()),
    }
}
