use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Device, DeviceEntry, EventKind, Geofence, Position};

/// User options of the tracker integration. Missing keys take their default,
/// so an empty object is a valid configuration.
///
/// ```
/// use gcjconvert::tracker::TrackerOptions;
///
/// let options: TrackerOptions = serde_json::from_str(r#"{
///     "max_accuracy": 50.0,
///     "skip_accuracy_filter_for": ["alarm"],
///     "events": ["deviceOnline", "geofenceExit"]
/// }"#).unwrap();
///
/// assert_eq!(options.max_accuracy, 50.0);
/// assert!(options.custom_attributes.is_empty());
/// assert_eq!(options.events.len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerOptions {
    /// Positions less accurate than this many meters are dropped. `0` disables
    /// the filter.
    pub max_accuracy: f64,
    /// Position attributes that, when set, let a position through the
    /// accuracy filter regardless.
    pub skip_accuracy_filter_for: Vec<String>,
    /// Device or position attributes copied into the attribute set.
    pub custom_attributes: Vec<String>,
    /// Server events forwarded to the host.
    pub events: Vec<EventKind>,
}

impl TrackerOptions {
    /// Returns whether a position passes the accuracy filter.
    pub fn accepts(&self, position: &Position) -> bool {
        if self.max_accuracy <= 0. || position.accuracy <= self.max_accuracy {
            return true;
        }

        let skip = self
            .skip_accuracy_filter_for
            .iter()
            .any(|attr| position.attribute_flag(attr).unwrap_or(false));

        if !skip {
            debug!(
                "Excluded position of device {} by accuracy filter: {}m > {}m",
                position.device_id, position.accuracy, self.max_accuracy,
            );
        }

        skip
    }

    /// Picks the configured custom attributes, device attributes first, then
    /// position attributes. Keys found on neither are present as `null`.
    pub fn custom_attributes(&self, device: &Device, position: &Position) -> Map<String, Value> {
        self.custom_attributes
            .iter()
            .map(|attr| {
                let value = device
                    .attributes
                    .get(attr)
                    .or_else(|| position.attributes.get(attr))
                    .cloned()
                    .unwrap_or(Value::Null);
                (attr.clone(), value)
            })
            .collect()
    }

    /// Assembles the entry for one device, or `None` if the position is
    /// filtered out.
    pub fn entry(&self, device: Device, position: Position, geofence: Option<Geofence>) -> Option<DeviceEntry> {
        if !self.accepts(&position) {
            return None;
        }

        let attributes = self.custom_attributes(&device, &position);
        Some(DeviceEntry {
            device,
            position,
            geofence,
            attributes,
        })
    }

    /// Returns whether events of this kind are forwarded.
    pub fn forwards(&self, kind: EventKind) -> bool {
        self.events.contains(&kind)
    }
}
