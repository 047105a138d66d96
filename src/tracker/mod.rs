//! Mapping of Traccar server models to what a home-automation host shows per
//! device: the tracker attribute set and the sensor readings. Transport and
//! entity bookkeeping belong to the host and are not handled here.
//!
//! ```
//! use gcjconvert::tracker::{DeviceEntry, TrackerOptions};
//!
//! let options = TrackerOptions::default();
//! let entry: DeviceEntry = DeviceEntry::from_json(r#"{
//!     "device": { "id": 1, "name": "Car", "uniqueId": "car-1", "status": "online" },
//!     "position": { "deviceId": 1, "latitude": 22.5431, "longitude": 114.0579 }
//! }"#).unwrap();
//!
//! assert!(options.accepts(&entry.position));
//! let attrs = entry.wgs84_attributes();
//! assert!(attrs.wgs84_longitude.unwrap() < 114.0579);
//! ```

mod attributes;
mod event;
mod model;
mod options;
mod readings;

pub use attributes::TrackerAttributes;
pub use event::EventKind;
pub use model::{Device, DeviceEntry, DeviceStatus, Geofence, Position};
pub use options::TrackerOptions;
pub use readings::Readings;

/// Name the integration registers under; also the `tracker` attribute value
/// and the prefix of forwarded event types.
pub const DOMAIN: &str = "ha_traccar";
