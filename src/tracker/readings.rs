use log::trace;
use serde::Serialize;

use crate::ThisOrThat;

use super::{DeviceEntry, DeviceStatus};

/// Per-device sensor values. Temperature and distance are only present when
/// the device reports them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readings {
    pub battery: i64,
    pub altitude: i64,
    pub speed: f64,
    pub course: f64,
    pub address: Option<String>,
    pub geofence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
    pub motion: bool,
    pub online: bool,
    pub charging: bool,
}

#[allow(clippy::cast_possible_truncation)]
impl DeviceEntry {
    /// Battery charge in percent. Some devices report a fraction in `[0, 1]`,
    /// others a percentage.
    pub fn battery_percent(&self) -> i64 {
        let level = self.position.attribute_f64("batteryLevel").unwrap_or(0.);
        (level > 1.).ternary_lazy(|| level.round_ties_even(), || (level * 100.).round_ties_even()) as i64
    }

    /// Altitude in whole meters.
    pub fn altitude_m(&self) -> i64 {
        self.position.altitude.round_ties_even() as i64
    }

    /// Speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.position.speed * 3.6
    }

    /// Heading in degrees.
    pub fn course(&self) -> f64 {
        self.position.course
    }

    pub fn address(&self) -> Option<&str> {
        self.position.address.as_deref()
    }

    /// Name of the geofence the device is in. `None` outside any geofence;
    /// what to show then is up to the host.
    pub fn geofence_name(&self) -> Option<&str> {
        self.geofence.as_ref().map(|geofence| geofence.name.as_str())
    }

    /// Device temperature in °C.
    pub fn temperature(&self) -> Option<f64> {
        self.position.attribute_f64("deviceTemp")
    }

    /// Odometer in whole kilometers.
    pub fn total_distance_km(&self) -> Option<i64> {
        self.position
            .attribute_f64("totalDistance")
            .map(|meters| (meters / 1000.).round_ties_even() as i64)
    }

    pub fn is_moving(&self) -> bool {
        self.position.attribute_flag("motion").unwrap_or(false)
    }

    pub fn is_online(&self) -> bool {
        self.device.status == DeviceStatus::Online
    }

    /// Not every protocol reports charging. Falls back to `charging`, then to
    /// the ignition state.
    pub fn is_charging(&self) -> bool {
        if let Some(charge) = self.position.attribute_flag("charge") {
            return charge;
        }
        if let Some(charging) = self.position.attribute_flag("charging") {
            return charging;
        }

        trace!("Device {} reports no charge state, using ignition", self.device.id);
        self.position.attribute_flag("ignition").unwrap_or(false)
    }

    /// All sensor values at once.
    pub fn readings(&self) -> Readings {
        Readings {
            battery: self.battery_percent(),
            altitude: self.altitude_m(),
            speed: self.speed_kmh(),
            course: self.course(),
            address: self.address().map(str::to_string),
            geofence: self.geofence_name().map(str::to_string),
            temperature: self.temperature(),
            distance: self.total_distance_km(),
            motion: self.is_moving(),
            online: self.is_online(),
            charging: self.is_charging(),
        }
    }
}
