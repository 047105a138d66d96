use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::Error;

use super::DOMAIN;

/// Event types a Traccar server can report for a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    DeviceMoving,
    CommandResult,
    DeviceFuelDrop,
    GeofenceEnter,
    DeviceOffline,
    DriverChanged,
    GeofenceExit,
    DeviceOverspeed,
    DeviceOnline,
    DeviceStopped,
    Maintenance,
    Alarm,
    TextMessage,
    DeviceUnknown,
    IgnitionOff,
    IgnitionOn,
}

lazy_static! {
    static ref BY_SERVER_NAME: HashMap<&'static str, EventKind> = EventKind::ALL
        .iter()
        .map(|kind| (kind.server_name(), *kind))
        .collect();
}

impl EventKind {
    pub const ALL: [EventKind; 16] = [
        EventKind::DeviceMoving,
        EventKind::CommandResult,
        EventKind::DeviceFuelDrop,
        EventKind::GeofenceEnter,
        EventKind::DeviceOffline,
        EventKind::DriverChanged,
        EventKind::GeofenceExit,
        EventKind::DeviceOverspeed,
        EventKind::DeviceOnline,
        EventKind::DeviceStopped,
        EventKind::Maintenance,
        EventKind::Alarm,
        EventKind::TextMessage,
        EventKind::DeviceUnknown,
        EventKind::IgnitionOff,
        EventKind::IgnitionOn,
    ];

    /// Name used by the server API, e.g. `deviceMoving`.
    pub fn server_name(&self) -> &'static str {
        match self {
            EventKind::DeviceMoving => "deviceMoving",
            EventKind::CommandResult => "commandResult",
            EventKind::DeviceFuelDrop => "deviceFuelDrop",
            EventKind::GeofenceEnter => "geofenceEnter",
            EventKind::DeviceOffline => "deviceOffline",
            EventKind::DriverChanged => "driverChanged",
            EventKind::GeofenceExit => "geofenceExit",
            EventKind::DeviceOverspeed => "deviceOverspeed",
            EventKind::DeviceOnline => "deviceOnline",
            EventKind::DeviceStopped => "deviceStopped",
            EventKind::Maintenance => "maintenance",
            EventKind::Alarm => "alarm",
            EventKind::TextMessage => "textMessage",
            EventKind::DeviceUnknown => "deviceUnknown",
            EventKind::IgnitionOff => "ignitionOff",
            EventKind::IgnitionOn => "ignitionOn",
        }
    }

    /// Snake-case name, e.g. `device_moving`.
    pub fn snake_name(&self) -> &'static str {
        match self {
            EventKind::DeviceMoving => "device_moving",
            EventKind::CommandResult => "command_result",
            EventKind::DeviceFuelDrop => "device_fuel_drop",
            EventKind::GeofenceEnter => "geofence_enter",
            EventKind::DeviceOffline => "device_offline",
            EventKind::DriverChanged => "driver_changed",
            EventKind::GeofenceExit => "geofence_exit",
            EventKind::DeviceOverspeed => "device_overspeed",
            EventKind::DeviceOnline => "device_online",
            EventKind::DeviceStopped => "device_stopped",
            EventKind::Maintenance => "maintenance",
            EventKind::Alarm => "alarm",
            EventKind::TextMessage => "text_message",
            EventKind::DeviceUnknown => "device_unknown",
            EventKind::IgnitionOff => "ignition_off",
            EventKind::IgnitionOn => "ignition_on",
        }
    }

    /// Event type fired on the host bus, e.g. `ha_traccar_device_moving`.
    ///
    /// ```
    /// use gcjconvert::tracker::EventKind;
    ///
    /// let kind: EventKind = "geofenceEnter".parse().unwrap();
    /// assert_eq!(kind.host_event_type(), "ha_traccar_geofence_enter");
    /// ```
    pub fn host_event_type(&self) -> String {
        format!("{DOMAIN}_{}", self.snake_name())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_SERVER_NAME
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnknownEvent(s.to_string()))
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.server_name())
    }
}
