#![cfg(feature = "tracker")]

use gcjconvert::{
    gcj02_to_wgs84,
    tracker::{Device, DeviceStatus, EventKind, Geofence, Position, TrackerOptions},
};
use serde_json::json;

const DEVICES: &str = r#"[
    {"id": 1, "name": "Delivery Van", "uniqueId": "862345", "status": "online",
     "category": "van", "model": "GT06", "attributes": {"plate": "粤B12345"}},
    {"id": 2, "name": "Kid Watch", "uniqueId": "w-2", "status": "offline",
     "attributes": {}}
]"#;

const POSITIONS: &str = r#"[
    {"id": 100, "deviceId": 1, "latitude": 22.5431, "longitude": 114.0579,
     "altitude": 18.2, "speed": 8.0, "course": 90.0, "accuracy": 12.0,
     "address": "Futian, Shenzhen",
     "attributes": {"batteryLevel": 0.92, "motion": true, "totalDistance": 123456.0}},
    {"id": 101, "deviceId": 2, "latitude": 39.9093, "longitude": 116.3974,
     "altitude": 44.0, "speed": 0.0, "course": 0.0, "accuracy": 900.0,
     "address": null, "attributes": {"batteryLevel": 15, "charge": false}}
]"#;

fn options() -> TrackerOptions {
    serde_json::from_value(json!({
        "max_accuracy": 100.0,
        "custom_attributes": ["plate"],
        "events": ["deviceOnline", "alarm"],
    }))
    .unwrap()
}

#[test]
fn poll_to_attributes() {
    let devices: Vec<Device> = serde_json::from_str(DEVICES).unwrap();
    let positions: Vec<Position> = serde_json::from_str(POSITIONS).unwrap();
    let geofence = Geofence { id: 5, name: "Depot".into() };
    let options = options();

    let entries = devices
        .into_iter()
        .filter_map(|device| {
            let position = positions.iter().find(|p| p.device_id == device.id)?.clone();
            let geofence = (device.id == 1).then(|| geofence.clone());
            options.entry(device, position, geofence)
        })
        .collect::<Vec<_>>();

    // The watch is dropped by the accuracy filter
    assert_eq!(entries.len(), 1);
    let van = &entries[0];

    let attrs = serde_json::to_value(van.wgs84_attributes()).unwrap();
    let expected = gcj02_to_wgs84(114.0579, 22.5431);
    assert_eq!(attrs["plate"], json!("粤B12345"));
    assert_eq!(attrs["geofence"], json!("Depot"));
    assert_eq!(attrs["status"], json!("online"));
    assert_eq!(attrs["tracker"], json!("ha_traccar"));
    assert_eq!(attrs["traccar_id"], json!(1));
    assert_eq!(attrs["motion"], json!(true));
    assert_eq!(attrs["wgs84_longitude"], json!(expected.longitude()));
    assert_eq!(attrs["wgs84_latitude"], json!(expected.latitude()));

    let readings = van.readings();
    assert_eq!(readings.battery, 92);
    assert_eq!(readings.altitude, 18);
    assert_eq!(readings.distance, Some(123));
    assert_eq!(readings.geofence.as_deref(), Some("Depot"));
    assert!(readings.online);
    assert!(readings.motion);
    assert!(!readings.charging);
}

#[test]
fn raw_tracker_keeps_server_position() {
    let devices: Vec<Device> = serde_json::from_str(DEVICES).unwrap();
    let positions: Vec<Position> = serde_json::from_str(POSITIONS).unwrap();

    let entry = TrackerOptions::default()
        .entry(devices[1].clone(), positions[1].clone(), None)
        .unwrap();

    assert_eq!(entry.device.status, DeviceStatus::Offline);
    assert_eq!(entry.location().longitude(), 116.3974);
    assert_eq!(entry.location().latitude(), 39.9093);
    assert!(entry.wgs84_location().longitude() < 116.3974);
    assert_eq!(entry.battery_level(), 15.);
    assert_eq!(entry.readings().battery, 15);
    assert!(entry.address().is_none());
    assert!(!entry.is_charging());
}

#[test]
fn configured_events() {
    let options = options();

    assert!(options.forwards(EventKind::DeviceOnline));
    assert!(options.forwards("alarm".parse().unwrap()));
    assert!(!options.forwards(EventKind::GeofenceExit));
}
