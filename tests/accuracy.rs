use gcjconvert::{gcj02_to_wgs84, GeoPoint};

// (gcj02 lon, gcj02 lat, wgs84 lon, wgs84 lat), computed with an independent
// implementation of the published algorithm
#[allow(clippy::unreadable_literal)]
const REFERENCE: &[(f64, f64, f64, f64)] = &[
    // Beijing
    (116.3974, 39.9093, 116.39115637074201, 39.90789649683279),
    // Shenzhen
    (114.0579, 22.5431, 114.05278600143454, 22.545817185777537),
    // Shanghai
    (121.4737, 31.2304, 121.46917694072306, 31.23234226242273),
    // Chengdu
    (104.0665, 30.5723, 104.06399509432929, 30.574754459280392),
    // Harbin
    (126.6424, 45.7567, 126.63643018369525, 45.75474889814203),
    // Lhasa
    (91.1409, 29.6456, 91.13937066351407, 29.648336012634026),
    // Guangzhou
    (113.2644, 23.1291, 113.25907040789691, 23.131776660077158),
    // Urumqi
    (87.6168, 43.8256, 87.61395005053073, 43.824394606888816),
    // Sanya
    (109.5119, 18.2528, 109.50781570517333, 18.254505208264362),
    // Kashgar
    (75.9897, 39.4704, 75.98674533994534, 39.470173273604374),
    // Fuyuan
    (134.2936, 48.3647, 134.28591088353858, 48.36231189089025),
];

#[test]
fn matches_reference_implementation() {
    for &(lon, lat, expected_lon, expected_lat) in REFERENCE {
        let converted = gcj02_to_wgs84(lon, lat);

        assert!(
            (converted.longitude() - expected_lon).abs() < 1e-6,
            "longitude of {lon},{lat}: {} != {expected_lon}",
            converted.longitude(),
        );
        assert!(
            (converted.latitude() - expected_lat).abs() < 1e-6,
            "latitude of {lon},{lat}: {} != {expected_lat}",
            converted.latitude(),
        );
    }
}

#[test]
fn identity_outside_china() {
    for (lon, lat) in [
        (0.0, 0.0),
        // San Francisco
        (-122.4194, 37.7749),
        // Tokyo
        (139.6917, 35.6895),
        // Moscow
        (37.6173, 55.7558),
        // Singapore, south of the box
        (103.8198, 0.5),
    ] {
        let converted = gcj02_to_wgs84(lon, lat);
        assert_eq!(converted.longitude().to_bits(), lon.to_bits());
        assert_eq!(converted.latitude().to_bits(), lat.to_bits());
    }
}

#[test]
fn edges_of_the_box_are_converted() {
    for (lon, lat) in [
        (72.004, 30.0),
        (137.8347, 30.0),
        (100.0, 0.8293),
        (100.0, 55.8271),
        (72.004, 0.8293),
        (137.8347, 55.8271),
    ] {
        let converted = gcj02_to_wgs84(lon, lat);
        assert_ne!(converted, GeoPoint::create(lon, lat).unwrap(), "{lon},{lat}");
    }

    // Just past each edge nothing happens
    for (lon, lat) in [
        (72.003_999_9, 30.0),
        (137.834_700_1, 30.0),
        (100.0, 0.829_299_9),
        (100.0, 55.827_100_1),
    ] {
        assert_eq!(gcj02_to_wgs84(lon, lat), GeoPoint::create(lon, lat).unwrap(), "{lon},{lat}");
    }
}

#[test]
fn beijing_shift_is_a_few_hundred_meters() {
    let (lon, lat) = (116.3974, 39.9093);
    let converted = gcj02_to_wgs84(lon, lat);

    let dlon = (converted.longitude() - lon).abs();
    let dlat = (converted.latitude() - lat).abs();
    assert!((0.001..0.01).contains(&dlon), "{dlon}");
    assert!((0.001..0.01).contains(&dlat), "{dlat}");

    let meters = GeoPoint::create(lon, lat).unwrap().haversine(&converted);
    assert!((100.0..1000.0).contains(&meters), "{meters}");
}

#[test]
fn shenzhen_moves_west_and_stays_in_china() {
    let converted = gcj02_to_wgs84(114.0579, 22.5431);

    assert!(converted.longitude() < 114.0579);
    assert_ne!(converted.latitude(), 22.5431);
    assert!(converted.in_china());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let first = gcj02_to_wgs84(121.4737, 31.2304);
    for _ in 0..100 {
        let again = gcj02_to_wgs84(121.4737, 31.2304);
        assert_eq!(again.longitude().to_bits(), first.longitude().to_bits());
        assert_eq!(again.latitude().to_bits(), first.latitude().to_bits());
    }
}

#[test]
fn usable_from_many_threads() {
    let expected = gcj02_to_wgs84(104.0665, 30.5723);

    let handles = (0..8)
        .map(|_| std::thread::spawn(|| gcj02_to_wgs84(104.0665, 30.5723)))
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
