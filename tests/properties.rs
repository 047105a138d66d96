//! Property-based tests of the datum conversion.

use gcjconvert::{gcj02_to_wgs84, out_of_china, wgs84_to_gcj02};
use proptest::prelude::*;

fn arb_in_china() -> impl Strategy<Value = (f64, f64)> {
    (72.004..=137.8347f64, 0.8293..=55.8271f64)
}

// Far enough from the edges that the converted point is still in the box
fn arb_interior() -> impl Strategy<Value = (f64, f64)> {
    (72.1..=137.7f64, 0.9..=55.7f64)
}

fn arb_anywhere() -> impl Strategy<Value = (f64, f64)> {
    (-180.0..=180.0f64, -90.0..=90.0f64)
}

proptest! {
    #[test]
    fn identity_wherever_the_box_says_outside((lon, lat) in arb_anywhere()) {
        prop_assume!(out_of_china(lon, lat));
        let converted = gcj02_to_wgs84(lon, lat);
        prop_assert_eq!(converted.longitude().to_bits(), lon.to_bits());
        prop_assert_eq!(converted.latitude().to_bits(), lat.to_bits());
    }

    #[test]
    fn shift_is_bounded((lon, lat) in arb_in_china()) {
        let converted = gcj02_to_wgs84(lon, lat);
        prop_assert!(converted.longitude().is_finite());
        prop_assert!(converted.latitude().is_finite());
        prop_assert!((converted.longitude() - lon).abs() < 0.02);
        prop_assert!((converted.latitude() - lat).abs() < 0.02);
    }

    #[test]
    fn forward_undoes_conversion((lon, lat) in arb_interior()) {
        let wgs84 = gcj02_to_wgs84(lon, lat);
        let back = wgs84_to_gcj02(wgs84.longitude(), wgs84.latitude());
        prop_assert!((back.longitude() - lon).abs() < 1e-4);
        prop_assert!((back.latitude() - lat).abs() < 1e-4);
    }

    #[test]
    fn deterministic((lon, lat) in arb_anywhere()) {
        let a = gcj02_to_wgs84(lon, lat);
        let b = gcj02_to_wgs84(lon, lat);
        prop_assert_eq!(a.longitude().to_bits(), b.longitude().to_bits());
        prop_assert_eq!(a.latitude().to_bits(), b.latitude().to_bits());
    }
}
