#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion of positions from the GCJ-02 datum, used by mapping and
//! positioning services inside mainland China, to the global WGS-84 datum.
//!
//! ```
//! use gcjconvert::gcj02_to_wgs84;
//!
//! // Tian'anmen, as reported by a GCJ-02 source
//! let wgs84 = gcj02_to_wgs84(116.3974, 39.9093);
//!
//! assert!((wgs84.longitude() - 116.391_156).abs() < 1e-6);
//! assert!((wgs84.latitude() - 39.907_896).abs() < 1e-6);
//!
//! // Outside China nothing is shifted
//! let sf = gcj02_to_wgs84(-122.4194, 37.7749);
//! assert_eq!(sf.longitude(), -122.4194);
//! assert_eq!(sf.latitude(), 37.7749);
//! ```

use thiserror::Error;

pub mod datum;
pub mod point;
#[cfg(feature = "tracker")]
pub mod tracker;

pub use datum::{gcj02_to_wgs84, out_of_china, wgs84_to_gcj02};
pub use point::GeoPoint;

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Unknown tracker event: {0}")]
    UnknownEvent(String),
    #[error("Tracker payload is invalid: {0}")]
    Payload(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "tracker")]
impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Payload(Box::new(value))
    }
}

pub trait ParseCoord {
    /// Parses a coordinate from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if the text is not a valid coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Propagates the error of the target type's [`ParseCoord`] implementation.
///
/// # Usage
///
/// ```
/// use gcjconvert::GeoPoint;
///
/// let point: GeoPoint = gcjconvert::from_str("114.0579,22.5431").unwrap();
/// assert_eq!(point.longitude(), 114.0579);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }

    fn ternary_lazy<F, E, T>(&self, r#true: F, r#false: E) -> T
    where
        F: Fn() -> T,
        E: Fn() -> T,
    {
        if *self { r#true() } else { r#false() }
    }
}
